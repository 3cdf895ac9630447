//! Conversation and message data repository.
//!
//! A conversation is identified by its (tenant, landlord, property) triple, where
//! the property may be absent for general enquiries.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Query, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::messaging::{ConversationKey, SendMessageParams};

pub struct ConversationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConversationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the conversation for the triple.
    ///
    /// A `None` property matches only conversations without a property.
    pub async fn find_by_key(
        &self,
        key: ConversationKey,
    ) -> Result<Option<entity::conversation::Model>, DbErr> {
        let property = match key.property_id {
            Some(id) => entity::conversation::Column::PropertyId.eq(id),
            None => entity::conversation::Column::PropertyId.is_null(),
        };

        entity::prelude::Conversation::find()
            .filter(entity::conversation::Column::TenantId.eq(key.tenant_id))
            .filter(entity::conversation::Column::LandlordId.eq(key.landlord_id))
            .filter(property)
            .one(self.db)
            .await
    }

    /// Returns the conversation for the triple, creating it when missing.
    ///
    /// # Arguments
    /// - `key` - Tenant, landlord and optional property
    ///
    /// # Returns
    /// - `Ok(Model)` - Existing or newly created conversation
    /// - `Err(DbErr)` - Database error during lookup or insert
    pub async fn get_or_create(
        &self,
        key: ConversationKey,
    ) -> Result<entity::conversation::Model, DbErr> {
        if let Some(existing) = self.find_by_key(key).await? {
            return Ok(existing);
        }

        let now = Utc::now();
        entity::conversation::ActiveModel {
            property_id: ActiveValue::Set(key.property_id),
            tenant_id: ActiveValue::Set(key.tenant_id),
            landlord_id: ActiveValue::Set(key.landlord_id),
            last_message_at: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::conversation::Model>, DbErr> {
        entity::prelude::Conversation::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Conversations the user takes part in, most recent activity first.
    pub async fn list_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::conversation::Model>, DbErr> {
        entity::prelude::Conversation::find()
            .filter(
                Condition::any()
                    .add(entity::conversation::Column::TenantId.eq(user_id))
                    .add(entity::conversation::Column::LandlordId.eq(user_id)),
            )
            .order_by_desc(entity::conversation::Column::LastMessageAt)
            .order_by_desc(entity::conversation::Column::Id)
            .all(self.db)
            .await
    }

    /// Stores a message and bumps the conversation's `last_message_at`.
    ///
    /// # Arguments
    /// - `conversation_id` - Target conversation
    /// - `sender_id` - Participant sending the message
    /// - `params` - Sanitized content, type and optional file URL
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored message
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn add_message(
        &self,
        conversation_id: i32,
        sender_id: i32,
        params: SendMessageParams,
    ) -> Result<entity::message::Model, DbErr> {
        let now = Utc::now();

        let message = entity::message::ActiveModel {
            conversation_id: ActiveValue::Set(conversation_id),
            sender_id: ActiveValue::Set(sender_id),
            content: ActiveValue::Set(params.content),
            message_type: ActiveValue::Set(params.message_type),
            file_url: ActiveValue::Set(params.file_url),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.touch(conversation_id, now).await?;

        Ok(message)
    }

    async fn touch(&self, conversation_id: i32, at: DateTime<Utc>) -> Result<(), DbErr> {
        entity::prelude::Conversation::update_many()
            .col_expr(
                entity::conversation::Column::LastMessageAt,
                sea_orm::sea_query::Expr::value(at),
            )
            .filter(entity::conversation::Column::Id.eq(conversation_id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Messages in a conversation, oldest first.
    pub async fn list_messages(
        &self,
        conversation_id: i32,
    ) -> Result<Vec<entity::message::Model>, DbErr> {
        entity::prelude::Message::find()
            .filter(entity::message::Column::ConversationId.eq(conversation_id))
            .order_by_asc(entity::message::Column::CreatedAt)
            .order_by_asc(entity::message::Column::Id)
            .all(self.db)
            .await
    }

    /// Marks messages not sent by `reader_id` as read.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of messages newly marked read
    pub async fn mark_read(&self, conversation_id: i32, reader_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Message::update_many()
            .col_expr(
                entity::message::Column::IsRead,
                sea_orm::sea_query::Expr::value(true),
            )
            .filter(entity::message::Column::ConversationId.eq(conversation_id))
            .filter(entity::message::Column::SenderId.ne(reader_id))
            .filter(entity::message::Column::IsRead.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Unread messages from others across the user's conversations.
    pub async fn unread_count(&self, user_id: i32) -> Result<u64, DbErr> {
        let conversations = Query::select()
            .column(entity::conversation::Column::Id)
            .from(entity::conversation::Entity)
            .cond_where(
                Condition::any()
                    .add(entity::conversation::Column::TenantId.eq(user_id))
                    .add(entity::conversation::Column::LandlordId.eq(user_id)),
            )
            .to_owned();

        entity::prelude::Message::find()
            .filter(entity::message::Column::ConversationId.in_subquery(conversations))
            .filter(entity::message::Column::SenderId.ne(user_id))
            .filter(entity::message::Column::IsRead.eq(false))
            .count(self.db)
            .await
    }
}

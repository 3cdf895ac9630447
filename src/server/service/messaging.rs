//! Tenant and landlord conversations.

use entity::sea_orm_active_enums::NotificationKind;
use sea_orm::DatabaseConnection;

use crate::{
    model::messaging::StartConversationDto,
    server::{
        data::{
            conversation::ConversationRepository, property::PropertyRepository,
            user::UserRepository,
        },
        error::{
            domain::{DomainError, Resource},
            AppError,
        },
        model::{
            messaging::{is_participant, other_participant, ConversationKey, SendMessageParams},
            notification::{CreateNotificationParams, RELATED_CONVERSATION},
            user::Caller,
        },
        service::notification::NotificationService,
    },
};

/// Longest message excerpt carried in a notification.
const PREVIEW_CHARS: usize = 100;

pub struct MessagingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessagingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens, or reuses, a conversation between the caller as tenant and a landlord.
    ///
    /// With only a `property_id` the landlord is the listing's owner; with both,
    /// the listing must belong to that landlord. Talking to yourself is rejected.
    pub async fn start_conversation(
        &self,
        caller: Caller,
        dto: StartConversationDto,
    ) -> Result<entity::conversation::Model, AppError> {
        let property = match dto.property_id {
            Some(property_id) => Some(
                PropertyRepository::new(self.db)
                    .find_by_id(property_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::from(DomainError::not_found(Resource::Property, property_id))
                    })?,
            ),
            None => None,
        };

        let landlord_id = match (dto.landlord_id, &property) {
            (Some(landlord_id), Some(property)) if property.landlord_id != landlord_id => {
                return Err(DomainError::Invalid("property_id").into());
            }
            (Some(landlord_id), _) => landlord_id,
            (None, Some(property)) => property.landlord_id,
            (None, None) => return Err(DomainError::Invalid("landlord_id").into()),
        };

        if landlord_id == caller.id {
            return Err(DomainError::Invalid("landlord_id").into());
        }
        UserRepository::new(self.db)
            .find_by_id(landlord_id)
            .await?
            .ok_or_else(|| AppError::from(DomainError::not_found(Resource::User, landlord_id)))?;

        let conversation = ConversationRepository::new(self.db)
            .get_or_create(ConversationKey {
                tenant_id: caller.id,
                landlord_id,
                property_id: dto.property_id,
            })
            .await?;

        Ok(conversation)
    }

    /// Conversations of the user, most recent activity first.
    pub async fn list_conversations(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::conversation::Model>, AppError> {
        Ok(ConversationRepository::new(self.db)
            .list_for_user(user_id)
            .await?)
    }

    /// Sends a message as the caller and notifies the other participant.
    pub async fn send_message(
        &self,
        caller: Caller,
        conversation_id: i32,
        params: SendMessageParams,
    ) -> Result<entity::message::Model, AppError> {
        let conversation = self.participant_conversation(caller, conversation_id).await?;

        let message = ConversationRepository::new(self.db)
            .add_message(conversation.id, caller.id, params)
            .await?;

        tracing::debug!(
            "User {} sent message {} in conversation {}",
            caller.id,
            message.id,
            conversation.id
        );

        let preview: String = message.content.chars().take(PREVIEW_CHARS).collect();
        NotificationService::new(self.db)
            .notify(
                CreateNotificationParams::new(
                    other_participant(&conversation, caller.id),
                    NotificationKind::MessageNew,
                    "New message",
                    "رسالة جديدة",
                )
                .content(preview.clone(), preview)
                .related(RELATED_CONVERSATION, conversation.id),
            )
            .await;

        Ok(message)
    }

    /// Messages of a conversation, oldest first, for its participants.
    pub async fn list_messages(
        &self,
        caller: Caller,
        conversation_id: i32,
    ) -> Result<Vec<entity::message::Model>, AppError> {
        self.participant_conversation(caller, conversation_id).await?;

        Ok(ConversationRepository::new(self.db)
            .list_messages(conversation_id)
            .await?)
    }

    /// Marks the other side's messages as read; returns how many changed.
    pub async fn mark_read(&self, caller: Caller, conversation_id: i32) -> Result<u64, AppError> {
        self.participant_conversation(caller, conversation_id).await?;

        Ok(ConversationRepository::new(self.db)
            .mark_read(conversation_id, caller.id)
            .await?)
    }

    pub async fn unread_count(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(ConversationRepository::new(self.db)
            .unread_count(user_id)
            .await?)
    }

    async fn participant_conversation(
        &self,
        caller: Caller,
        conversation_id: i32,
    ) -> Result<entity::conversation::Model, AppError> {
        let conversation = ConversationRepository::new(self.db)
            .find_by_id(conversation_id)
            .await?
            .ok_or_else(|| {
                AppError::from(DomainError::not_found(Resource::Conversation, conversation_id))
            })?;

        if !is_participant(&conversation, caller.id) {
            return Err(caller.denied("access this conversation").into());
        }

        Ok(conversation)
    }
}

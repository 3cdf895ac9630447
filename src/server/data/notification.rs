//! Notification data repository.

use chrono::Utc;
use entity::sea_orm_active_enums::NotificationKind;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::notification::CreateNotificationParams;

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores an unread notification.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created notification
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: CreateNotificationParams,
    ) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            kind: ActiveValue::Set(params.kind),
            title_en: ActiveValue::Set(params.title_en),
            title_ar: ActiveValue::Set(params.title_ar),
            content_en: ActiveValue::Set(params.content_en),
            content_ar: ActiveValue::Set(params.content_ar),
            related_id: ActiveValue::Set(params.related_id),
            related_type: ActiveValue::Set(params.related_type),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await
    }

    /// A user's notifications, newest first.
    pub async fn list_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn unread_count(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .count(self.db)
            .await
    }

    /// Returns `true` when the notification exists.
    pub async fn mark_read(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(
                entity::notification::Column::IsRead,
                sea_orm::sea_query::Expr::value(true),
            )
            .filter(entity::notification::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Marks all of a user's notifications as read.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications that were unread
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(
                entity::notification::Column::IsRead,
                sea_orm::sea_query::Expr::value(true),
            )
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Whether the user already has a notification of `kind` for the related record.
    pub async fn exists_for(
        &self,
        user_id: i32,
        kind: NotificationKind,
        related_type: &str,
        related_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::Kind.eq(kind))
            .filter(entity::notification::Column::RelatedType.eq(related_type))
            .filter(entity::notification::Column::RelatedId.eq(related_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository,
    error::{
        domain::{DomainError, Resource},
        AppError,
    },
    model::{notification::CreateNotificationParams, user::Caller},
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a notification and returns it.
    pub async fn create(
        &self,
        params: CreateNotificationParams,
    ) -> Result<entity::notification::Model, AppError> {
        Ok(NotificationRepository::new(self.db).create(params).await?)
    }

    /// Sends a side-effect notification.
    ///
    /// A failure is logged and swallowed so the triggering operation still succeeds.
    pub async fn notify(&self, params: CreateNotificationParams) {
        let user_id = params.user_id;
        let kind = params.kind;

        if let Err(e) = NotificationRepository::new(self.db).create(params).await {
            tracing::warn!(
                "Failed to send {:?} notification to user {}: {}",
                kind,
                user_id,
                e
            );
        }
    }

    pub async fn list_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::notification::Model>, AppError> {
        Ok(NotificationRepository::new(self.db)
            .list_by_user(user_id)
            .await?)
    }

    pub async fn unread_count(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .unread_count(user_id)
            .await?)
    }

    /// Marks one of the caller's notifications as read.
    ///
    /// Someone else's notification is reported as missing.
    pub async fn mark_read(&self, caller: Caller, id: i32) -> Result<(), AppError> {
        let repo = NotificationRepository::new(self.db);

        match repo.find_by_id(id).await? {
            Some(notification) if notification.user_id == caller.id => {
                repo.mark_read(id).await?;
                Ok(())
            }
            _ => Err(DomainError::not_found(Resource::Notification, id).into()),
        }
    }

    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .mark_all_read(user_id)
            .await?)
    }
}

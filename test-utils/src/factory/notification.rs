//! Notification factory.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::NotificationKind;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an unread notification for a user.
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: i32,
    kind: NotificationKind,
    created_at: DateTime<Utc>,
) -> Result<entity::notification::Model, DbErr> {
    entity::notification::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        kind: ActiveValue::Set(kind),
        title_en: ActiveValue::Set("Notification".to_string()),
        title_ar: ActiveValue::Set(Some("إشعار".to_string())),
        content_en: ActiveValue::Set(None),
        content_ar: ActiveValue::Set(None),
        related_id: ActiveValue::Set(None),
        related_type: ActiveValue::Set(None),
        is_read: ActiveValue::Set(false),
        created_at: ActiveValue::Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
}

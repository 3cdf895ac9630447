use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::NotificationKind;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    pub user_id: i32,
    #[schema(value_type = String)]
    pub kind: NotificationKind,
    pub title_en: String,
    pub title_ar: Option<String>,
    pub content_en: Option<String>,
    pub content_ar: Option<String>,
    pub related_id: Option<i32>,
    pub related_type: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// System notification sent by an admin to one user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SendNotificationDto {
    pub user_id: i32,
    pub title_en: String,
    pub title_ar: Option<String>,
    pub content_en: Option<String>,
    pub content_ar: Option<String>,
}

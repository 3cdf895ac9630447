use entity::sea_orm_active_enums::NotificationKind;

use crate::{
    model::notification::{NotificationDto, SendNotificationDto},
    server::{error::domain::DomainError, util::sanitize::{sanitize_opt, sanitize_text}},
};

/// Related record type stored on booking notifications.
pub const RELATED_BOOKING: &str = "booking";
pub const RELATED_PAYMENT: &str = "payment";
pub const RELATED_CONVERSATION: &str = "conversation";
pub const RELATED_MAINTENANCE: &str = "maintenance_request";

#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    pub user_id: i32,
    pub kind: NotificationKind,
    pub title_en: String,
    pub title_ar: Option<String>,
    pub content_en: Option<String>,
    pub content_ar: Option<String>,
    pub related_id: Option<i32>,
    pub related_type: Option<String>,
}

impl CreateNotificationParams {
    /// A bilingual notification with title only.
    pub fn new(user_id: i32, kind: NotificationKind, title_en: &str, title_ar: &str) -> Self {
        Self {
            user_id,
            kind,
            title_en: title_en.to_string(),
            title_ar: Some(title_ar.to_string()),
            content_en: None,
            content_ar: None,
            related_id: None,
            related_type: None,
        }
    }

    pub fn content(mut self, content_en: String, content_ar: String) -> Self {
        self.content_en = Some(content_en);
        self.content_ar = Some(content_ar);
        self
    }

    pub fn related(mut self, related_type: &str, related_id: i32) -> Self {
        self.related_type = Some(related_type.to_string());
        self.related_id = Some(related_id);
        self
    }
}

impl TryFrom<SendNotificationDto> for CreateNotificationParams {
    type Error = DomainError;

    fn try_from(dto: SendNotificationDto) -> Result<Self, Self::Error> {
        let title_en = sanitize_text(dto.title_en.trim());
        if title_en.is_empty() {
            return Err(DomainError::Invalid("title_en"));
        }

        Ok(Self {
            user_id: dto.user_id,
            kind: NotificationKind::System,
            title_en,
            title_ar: sanitize_opt(dto.title_ar),
            content_en: sanitize_opt(dto.content_en),
            content_ar: sanitize_opt(dto.content_ar),
            related_id: None,
            related_type: None,
        })
    }
}

impl From<entity::notification::Model> for NotificationDto {
    fn from(notification: entity::notification::Model) -> Self {
        Self {
            id: notification.id,
            user_id: notification.user_id,
            kind: notification.kind,
            title_en: notification.title_en,
            title_ar: notification.title_ar,
            content_en: notification.content_en,
            content_ar: notification.content_ar,
            related_id: notification.related_id,
            related_type: notification.related_type,
            is_read: notification.is_read,
            created_at: notification.created_at,
        }
    }
}

//! Conversation and message factories.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::MessageType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a conversation between a tenant and a landlord.
pub async fn create_conversation(
    db: &DatabaseConnection,
    tenant_id: i32,
    landlord_id: i32,
    property_id: Option<i32>,
) -> Result<entity::conversation::Model, DbErr> {
    let now = Utc::now();
    entity::conversation::ActiveModel {
        property_id: ActiveValue::Set(property_id),
        tenant_id: ActiveValue::Set(tenant_id),
        landlord_id: ActiveValue::Set(landlord_id),
        last_message_at: ActiveValue::Set(now),
        created_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a text message sent at the given time.
///
/// Does not touch the conversation's `last_message_at`.
pub async fn create_message(
    db: &DatabaseConnection,
    conversation_id: i32,
    sender_id: i32,
    content: impl Into<String>,
    created_at: DateTime<Utc>,
) -> Result<entity::message::Model, DbErr> {
    entity::message::ActiveModel {
        conversation_id: ActiveValue::Set(conversation_id),
        sender_id: ActiveValue::Set(sender_id),
        content: ActiveValue::Set(content.into()),
        message_type: ActiveValue::Set(MessageType::Text),
        file_url: ActiveValue::Set(None),
        is_read: ActiveValue::Set(false),
        created_at: ActiveValue::Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
}

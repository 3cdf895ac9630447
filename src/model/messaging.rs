use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::MessageType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConversationDto {
    pub id: i32,
    pub property_id: Option<i32>,
    pub tenant_id: i32,
    pub landlord_id: i32,
    pub last_message_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Opens a conversation with a landlord, optionally about a listing.
///
/// When only `property_id` is given the landlord is the listing's owner.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct StartConversationDto {
    pub landlord_id: Option<i32>,
    pub property_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub id: i32,
    pub conversation_id: i32,
    pub sender_id: i32,
    pub content: String,
    #[schema(value_type = String)]
    pub message_type: MessageType,
    pub file_url: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SendMessageDto {
    pub content: String,
    #[schema(value_type = Option<String>)]
    pub message_type: Option<MessageType>,
    pub file_url: Option<String>,
}

use entity::sea_orm_active_enums::MessageType;

use crate::{
    model::messaging::{ConversationDto, MessageDto, SendMessageDto},
    server::{error::domain::DomainError, util::sanitize::sanitize_text},
};

/// Participants and optional listing that identify a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversationKey {
    pub tenant_id: i32,
    pub landlord_id: i32,
    pub property_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct SendMessageParams {
    pub content: String,
    pub message_type: MessageType,
    pub file_url: Option<String>,
}

impl TryFrom<SendMessageDto> for SendMessageParams {
    type Error = DomainError;

    /// Trims and sanitizes the content; blank messages are rejected.
    fn try_from(dto: SendMessageDto) -> Result<Self, Self::Error> {
        let content = dto.content.trim();
        if content.is_empty() {
            return Err(DomainError::EmptyMessage);
        }

        Ok(Self {
            content: sanitize_text(content),
            message_type: dto.message_type.unwrap_or(MessageType::Text),
            file_url: dto.file_url,
        })
    }
}

/// True when `user_id` is one side of the conversation.
pub fn is_participant(conversation: &entity::conversation::Model, user_id: i32) -> bool {
    conversation.tenant_id == user_id || conversation.landlord_id == user_id
}

/// The participant opposite `sender_id`.
pub fn other_participant(conversation: &entity::conversation::Model, sender_id: i32) -> i32 {
    if conversation.tenant_id == sender_id {
        conversation.landlord_id
    } else {
        conversation.tenant_id
    }
}

impl From<entity::conversation::Model> for ConversationDto {
    fn from(conversation: entity::conversation::Model) -> Self {
        Self {
            id: conversation.id,
            property_id: conversation.property_id,
            tenant_id: conversation.tenant_id,
            landlord_id: conversation.landlord_id,
            last_message_at: conversation.last_message_at,
            created_at: conversation.created_at,
        }
    }
}

impl From<entity::message::Model> for MessageDto {
    fn from(message: entity::message::Model) -> Self {
        Self {
            id: message.id,
            conversation_id: message.conversation_id,
            sender_id: message.sender_id,
            content: message.content,
            message_type: message.message_type,
            file_url: message.file_url,
            is_read: message.is_read,
            created_at: message.created_at,
        }
    }
}

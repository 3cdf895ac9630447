use crate::{
    model::messaging::StartConversationDto,
    server::{
        data::notification::NotificationRepository,
        error::{domain::DomainError, AppError},
        model::{messaging::SendMessageParams, user::Caller},
        service::messaging::MessagingService,
    },
};
use entity::sea_orm_active_enums::{MessageType, NotificationKind};
use test_utils::{
    builder::TestBuilder, factory, factory::helpers::create_property_with_landlord,
};

mod conversation;

fn text(content: &str) -> SendMessageParams {
    SendMessageParams {
        content: content.to_string(),
        message_type: MessageType::Text,
        file_url: None,
    }
}

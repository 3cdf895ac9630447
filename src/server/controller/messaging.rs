use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CountDto, ErrorDto},
        messaging::{ConversationDto, MessageDto, SendMessageDto, StartConversationDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{messaging::SendMessageParams, user::Caller},
        service::messaging::MessagingService,
        state::AppState,
    },
};

/// Tag for grouping messaging endpoints in OpenAPI documentation
pub static MESSAGING_TAG: &str = "messaging";

/// Open a conversation with a landlord, or return the existing one.
///
/// The caller is the tenant side. With only `property_id` the landlord is the
/// listing's owner.
#[utoipa::path(
    post,
    path = "/api/conversations",
    tag = MESSAGING_TAG,
    request_body = StartConversationDto,
    responses(
        (status = 200, description = "The conversation", body = ConversationDto),
        (status = 400, description = "No landlord resolved or messaging yourself", body = ErrorDto),
        (status = 404, description = "Listing or landlord not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_conversation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<StartConversationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let conversation = MessagingService::new(&state.db)
        .start_conversation(Caller::from(&user), payload)
        .await?;

    Ok((StatusCode::OK, Json(ConversationDto::from(conversation))))
}

/// The caller's conversations, most recent activity first.
#[utoipa::path(
    get,
    path = "/api/conversations",
    tag = MESSAGING_TAG,
    responses(
        (status = 200, description = "Conversations", body = Vec<ConversationDto>),
        (status = 401, description = "Not registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_conversations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let conversations = MessagingService::new(&state.db)
        .list_conversations(user.id)
        .await?;
    let conversations: Vec<ConversationDto> = conversations
        .into_iter()
        .map(ConversationDto::from)
        .collect();

    Ok((StatusCode::OK, Json(conversations)))
}

/// Unread messages addressed to the caller across all conversations.
#[utoipa::path(
    get,
    path = "/api/conversations/unread-count",
    tag = MESSAGING_TAG,
    responses(
        (status = 200, description = "Unread message count", body = CountDto),
        (status = 401, description = "Not registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unread_message_count(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let count = MessagingService::new(&state.db)
        .unread_count(user.id)
        .await?;

    Ok((StatusCode::OK, Json(CountDto { count })))
}

/// Messages of a conversation, oldest first.
#[utoipa::path(
    get,
    path = "/api/conversations/{id}/messages",
    tag = MESSAGING_TAG,
    params(("id" = i32, Path, description = "Conversation ID")),
    responses(
        (status = 200, description = "Messages", body = Vec<MessageDto>),
        (status = 403, description = "Not a participant", body = ErrorDto),
        (status = 404, description = "Conversation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_messages(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let messages = MessagingService::new(&state.db)
        .list_messages(Caller::from(&user), id)
        .await?;
    let messages: Vec<MessageDto> = messages.into_iter().map(MessageDto::from).collect();

    Ok((StatusCode::OK, Json(messages)))
}

/// Send a message. The other participant is notified.
#[utoipa::path(
    post,
    path = "/api/conversations/{id}/messages",
    tag = MESSAGING_TAG,
    params(("id" = i32, Path, description = "Conversation ID")),
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Message sent", body = MessageDto),
        (status = 400, description = "Empty message", body = ErrorDto),
        (status = 403, description = "Not a participant", body = ErrorDto),
        (status = 404, description = "Conversation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let params = SendMessageParams::try_from(payload)?;
    let message = MessagingService::new(&state.db)
        .send_message(Caller::from(&user), id, params)
        .await?;

    Ok((StatusCode::CREATED, Json(MessageDto::from(message))))
}

/// Mark messages from the other participant as read.
#[utoipa::path(
    post,
    path = "/api/conversations/{id}/read",
    tag = MESSAGING_TAG,
    params(("id" = i32, Path, description = "Conversation ID")),
    responses(
        (status = 200, description = "Number of messages marked read", body = CountDto),
        (status = 403, description = "Not a participant", body = ErrorDto),
        (status = 404, description = "Conversation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_conversation_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let count = MessagingService::new(&state.db)
        .mark_read(Caller::from(&user), id)
        .await?;

    Ok((StatusCode::OK, Json(CountDto { count })))
}

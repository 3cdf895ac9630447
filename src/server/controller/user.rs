use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{UpdateProfileDto, UpsertMeDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{UpdateProfileParams, UpsertUserParam},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register or refresh the caller.
///
/// Creates the user named by the identity header on first sign-in and refreshes
/// `last_signed_in` plus any supplied profile fields afterwards.
///
/// # Returns
/// - `200 OK` - The caller's user record
/// - `401 Unauthorized` - Identity header missing
#[utoipa::path(
    put,
    path = "/api/me",
    tag = USER_TAG,
    request_body = UpsertMeDto,
    responses(
        (status = 200, description = "Caller registered or refreshed", body = UserDto),
        (status = 401, description = "Identity header missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpsertMeDto>,
) -> Result<impl IntoResponse, AppError> {
    let open_id = AuthGuard::new(&state.db, &headers).open_id()?;

    let user = UserService::new(&state.db)
        .upsert(UpsertUserParam::from_dto(open_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

/// Get the caller's user record.
#[utoipa::path(
    get,
    path = "/api/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The caller", body = UserDto),
        (status = 401, description = "Not registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

/// Update the caller's profile.
///
/// Omitted fields keep their stored value.
#[utoipa::path(
    patch,
    path = "/api/me/profile",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = UserDto),
        (status = 401, description = "Not registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let updated = UserService::new(&state.db)
        .update_profile(user.id, UpdateProfileParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(UserDto::from(updated))))
}

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, favorite::FavoriteStatusDto, property::PropertyDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, model::property::into_property_dtos,
        service::favorite::FavoriteService, state::AppState,
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

/// List the caller's favorite listings.
#[utoipa::path(
    get,
    path = "/api/favorites",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Favorite listings", body = Vec<PropertyDto>),
        (status = 401, description = "Not registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let properties = FavoriteService::new(&state.db).list(user.id).await?;

    Ok((StatusCode::OK, Json(into_property_dtos(properties)?)))
}

/// Whether a listing is in the caller's favorites.
#[utoipa::path(
    get,
    path = "/api/favorites/{property_id}",
    tag = FAVORITE_TAG,
    params(("property_id" = i32, Path, description = "Property ID")),
    responses(
        (status = 200, description = "Favorite status", body = FavoriteStatusDto),
        (status = 401, description = "Not registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(property_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let is_favorite = FavoriteService::new(&state.db)
        .is_favorite(user.id, property_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(FavoriteStatusDto {
            property_id,
            is_favorite,
        }),
    ))
}

/// Add a listing to the caller's favorites. Adding twice is a no-op.
#[utoipa::path(
    post,
    path = "/api/favorites/{property_id}",
    tag = FAVORITE_TAG,
    params(("property_id" = i32, Path, description = "Property ID")),
    responses(
        (status = 200, description = "Listing is a favorite", body = FavoriteStatusDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(property_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    FavoriteService::new(&state.db)
        .add(user.id, property_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(FavoriteStatusDto {
            property_id,
            is_favorite: true,
        }),
    ))
}

/// Remove a listing from the caller's favorites.
#[utoipa::path(
    delete,
    path = "/api/favorites/{property_id}",
    tag = FAVORITE_TAG,
    params(("property_id" = i32, Path, description = "Property ID")),
    responses(
        (status = 200, description = "Listing is not a favorite", body = FavoriteStatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(property_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    FavoriteService::new(&state.db)
        .remove(user.id, property_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(FavoriteStatusDto {
            property_id,
            is_favorite: false,
        }),
    ))
}

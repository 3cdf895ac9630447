use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        property::PropertySearchResultDto,
        saved_search::{CreateSavedSearchDto, SavedSearchDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{saved_search::CreateSavedSearchParams, user::Caller},
        service::saved_search::SavedSearchService,
        state::AppState,
    },
};

/// Tag for grouping saved search endpoints in OpenAPI documentation
pub static SAVED_SEARCH_TAG: &str = "saved-search";

#[utoipa::path(
    get,
    path = "/api/saved-searches",
    tag = SAVED_SEARCH_TAG,
    responses(
        (status = 200, description = "The caller's saved searches", body = Vec<SavedSearchDto>),
        (status = 401, description = "Not registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_saved_searches(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let saved = SavedSearchService::new(&state.db).list(user.id).await?;
    let saved = saved
        .into_iter()
        .map(SavedSearchDto::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok((StatusCode::OK, Json(saved)))
}

/// Save a set of search filters for later.
#[utoipa::path(
    post,
    path = "/api/saved-searches",
    tag = SAVED_SEARCH_TAG,
    request_body = CreateSavedSearchDto,
    responses(
        (status = 201, description = "Search saved", body = SavedSearchDto),
        (status = 400, description = "Invalid filters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_saved_search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateSavedSearchDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let params = CreateSavedSearchParams::from_dto(user.id, payload)?;
    let saved = SavedSearchService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(SavedSearchDto::try_from(saved)?)))
}

#[utoipa::path(
    delete,
    path = "/api/saved-searches/{id}",
    tag = SAVED_SEARCH_TAG,
    params(("id" = i32, Path, description = "Saved search ID")),
    responses(
        (status = 204, description = "Saved search deleted"),
        (status = 404, description = "Saved search not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_saved_search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    SavedSearchService::new(&state.db)
        .delete(Caller::from(&user), id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Run a saved search against the current listings.
#[utoipa::path(
    get,
    path = "/api/saved-searches/{id}/results",
    tag = SAVED_SEARCH_TAG,
    params(("id" = i32, Path, description = "Saved search ID")),
    responses(
        (status = 200, description = "Matching listings", body = PropertySearchResultDto),
        (status = 404, description = "Saved search not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn run_saved_search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let page = SavedSearchService::new(&state.db)
        .run(Caller::from(&user), id)
        .await?;

    Ok((StatusCode::OK, Json(PropertySearchResultDto::try_from(page)?)))
}

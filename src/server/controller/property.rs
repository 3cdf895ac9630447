use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        availability::{AvailabilityDto, SetAvailabilityDto},
        property::{
            CreatePropertyDto, PropertyDetailDto, PropertyDto, PropertySearchDto,
            PropertySearchResultDto, UpdatePropertyDto,
        },
        review::{RatingSummaryDto, ReviewDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            availability::SetAvailabilityParams,
            property::{
                into_property_dtos, CreatePropertyParams, SearchFilters, UpdatePropertyParams,
            },
            user::Caller,
        },
        service::{
            availability::AvailabilityService, property::PropertyService, review::ReviewService,
        },
        state::AppState,
    },
};

/// Tag for grouping property endpoints in OpenAPI documentation
pub static PROPERTY_TAG: &str = "property";

/// Search active listings.
///
/// Public. Listings blocked by an availability window or booked (approved or
/// active) during the requested dates are excluded. Featured listings come
/// first, then the newest.
///
/// # Returns
/// - `200 OK` - One page of results with the total match count
/// - `400 Bad Request` - `available_from` after `available_to`
#[utoipa::path(
    get,
    path = "/api/properties/search",
    tag = PROPERTY_TAG,
    params(PropertySearchDto),
    responses(
        (status = 200, description = "Matching listings", body = PropertySearchResultDto),
        (status = 400, description = "Invalid filters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_properties(
    State(state): State<AppState>,
    Query(query): Query<PropertySearchDto>,
) -> Result<impl IntoResponse, AppError> {
    let filters = SearchFilters::from_dto(query)?;

    let page = PropertyService::new(&state.db).search(&filters).await?;

    Ok((StatusCode::OK, Json(PropertySearchResultDto::try_from(page)?)))
}

/// Create a listing.
///
/// Landlords create listings for themselves. Admins may pass `landlord_id` to
/// list on behalf of another user, who is promoted to landlord.
///
/// # Access Control
/// - `Landlord` - Landlords and admins
#[utoipa::path(
    post,
    path = "/api/properties",
    tag = PROPERTY_TAG,
    request_body = CreatePropertyDto,
    responses(
        (status = 201, description = "Listing created", body = PropertyDto),
        (status = 400, description = "Invalid listing data", body = ErrorDto),
        (status = 401, description = "Not registered", body = ErrorDto),
        (status = 403, description = "Not a landlord", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_property(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePropertyDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Landlord])
        .await?;
    let caller = Caller::from(&user);

    let params = CreatePropertyParams::from_dto(caller.owner_for(payload.landlord_id), payload)?;
    let property = PropertyService::new(&state.db).create(caller, params).await?;

    Ok((StatusCode::CREATED, Json(PropertyDto::try_from(property)?)))
}

/// List the caller's own listings in every status.
#[utoipa::path(
    get,
    path = "/api/properties/mine",
    tag = PROPERTY_TAG,
    responses(
        (status = 200, description = "The caller's listings", body = Vec<PropertyDto>),
        (status = 401, description = "Not registered", body = ErrorDto),
        (status = 403, description = "Not a landlord", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_my_properties(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Landlord])
        .await?;

    let properties = PropertyService::new(&state.db)
        .list_by_landlord(user.id)
        .await?;

    Ok((StatusCode::OK, Json(into_property_dtos(properties)?)))
}

/// Get one listing with its rating summary.
///
/// Active listings are public. Drafts and listings under moderation are only
/// returned to their owner and admins; everyone else gets 404.
#[utoipa::path(
    get,
    path = "/api/properties/{id}",
    tag = PROPERTY_TAG,
    params(("id" = i32, Path, description = "Property ID")),
    responses(
        (status = 200, description = "The listing", body = PropertyDetailDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_property(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &headers).optional_user().await?;

    let (property, rating) = PropertyService::new(&state.db)
        .get_detail(viewer.as_ref().map(Caller::from), id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PropertyDetailDto {
            property: PropertyDto::try_from(property)?,
            rating,
        }),
    ))
}

/// Update a listing. Owner or admin.
#[utoipa::path(
    patch,
    path = "/api/properties/{id}",
    tag = PROPERTY_TAG,
    params(("id" = i32, Path, description = "Property ID")),
    request_body = UpdatePropertyDto,
    responses(
        (status = 200, description = "Updated listing", body = PropertyDto),
        (status = 400, description = "Invalid listing data", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_property(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePropertyDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let property = PropertyService::new(&state.db)
        .update(Caller::from(&user), id, UpdatePropertyParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(PropertyDto::try_from(property)?)))
}

/// Delete a listing with its availability windows and favorites. Owner or admin.
#[utoipa::path(
    delete,
    path = "/api/properties/{id}",
    tag = PROPERTY_TAG,
    params(("id" = i32, Path, description = "Property ID")),
    responses(
        (status = 204, description = "Listing deleted"),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_property(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    PropertyService::new(&state.db)
        .delete(Caller::from(&user), id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Count a listing view. Public.
#[utoipa::path(
    post,
    path = "/api/properties/{id}/views",
    tag = PROPERTY_TAG,
    params(("id" = i32, Path, description = "Property ID")),
    responses(
        (status = 204, description = "View counted"),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_view(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    PropertyService::new(&state.db).increment_views(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List availability windows of a visible listing.
#[utoipa::path(
    get,
    path = "/api/properties/{id}/availability",
    tag = PROPERTY_TAG,
    params(("id" = i32, Path, description = "Property ID")),
    responses(
        (status = 200, description = "Windows ordered by start date", body = Vec<AvailabilityDto>),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_availability(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &headers).optional_user().await?;
    PropertyService::new(&state.db)
        .get_visible(viewer.as_ref().map(Caller::from), id)
        .await?;

    let periods = AvailabilityService::new(&state.db).list(id).await?;
    let periods: Vec<AvailabilityDto> = periods.into_iter().map(AvailabilityDto::from).collect();

    Ok((StatusCode::OK, Json(periods)))
}

/// Add an availability or blocked window to a listing. Owner or admin.
#[utoipa::path(
    post,
    path = "/api/properties/{id}/availability",
    tag = PROPERTY_TAG,
    params(("id" = i32, Path, description = "Property ID")),
    request_body = SetAvailabilityDto,
    responses(
        (status = 201, description = "Window added", body = AvailabilityDto),
        (status = 400, description = "Invalid dates or price", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_availability(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<SetAvailabilityDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let params = SetAvailabilityParams::from_dto(id, payload)?;
    let period = AvailabilityService::new(&state.db)
        .set(Caller::from(&user), params)
        .await?;

    Ok((StatusCode::CREATED, Json(AvailabilityDto::from(period))))
}

/// Remove an availability window. Owner of the listing or admin.
#[utoipa::path(
    delete,
    path = "/api/availability/{id}",
    tag = PROPERTY_TAG,
    params(("id" = i32, Path, description = "Availability window ID")),
    responses(
        (status = 204, description = "Window removed"),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Window not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_availability(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    AvailabilityService::new(&state.db)
        .delete(Caller::from(&user), id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Published reviews of a listing with reviewer names. Public.
#[utoipa::path(
    get,
    path = "/api/properties/{id}/reviews",
    tag = PROPERTY_TAG,
    params(("id" = i32, Path, description = "Property ID")),
    responses(
        (status = 200, description = "Published reviews, newest first", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_property_reviews(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db).list_by_property(id).await?;

    Ok((StatusCode::OK, Json(reviews)))
}

/// Average published rating of a listing. Public.
#[utoipa::path(
    get,
    path = "/api/properties/{id}/rating",
    tag = PROPERTY_TAG,
    params(("id" = i32, Path, description = "Property ID")),
    responses(
        (status = 200, description = "Average and count", body = RatingSummaryDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_property_rating(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let summary = ReviewService::new(&state.db).average_rating(id).await?;

    Ok((StatusCode::OK, Json(summary)))
}

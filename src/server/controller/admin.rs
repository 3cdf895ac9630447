use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        admin::{AnalyticsDto, AnalyticsQuery, StatsDto},
        api::{CountDto, ErrorDto, PageQuery},
        booking::{BookingDto, BookingPageDto},
        district::{CreateDistrictDto, DistrictDto, SetDistrictActiveDto},
        notification::{NotificationDto, SendNotificationDto},
        payment::RevenueDto,
        property::{PropertyCountQuery, PropertyDto, PropertyPageDto, SetPropertyStatusDto},
        review::{ReviewDto, ReviewPageDto, SetPublishedDto},
        user::{UpdateRoleDto, UserDto, UserPageDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            analytics::clamp_months, district::CreateDistrictParams,
            notification::CreateNotificationParams, property::into_property_dtos,
            review::to_review_dto,
        },
        service::{
            admin::AdminService, booking::BookingService, district::DistrictService,
            notification::NotificationService, payment::PaymentService,
            property::PropertyService, review::ReviewService, user::UserService,
        },
        state::AppState,
        util::pagination::{cap_limit, cap_offset},
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Platform counters for the admin dashboard.
///
/// # Access Control
/// - `Admin` - Only admins can view platform statistics
///
/// # Returns
/// - `200 OK` - User, listing and booking counts plus total revenue in halalas
/// - `401 Unauthorized` - Missing or unknown identity
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Platform statistics", body = StatsDto),
        (status = 401, description = "Not registered", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let stats = AdminService::new(&state.db).stats().await?;

    Ok((StatusCode::OK, Json(stats)))
}

/// Monthly trends and distributions over a trailing window.
///
/// `months` defaults to 12 and is clamped to 1..=24. Month buckets are listed
/// oldest first and include empty months.
#[utoipa::path(
    get,
    path = "/api/admin/analytics",
    tag = ADMIN_TAG,
    params(AnalyticsQuery),
    responses(
        (status = 200, description = "Analytics for the window", body = AnalyticsDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_analytics(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AnalyticsQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let analytics = AdminService::new(&state.db)
        .analytics(clamp_months(query.months))
        .await?;

    Ok((StatusCode::OK, Json(analytics)))
}

#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "One page of users", body = UserPageDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let limit = cap_limit(page.limit);
    let offset = cap_offset(page.offset);
    let (users, total) = UserService::new(&state.db).list(limit, offset).await?;

    Ok((
        StatusCode::OK,
        Json(UserPageDto {
            items: users.into_iter().map(UserDto::from).collect(),
            total,
            limit,
            offset,
        }),
    ))
}

/// Change a user's role.
#[utoipa::path(
    patch,
    path = "/api/admin/users/{id}/role",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .update_role(id, payload.role)
        .await?;

    tracing::info!("Admin {} set role of user {} to {:?}", admin.id, id, user.role);

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

/// Listings in every status, newest first.
#[utoipa::path(
    get,
    path = "/api/admin/properties",
    tag = ADMIN_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "One page of listings", body = PropertyPageDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_properties(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let limit = cap_limit(page.limit);
    let offset = cap_offset(page.offset);
    let (properties, total) = PropertyService::new(&state.db)
        .list_all(limit, offset)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PropertyPageDto {
            items: into_property_dtos(properties)?,
            total,
            limit,
            offset,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/admin/properties/count",
    tag = ADMIN_TAG,
    params(PropertyCountQuery),
    responses(
        (status = 200, description = "Number of listings", body = CountDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn count_properties(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PropertyCountQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let count = PropertyService::new(&state.db).count(query.status).await?;

    Ok((StatusCode::OK, Json(CountDto { count })))
}

/// Approve, reject or otherwise moderate a listing.
#[utoipa::path(
    patch,
    path = "/api/admin/properties/{id}/status",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Property ID")),
    request_body = SetPropertyStatusDto,
    responses(
        (status = 200, description = "Updated listing", body = PropertyDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_property_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<SetPropertyStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let property = PropertyService::new(&state.db)
        .set_status(id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(PropertyDto::try_from(property)?)))
}

#[utoipa::path(
    get,
    path = "/api/admin/bookings",
    tag = ADMIN_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "One page of bookings", body = BookingPageDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let limit = cap_limit(page.limit);
    let offset = cap_offset(page.offset);
    let (bookings, total) = BookingService::new(&state.db)
        .list_all(limit, offset)
        .await?;

    Ok((
        StatusCode::OK,
        Json(BookingPageDto {
            items: bookings.into_iter().map(BookingDto::from).collect(),
            total,
            limit,
            offset,
        }),
    ))
}

/// Reviews in any publication state, with reviewer names.
#[utoipa::path(
    get,
    path = "/api/admin/reviews",
    tag = ADMIN_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "One page of reviews", body = ReviewPageDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let limit = cap_limit(page.limit);
    let offset = cap_offset(page.offset);
    let (items, total) = ReviewService::new(&state.db)
        .list_all(limit, offset)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ReviewPageDto {
            items,
            total,
            limit,
            offset,
        }),
    ))
}

/// Publish or hide a review.
#[utoipa::path(
    patch,
    path = "/api/admin/reviews/{id}/published",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Review ID")),
    request_body = SetPublishedDto,
    responses(
        (status = 200, description = "Updated review", body = ReviewDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_review_published(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<SetPublishedDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let review = ReviewService::new(&state.db)
        .set_published(id, payload.is_published)
        .await?;
    let reviewer = UserService::new(&state.db)
        .get_by_id(review.tenant_id)
        .await?
        .name;

    Ok((StatusCode::OK, Json(to_review_dto(review, reviewer))))
}

#[utoipa::path(
    delete,
    path = "/api/admin/reviews/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Review ID")),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    ReviewService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Sum of completed payments excluding refunds, in halalas.
#[utoipa::path(
    get,
    path = "/api/admin/revenue",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Total revenue", body = RevenueDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_revenue(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let total = PaymentService::new(&state.db).total_revenue().await?;

    Ok((StatusCode::OK, Json(RevenueDto { total })))
}

/// Send a system notification to one user.
#[utoipa::path(
    post,
    path = "/api/admin/notifications",
    tag = ADMIN_TAG,
    request_body = SendNotificationDto,
    responses(
        (status = 201, description = "Notification sent", body = NotificationDto),
        (status = 400, description = "Empty title", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SendNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateNotificationParams::try_from(payload)?;
    UserService::new(&state.db).get_by_id(params.user_id).await?;

    let notification = NotificationService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(NotificationDto::from(notification))))
}

#[utoipa::path(
    post,
    path = "/api/admin/districts",
    tag = ADMIN_TAG,
    request_body = CreateDistrictDto,
    responses(
        (status = 201, description = "District created", body = DistrictDto),
        (status = 400, description = "Missing names", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_district(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateDistrictDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateDistrictParams::try_from(payload)?;
    let district = DistrictService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(DistrictDto::from(district))))
}

#[utoipa::path(
    patch,
    path = "/api/admin/districts/{id}/active",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "District ID")),
    request_body = SetDistrictActiveDto,
    responses(
        (status = 200, description = "Updated district", body = DistrictDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "District not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_district_active(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<SetDistrictActiveDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let district = DistrictService::new(&state.db)
        .set_active(id, payload.is_active)
        .await?;

    Ok((StatusCode::OK, Json(DistrictDto::from(district))))
}

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        review::{CreateReviewDto, ReviewDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            review::{to_review_dto, CreateReviewParams},
            user::Caller,
        },
        service::review::ReviewService,
        state::AppState,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// Review a listing.
///
/// Tied to a booking, the booking must be the caller's, completed and not yet
/// reviewed. New reviews are published right away.
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ReviewDto),
        (status = 400, description = "Rating out of range or booking not reviewable", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 409, description = "Booking already reviewed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let params = CreateReviewParams::try_from(payload)?;
    let review = ReviewService::new(&state.db)
        .create(Caller::from(&user), params)
        .await?;

    Ok((StatusCode::CREATED, Json(to_review_dto(review, user.name))))
}

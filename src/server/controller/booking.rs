use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, CreateBookingDto, UpdateBookingStatusDto},
        payment::PaymentDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{booking::UpdateBookingStatusParams, user::Caller},
        service::{booking::BookingService, payment::PaymentService},
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Request a booking as tenant.
///
/// The stay length is derived from the dates and must fit the listing's minimum
/// and maximum. Rent and deposit are copied from the listing. Instant-book
/// listings are approved immediately; otherwise the booking waits for the
/// landlord, who is notified either way.
///
/// # Returns
/// - `201 Created` - The booking
/// - `400 Bad Request` - Invalid dates, stay out of range, listing not bookable
///   or booking your own listing
/// - `404 Not Found` - Listing not found
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking requested", body = BookingDto),
        (status = 400, description = "Booking rules violated", body = ErrorDto),
        (status = 401, description = "Not registered", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let booking = BookingService::new(&state.db)
        .create(Caller::from(&user), payload)
        .await?;

    Ok((StatusCode::CREATED, Json(BookingDto::from(booking))))
}

/// Bookings the caller made as tenant, newest first.
#[utoipa::path(
    get,
    path = "/api/bookings/mine",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "The caller's bookings", body = Vec<BookingDto>),
        (status = 401, description = "Not registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_my_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let bookings = BookingService::new(&state.db)
        .list_by_tenant(user.id)
        .await?;
    let bookings: Vec<BookingDto> = bookings.into_iter().map(BookingDto::from).collect();

    Ok((StatusCode::OK, Json(bookings)))
}

/// Bookings on the caller's listings, newest first.
#[utoipa::path(
    get,
    path = "/api/bookings/landlord",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Bookings on the caller's listings", body = Vec<BookingDto>),
        (status = 401, description = "Not registered", body = ErrorDto),
        (status = 403, description = "Not a landlord", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_landlord_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Landlord])
        .await?;

    let bookings = BookingService::new(&state.db)
        .list_by_landlord(user.id)
        .await?;
    let bookings: Vec<BookingDto> = bookings.into_iter().map(BookingDto::from).collect();

    Ok((StatusCode::OK, Json(bookings)))
}

/// Get a booking. Tenant, landlord or admin.
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "The booking", body = BookingDto),
        (status = 403, description = "Not a participant", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let booking = BookingService::new(&state.db)
        .get(Caller::from(&user), id)
        .await?;

    Ok((StatusCode::OK, Json(BookingDto::from(booking))))
}

/// Move a booking to a new status.
///
/// Landlords approve, reject, start and complete bookings; either side may
/// cancel before move-in. Rejections need a reason.
#[utoipa::path(
    patch,
    path = "/api/bookings/{id}/status",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = UpdateBookingStatusDto,
    responses(
        (status = 200, description = "Updated booking", body = BookingDto),
        (status = 400, description = "Transition not allowed or reason missing", body = ErrorDto),
        (status = 403, description = "Not a participant", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let booking = BookingService::new(&state.db)
        .update_status(
            Caller::from(&user),
            id,
            UpdateBookingStatusParams::from(payload),
        )
        .await?;

    Ok((StatusCode::OK, Json(BookingDto::from(booking))))
}

/// Payments recorded on a booking. Tenant, landlord or admin.
#[utoipa::path(
    get,
    path = "/api/bookings/{id}/payments",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Payments, newest first", body = Vec<PaymentDto>),
        (status = 403, description = "Not a participant", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_booking_payments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let payments = PaymentService::new(&state.db)
        .list_by_booking(Caller::from(&user), id)
        .await?;
    let payments: Vec<PaymentDto> = payments.into_iter().map(PaymentDto::from).collect();

    Ok((StatusCode::OK, Json(payments)))
}

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        payment::{CreatePaymentDto, PaymentDto, UpdatePaymentStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{payment::CreatePaymentParams, user::Caller},
        service::payment::PaymentService,
        state::AppState,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// Record a payment on a booking.
///
/// Any participant of the booking, or an admin, may record a payment. Amounts
/// are in halalas. A completed payment notifies the landlord.
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Payment recorded", body = PaymentDto),
        (status = 400, description = "Amount not positive", body = ErrorDto),
        (status = 403, description = "Not a participant", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let params = CreatePaymentParams::try_from(payload)?;
    let payment = PaymentService::new(&state.db)
        .create(Caller::from(&user), params)
        .await?;

    Ok((StatusCode::CREATED, Json(PaymentDto::from(payment))))
}

/// Payments the caller made as tenant.
#[utoipa::path(
    get,
    path = "/api/payments/mine",
    tag = PAYMENT_TAG,
    responses(
        (status = 200, description = "The caller's payments", body = Vec<PaymentDto>),
        (status = 401, description = "Not registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_my_payments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let payments = PaymentService::new(&state.db)
        .list_by_tenant(user.id)
        .await?;
    let payments: Vec<PaymentDto> = payments.into_iter().map(PaymentDto::from).collect();

    Ok((StatusCode::OK, Json(payments)))
}

/// Payments received on the caller's listings.
#[utoipa::path(
    get,
    path = "/api/payments/landlord",
    tag = PAYMENT_TAG,
    responses(
        (status = 200, description = "Payments received", body = Vec<PaymentDto>),
        (status = 403, description = "Not a landlord", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_landlord_payments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Landlord])
        .await?;

    let payments = PaymentService::new(&state.db)
        .list_by_landlord(user.id)
        .await?;
    let payments: Vec<PaymentDto> = payments.into_iter().map(PaymentDto::from).collect();

    Ok((StatusCode::OK, Json(payments)))
}

/// Change a payment's status. Landlord of the booking or admin.
#[utoipa::path(
    patch,
    path = "/api/payments/{id}/status",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Payment ID")),
    request_body = UpdatePaymentStatusDto,
    responses(
        (status = 200, description = "Updated payment", body = PaymentDto),
        (status = 403, description = "Not the landlord", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_payment_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePaymentStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let payment = PaymentService::new(&state.db)
        .update_status(Caller::from(&user), id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(PaymentDto::from(payment))))
}

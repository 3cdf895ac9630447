use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        maintenance::{
            CreateMaintenanceRequestDto, MaintenanceRequestDto, UpdateMaintenanceRequestDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            maintenance::{into_request_dtos, CreateMaintenanceParams, UpdateMaintenanceParams},
            user::Caller,
        },
        service::maintenance::MaintenanceService,
        state::AppState,
    },
};

/// Tag for grouping maintenance endpoints in OpenAPI documentation
pub static MAINTENANCE_TAG: &str = "maintenance";

/// Report a maintenance issue on a rented listing.
///
/// The caller needs a booking on the listing. The landlord is notified.
#[utoipa::path(
    post,
    path = "/api/maintenance",
    tag = MAINTENANCE_TAG,
    request_body = CreateMaintenanceRequestDto,
    responses(
        (status = 201, description = "Request submitted", body = MaintenanceRequestDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 403, description = "No booking on this listing", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_maintenance_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateMaintenanceRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let params = CreateMaintenanceParams::try_from(payload)?;
    let request = MaintenanceService::new(&state.db)
        .create(Caller::from(&user), params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MaintenanceRequestDto::try_from(request)?),
    ))
}

#[utoipa::path(
    get,
    path = "/api/maintenance/mine",
    tag = MAINTENANCE_TAG,
    responses(
        (status = 200, description = "Requests the caller submitted", body = Vec<MaintenanceRequestDto>),
        (status = 401, description = "Not registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_my_maintenance_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let requests = MaintenanceService::new(&state.db)
        .list_by_tenant(user.id)
        .await?;

    Ok((StatusCode::OK, Json(into_request_dtos(requests)?)))
}

#[utoipa::path(
    get,
    path = "/api/maintenance/landlord",
    tag = MAINTENANCE_TAG,
    responses(
        (status = 200, description = "Requests on the caller's listings", body = Vec<MaintenanceRequestDto>),
        (status = 403, description = "Not a landlord", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_landlord_maintenance_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Landlord])
        .await?;

    let requests = MaintenanceService::new(&state.db)
        .list_by_landlord(user.id)
        .await?;

    Ok((StatusCode::OK, Json(into_request_dtos(requests)?)))
}

/// Get a maintenance request. Tenant, landlord or admin.
#[utoipa::path(
    get,
    path = "/api/maintenance/{id}",
    tag = MAINTENANCE_TAG,
    params(("id" = i32, Path, description = "Maintenance request ID")),
    responses(
        (status = 200, description = "The request", body = MaintenanceRequestDto),
        (status = 403, description = "Not a participant", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_maintenance_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let request = MaintenanceService::new(&state.db)
        .get(Caller::from(&user), id)
        .await?;

    Ok((StatusCode::OK, Json(MaintenanceRequestDto::try_from(request)?)))
}

/// Update a maintenance request.
///
/// The landlord responds, estimates cost and moves the status forward. The
/// tenant may only cancel.
#[utoipa::path(
    patch,
    path = "/api/maintenance/{id}",
    tag = MAINTENANCE_TAG,
    params(("id" = i32, Path, description = "Maintenance request ID")),
    request_body = UpdateMaintenanceRequestDto,
    responses(
        (status = 200, description = "Updated request", body = MaintenanceRequestDto),
        (status = 400, description = "Transition not allowed", body = ErrorDto),
        (status = 403, description = "Not allowed to change this request", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_maintenance_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMaintenanceRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let params = UpdateMaintenanceParams::try_from(payload)?;
    let request = MaintenanceService::new(&state.db)
        .update(Caller::from(&user), id, params)
        .await?;

    Ok((StatusCode::OK, Json(MaintenanceRequestDto::try_from(request)?)))
}

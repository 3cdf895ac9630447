use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        district::{DistrictDto, DistrictQuery},
    },
    server::{error::AppError, service::district::DistrictService, state::AppState},
};

/// Tag for grouping district endpoints in OpenAPI documentation
pub static DISTRICT_TAG: &str = "district";

/// Active districts, optionally narrowed to one city.
#[utoipa::path(
    get,
    path = "/api/districts",
    tag = DISTRICT_TAG,
    params(DistrictQuery),
    responses(
        (status = 200, description = "Active districts", body = Vec<DistrictDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_districts(
    State(state): State<AppState>,
    Query(query): Query<DistrictQuery>,
) -> Result<impl IntoResponse, AppError> {
    let districts = DistrictService::new(&state.db)
        .list(query.city.as_deref())
        .await?;
    let districts: Vec<DistrictDto> = districts.into_iter().map(DistrictDto::from).collect();

    Ok((StatusCode::OK, Json(districts)))
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_ar: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CountDto {
    pub count: u64,
}

/// Plain `limit`/`offset` query used by list endpoints.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Items per page (default 20, max 100)
    pub limit: Option<i64>,
    /// Items to skip (default 0)
    pub offset: Option<i64>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::property::PropertySearchDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SavedSearchDto {
    pub id: i32,
    pub user_id: i32,
    pub name: Option<String>,
    pub filters: PropertySearchDto,
    pub alert_enabled: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateSavedSearchDto {
    pub name: Option<String>,
    pub filters: PropertySearchDto,
    #[serde(default)]
    pub alert_enabled: bool,
}

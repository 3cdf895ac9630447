use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{MaintenanceCategory, MaintenancePriority, MaintenanceStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MaintenanceRequestDto {
    pub id: i32,
    pub property_id: i32,
    pub tenant_id: i32,
    pub landlord_id: i32,
    pub booking_id: Option<i32>,
    pub title: String,
    pub title_ar: Option<String>,
    pub description: String,
    pub description_ar: Option<String>,
    #[schema(value_type = String)]
    pub category: MaintenanceCategory,
    #[schema(value_type = String)]
    pub priority: MaintenancePriority,
    #[schema(value_type = String)]
    pub status: MaintenanceStatus,
    pub photos: Vec<String>,
    pub landlord_response: Option<String>,
    pub landlord_response_ar: Option<String>,
    pub estimated_cost: Option<i64>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateMaintenanceRequestDto {
    pub property_id: i32,
    pub booking_id: Option<i32>,
    pub title: String,
    pub title_ar: Option<String>,
    pub description: String,
    pub description_ar: Option<String>,
    #[schema(value_type = Option<String>)]
    pub category: Option<MaintenanceCategory>,
    #[schema(value_type = Option<String>)]
    pub priority: Option<MaintenancePriority>,
    #[serde(default)]
    pub photos: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateMaintenanceRequestDto {
    #[schema(value_type = Option<String>)]
    pub status: Option<MaintenanceStatus>,
    pub landlord_response: Option<String>,
    pub landlord_response_ar: Option<String>,
    pub estimated_cost: Option<i64>,
}

use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{MaintenanceCategory, MaintenancePriority, MaintenanceStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "maintenance_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub property_id: i32,
    pub tenant_id: i32,
    pub landlord_id: i32,
    pub booking_id: Option<i32>,
    pub title: String,
    pub title_ar: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_ar: Option<String>,
    pub category: MaintenanceCategory,
    pub priority: MaintenancePriority,
    pub status: MaintenanceStatus,
    /// JSON array of photo URLs.
    pub photos: Json,
    #[sea_orm(column_type = "Text", nullable)]
    pub landlord_response: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub landlord_response_ar: Option<String>,
    /// Estimated cost in halalas.
    pub estimated_cost: Option<i64>,
    pub resolved_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

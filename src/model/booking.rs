use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::BookingStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub property_id: i32,
    pub tenant_id: i32,
    pub landlord_id: i32,
    #[schema(value_type = String)]
    pub status: BookingStatus,
    pub move_in_date: DateTime<Utc>,
    pub move_out_date: DateTime<Utc>,
    pub duration_months: i32,
    pub monthly_rent: i64,
    pub security_deposit: Option<i64>,
    pub total_amount: i64,
    pub tenant_notes: Option<String>,
    pub landlord_notes: Option<String>,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBookingDto {
    pub property_id: i32,
    pub move_in_date: DateTime<Utc>,
    pub move_out_date: DateTime<Utc>,
    pub tenant_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateBookingStatusDto {
    #[schema(value_type = String)]
    pub status: BookingStatus,
    pub landlord_notes: Option<String>,
    pub rejection_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingPageDto {
    pub items: Vec<BookingDto>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

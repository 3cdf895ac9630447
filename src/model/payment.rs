use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{PaymentKind, PaymentStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaymentDto {
    pub id: i32,
    pub booking_id: i32,
    pub tenant_id: i32,
    pub landlord_id: i32,
    #[schema(value_type = String)]
    pub kind: PaymentKind,
    /// Amount in halalas
    pub amount: i64,
    pub currency: String,
    #[schema(value_type = String)]
    pub status: PaymentStatus,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePaymentDto {
    pub booking_id: i32,
    #[schema(value_type = String)]
    pub kind: PaymentKind,
    pub amount: i64,
    #[schema(value_type = Option<String>)]
    pub status: Option<PaymentStatus>,
    pub description: Option<String>,
    pub description_ar: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatePaymentStatusDto {
    #[schema(value_type = String)]
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RevenueDto {
    /// Sum of completed non-refund payments in halalas
    pub total: i64,
}

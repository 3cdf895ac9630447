use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::BookingStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub property_id: i32,
    pub tenant_id: i32,
    pub landlord_id: i32,
    pub status: BookingStatus,
    pub move_in_date: DateTimeUtc,
    pub move_out_date: DateTimeUtc,
    pub duration_months: i32,
    /// Amounts are in halalas.
    pub monthly_rent: i64,
    pub security_deposit: Option<i64>,
    pub total_amount: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub tenant_notes: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub landlord_notes: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub rejection_reason: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

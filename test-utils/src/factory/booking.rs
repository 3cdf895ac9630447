//! Booking factory for creating test reservations.

use chrono::{DateTime, Duration, Months, Utc};
use entity::sea_orm_active_enums::BookingStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings against an existing property.
///
/// Defaults:
/// - status: `BookingStatus::Pending`
/// - move_in_date: 30 days from now
/// - duration: 6 months
/// - rent and deposit copied from the property
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    property_id: i32,
    tenant_id: i32,
    landlord_id: i32,
    status: BookingStatus,
    move_in_date: DateTime<Utc>,
    duration_months: i32,
    monthly_rent: i64,
    security_deposit: Option<i64>,
    created_at: DateTime<Utc>,
}

impl<'a> BookingFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        property: &entity::property::Model,
        tenant_id: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            db,
            property_id: property.id,
            tenant_id,
            landlord_id: property.landlord_id,
            status: BookingStatus::Pending,
            move_in_date: now + Duration::days(30),
            duration_months: 6,
            monthly_rent: property.monthly_rent,
            security_deposit: property.security_deposit,
            created_at: now,
        }
    }

    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the move-in date and stay length; the move-out date follows from both.
    pub fn stay(mut self, move_in_date: DateTime<Utc>, duration_months: i32) -> Self {
        self.move_in_date = move_in_date;
        self.duration_months = duration_months;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let move_out_date = self
            .move_in_date
            .checked_add_months(Months::new(self.duration_months as u32))
            .unwrap_or(self.move_in_date);

        entity::booking::ActiveModel {
            property_id: ActiveValue::Set(self.property_id),
            tenant_id: ActiveValue::Set(self.tenant_id),
            landlord_id: ActiveValue::Set(self.landlord_id),
            status: ActiveValue::Set(self.status),
            move_in_date: ActiveValue::Set(self.move_in_date),
            move_out_date: ActiveValue::Set(move_out_date),
            duration_months: ActiveValue::Set(self.duration_months),
            monthly_rent: ActiveValue::Set(self.monthly_rent),
            security_deposit: ActiveValue::Set(self.security_deposit),
            total_amount: ActiveValue::Set(
                self.monthly_rent.saturating_mul(i64::from(self.duration_months)),
            ),
            tenant_notes: ActiveValue::Set(None),
            landlord_notes: ActiveValue::Set(None),
            rejection_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending booking with default dates for the tenant.
pub async fn create_booking(
    db: &DatabaseConnection,
    property: &entity::property::Model,
    tenant_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, property, tenant_id).build().await
}

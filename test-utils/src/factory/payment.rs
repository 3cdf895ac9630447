//! Payment factory.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{PaymentKind, PaymentStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for payments recorded against a booking.
///
/// Defaults to a pending rent payment of one month's rent.
pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    booking: &'a entity::booking::Model,
    kind: PaymentKind,
    amount: i64,
    status: PaymentStatus,
    created_at: DateTime<Utc>,
}

impl<'a> PaymentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, booking: &'a entity::booking::Model) -> Self {
        Self {
            db,
            booking,
            kind: PaymentKind::Rent,
            amount: booking.monthly_rent,
            status: PaymentStatus::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn kind(mut self, kind: PaymentKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    pub fn status(mut self, status: PaymentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the payment; completed payments get `paid_at` stamped.
    pub async fn build(self) -> Result<entity::payment::Model, DbErr> {
        let paid_at = (self.status == PaymentStatus::Completed).then_some(self.created_at);

        entity::payment::ActiveModel {
            booking_id: ActiveValue::Set(self.booking.id),
            tenant_id: ActiveValue::Set(self.booking.tenant_id),
            landlord_id: ActiveValue::Set(self.booking.landlord_id),
            kind: ActiveValue::Set(self.kind),
            amount: ActiveValue::Set(self.amount),
            currency: ActiveValue::Set("SAR".to_string()),
            status: ActiveValue::Set(self.status),
            description: ActiveValue::Set(None),
            description_ar: ActiveValue::Set(None),
            paid_at: ActiveValue::Set(paid_at),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

//! Payment data repository.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{PaymentKind, PaymentStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::payment::{CreatePaymentParams, DEFAULT_CURRENCY};

pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a payment against a booking.
    ///
    /// Tenant and landlord are copied from `booking`. `paid_at` is stamped when the
    /// payment is created as completed.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created payment
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        booking: &entity::booking::Model,
        params: CreatePaymentParams,
    ) -> Result<entity::payment::Model, DbErr> {
        let now = Utc::now();
        let paid_at = (params.status == PaymentStatus::Completed).then_some(now);

        entity::payment::ActiveModel {
            booking_id: ActiveValue::Set(booking.id),
            tenant_id: ActiveValue::Set(booking.tenant_id),
            landlord_id: ActiveValue::Set(booking.landlord_id),
            kind: ActiveValue::Set(params.kind),
            amount: ActiveValue::Set(params.amount),
            currency: ActiveValue::Set(DEFAULT_CURRENCY.to_string()),
            status: ActiveValue::Set(params.status),
            description: ActiveValue::Set(params.description),
            description_ar: ActiveValue::Set(params.description_ar),
            paid_at: ActiveValue::Set(paid_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find_by_id(id).one(self.db).await
    }

    /// Sets the status, stamping `paid_at` on the first move to completed.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated payment
    /// - `Ok(None)` - No payment with that id
    pub async fn update_status(
        &self,
        id: i32,
        status: PaymentStatus,
    ) -> Result<Option<entity::payment::Model>, DbErr> {
        let Some(payment) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let needs_paid_at = status == PaymentStatus::Completed && payment.paid_at.is_none();

        let mut active = payment.into_active_model();
        active.status = ActiveValue::Set(status);
        if needs_paid_at {
            active.paid_at = ActiveValue::Set(Some(now));
        }
        active.updated_at = ActiveValue::Set(now);

        active.update(self.db).await.map(Some)
    }

    pub async fn list_by_tenant(
        &self,
        tenant_id: i32,
    ) -> Result<Vec<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::TenantId.eq(tenant_id))
            .order_by_desc(entity::payment::Column::CreatedAt)
            .order_by_desc(entity::payment::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn list_by_landlord(
        &self,
        landlord_id: i32,
    ) -> Result<Vec<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::LandlordId.eq(landlord_id))
            .order_by_desc(entity::payment::Column::CreatedAt)
            .order_by_desc(entity::payment::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn list_by_booking(
        &self,
        booking_id: i32,
    ) -> Result<Vec<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::BookingId.eq(booking_id))
            .order_by_desc(entity::payment::Column::CreatedAt)
            .order_by_desc(entity::payment::Column::Id)
            .all(self.db)
            .await
    }

    /// Sum of completed payments excluding refunds, in halalas.
    ///
    /// Fails with `DbErr::Custom` when the total does not fit in an `i64`.
    pub async fn total_revenue(&self) -> Result<i64, DbErr> {
        let amounts: Vec<i64> = entity::prelude::Payment::find()
            .select_only()
            .column(entity::payment::Column::Amount)
            .filter(entity::payment::Column::Status.eq(PaymentStatus::Completed))
            .filter(entity::payment::Column::Kind.ne(PaymentKind::Refund))
            .into_tuple()
            .all(self.db)
            .await?;

        amounts
            .into_iter()
            .try_fold(0i64, i64::checked_add)
            .ok_or_else(|| DbErr::Custom("completed payment total overflows i64".to_string()))
    }

    /// Completed non-refund payments created at or after `since`.
    ///
    /// Returns `(created_at, amount)` pairs for monthly bucketing.
    pub async fn revenue_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<(DateTime<Utc>, i64)>, DbErr> {
        entity::prelude::Payment::find()
            .select_only()
            .column(entity::payment::Column::CreatedAt)
            .column(entity::payment::Column::Amount)
            .filter(entity::payment::Column::Status.eq(PaymentStatus::Completed))
            .filter(entity::payment::Column::Kind.ne(PaymentKind::Refund))
            .filter(entity::payment::Column::CreatedAt.gte(since))
            .into_tuple()
            .all(self.db)
            .await
    }
}

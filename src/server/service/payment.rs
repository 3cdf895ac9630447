//! Payments recorded against bookings.

use entity::sea_orm_active_enums::{NotificationKind, PaymentStatus};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, payment::PaymentRepository},
    error::{
        domain::{DomainError, Resource},
        AppError,
    },
    model::{
        notification::{CreateNotificationParams, RELATED_PAYMENT},
        payment::CreatePaymentParams,
        user::Caller,
    },
    service::notification::NotificationService,
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a payment on a booking the caller takes part in.
    ///
    /// A payment created as completed notifies the landlord.
    pub async fn create(
        &self,
        caller: Caller,
        params: CreatePaymentParams,
    ) -> Result<entity::payment::Model, AppError> {
        let booking = self.participant_booking(caller, params.booking_id).await?;

        let payment = PaymentRepository::new(self.db)
            .create(&booking, params)
            .await?;

        tracing::info!(
            "User {} recorded payment {} of {} halalas on booking {}",
            caller.id,
            payment.id,
            payment.amount,
            booking.id
        );

        if payment.status == PaymentStatus::Completed {
            self.notify_received(&payment).await;
        }

        Ok(payment)
    }

    /// Changes a payment's status. Landlord of the booking or admin only.
    pub async fn update_status(
        &self,
        caller: Caller,
        id: i32,
        status: PaymentStatus,
    ) -> Result<entity::payment::Model, AppError> {
        let repo = PaymentRepository::new(self.db);
        let current = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::from(DomainError::not_found(Resource::Payment, id)))?;
        caller.ensure_owner_or_admin(current.landlord_id, "update this payment")?;

        let updated = repo
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::from(DomainError::not_found(Resource::Payment, id)))?;

        if current.status != PaymentStatus::Completed && updated.status == PaymentStatus::Completed
        {
            self.notify_received(&updated).await;
        }

        Ok(updated)
    }

    pub async fn list_by_tenant(
        &self,
        tenant_id: i32,
    ) -> Result<Vec<entity::payment::Model>, AppError> {
        Ok(PaymentRepository::new(self.db)
            .list_by_tenant(tenant_id)
            .await?)
    }

    pub async fn list_by_landlord(
        &self,
        landlord_id: i32,
    ) -> Result<Vec<entity::payment::Model>, AppError> {
        Ok(PaymentRepository::new(self.db)
            .list_by_landlord(landlord_id)
            .await?)
    }

    /// Payments of one booking, for its participants and admins.
    pub async fn list_by_booking(
        &self,
        caller: Caller,
        booking_id: i32,
    ) -> Result<Vec<entity::payment::Model>, AppError> {
        self.participant_booking(caller, booking_id).await?;

        Ok(PaymentRepository::new(self.db)
            .list_by_booking(booking_id)
            .await?)
    }

    /// Sum of completed payments excluding refunds, in halalas.
    pub async fn total_revenue(&self) -> Result<i64, AppError> {
        Ok(PaymentRepository::new(self.db).total_revenue().await?)
    }

    async fn participant_booking(
        &self,
        caller: Caller,
        booking_id: i32,
    ) -> Result<entity::booking::Model, AppError> {
        let booking = BookingRepository::new(self.db)
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::from(DomainError::not_found(Resource::Booking, booking_id)))?;

        if !(caller.is_admin() || caller.id == booking.tenant_id || caller.id == booking.landlord_id)
        {
            return Err(caller.denied("access payments of this booking").into());
        }

        Ok(booking)
    }

    async fn notify_received(&self, payment: &entity::payment::Model) {
        let amount = format_sar(payment.amount);

        NotificationService::new(self.db)
            .notify(
                CreateNotificationParams::new(
                    payment.landlord_id,
                    NotificationKind::PaymentReceived,
                    "Payment received",
                    "تم استلام دفعة",
                )
                .content(
                    format!("{} SAR received for booking #{}", amount, payment.booking_id),
                    format!("تم استلام {} ريال للحجز رقم {}", amount, payment.booking_id),
                )
                .related(RELATED_PAYMENT, payment.id),
            )
            .await;
    }
}

/// Renders halalas as riyals with two decimals.
fn format_sar(halalas: i64) -> String {
    let sign = if halalas < 0 { "-" } else { "" };
    let abs = halalas.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

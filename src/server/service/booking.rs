//! Booking creation and lifecycle.
//!
//! A booking copies rent and deposit from the listing when it is requested. The
//! landlord drives it through approval, move-in and completion; either side may
//! cancel before move-in.

use entity::sea_orm_active_enums::{BookingStatus, NotificationKind, PropertyStatus};
use sea_orm::DatabaseConnection;

use crate::{
    model::booking::CreateBookingDto,
    server::{
        data::{booking::BookingRepository, property::PropertyRepository},
        error::{
            domain::{DomainError, Resource},
            AppError,
        },
        model::{
            booking::{
                ensure_transition, stay_months, BookingActor, CreateBookingParams,
                UpdateBookingStatusParams,
            },
            notification::{CreateNotificationParams, RELATED_BOOKING},
            property::MAX_AMOUNT,
            user::Caller,
        },
        service::notification::NotificationService,
        util::sanitize::sanitize_opt,
    },
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a listing for the caller as tenant.
    ///
    /// The listing must be active and not owned by the caller, and the stay must
    /// fit its minimum and maximum. Instant-book listings skip the pending state.
    /// The landlord is notified.
    pub async fn create(
        &self,
        caller: Caller,
        request: CreateBookingDto,
    ) -> Result<entity::booking::Model, AppError> {
        let property = PropertyRepository::new(self.db)
            .find_by_id(request.property_id)
            .await?
            .ok_or_else(|| {
                AppError::from(DomainError::not_found(Resource::Property, request.property_id))
            })?;

        if property.status != PropertyStatus::Active {
            return Err(DomainError::PropertyNotBookable.into());
        }
        if property.landlord_id == caller.id {
            return Err(DomainError::OwnPropertyBooking.into());
        }

        let months = stay_months(request.move_in_date, request.move_out_date)?;
        if months < property.min_stay_months || months > property.max_stay_months {
            return Err(DomainError::StayOutOfRange {
                months,
                min: property.min_stay_months,
                max: property.max_stay_months,
            }
            .into());
        }

        let total_amount = property
            .monthly_rent
            .checked_mul(i64::from(months))
            .filter(|total| *total <= MAX_AMOUNT)
            .ok_or(DomainError::AmountTooLarge { max: MAX_AMOUNT })?;

        let status = if property.instant_book {
            BookingStatus::Approved
        } else {
            BookingStatus::Pending
        };

        let booking = BookingRepository::new(self.db)
            .create(CreateBookingParams {
                property_id: property.id,
                tenant_id: caller.id,
                landlord_id: property.landlord_id,
                status,
                move_in_date: request.move_in_date,
                move_out_date: request.move_out_date,
                duration_months: months,
                monthly_rent: property.monthly_rent,
                security_deposit: property.security_deposit,
                total_amount,
                tenant_notes: sanitize_opt(request.tenant_notes),
            })
            .await?;

        tracing::info!(
            "Tenant {} requested booking {} on property {} ({} months, {:?})",
            caller.id,
            booking.id,
            property.id,
            months,
            booking.status
        );

        NotificationService::new(self.db)
            .notify(
                CreateNotificationParams::new(
                    property.landlord_id,
                    NotificationKind::BookingRequest,
                    "New booking request",
                    "طلب حجز جديد",
                )
                .content(
                    format!("{} requested a {}-month stay", property.title_en, months),
                    format!("طلب إقامة لمدة {} أشهر في {}", months, property.title_ar),
                )
                .related(RELATED_BOOKING, booking.id),
            )
            .await;

        Ok(booking)
    }

    /// Loads a booking for one of its participants or an admin.
    pub async fn get(&self, caller: Caller, id: i32) -> Result<entity::booking::Model, AppError> {
        let booking = self.find(id).await?;

        if BookingActor::of(&caller, &booking).is_none() {
            return Err(caller.denied("view this booking").into());
        }

        Ok(booking)
    }

    pub async fn list_by_tenant(
        &self,
        tenant_id: i32,
    ) -> Result<Vec<entity::booking::Model>, AppError> {
        Ok(BookingRepository::new(self.db)
            .list_by_tenant(tenant_id)
            .await?)
    }

    pub async fn list_by_landlord(
        &self,
        landlord_id: i32,
    ) -> Result<Vec<entity::booking::Model>, AppError> {
        Ok(BookingRepository::new(self.db)
            .list_by_landlord(landlord_id)
            .await?)
    }

    /// One page of all bookings with the overall count.
    pub async fn list_all(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<entity::booking::Model>, u64), AppError> {
        let repo = BookingRepository::new(self.db);

        let items = repo.list_all(limit, offset).await?;
        let total = repo.count(None).await?;

        Ok((items, total))
    }

    pub async fn count(&self, status: Option<BookingStatus>) -> Result<u64, AppError> {
        Ok(BookingRepository::new(self.db).count(status).await?)
    }

    /// Moves a booking to a new status.
    ///
    /// The caller must be a participant and the transition must be allowed for
    /// their side. Rejection requires a reason. Approval and rejection notify the
    /// tenant.
    pub async fn update_status(
        &self,
        caller: Caller,
        id: i32,
        params: UpdateBookingStatusParams,
    ) -> Result<entity::booking::Model, AppError> {
        let booking = self.find(id).await?;

        let Some(actor) = BookingActor::of(&caller, &booking) else {
            return Err(caller.denied("update this booking").into());
        };
        ensure_transition(booking.status, params.status, actor)?;
        if params.status == BookingStatus::Rejected && params.rejection_reason.is_none() {
            return Err(DomainError::RejectionReasonRequired.into());
        }

        let from = booking.status;
        let updated = BookingRepository::new(self.db)
            .update_status(id, params)
            .await?
            .ok_or_else(|| AppError::from(DomainError::not_found(Resource::Booking, id)))?;

        tracing::info!(
            "Booking {} moved from {:?} to {:?} by user {}",
            id,
            from,
            updated.status,
            caller.id
        );

        let notification = match updated.status {
            BookingStatus::Approved => Some(CreateNotificationParams::new(
                updated.tenant_id,
                NotificationKind::BookingApproved,
                "Booking approved",
                "تمت الموافقة على الحجز",
            )),
            BookingStatus::Rejected => Some(
                CreateNotificationParams::new(
                    updated.tenant_id,
                    NotificationKind::BookingRejected,
                    "Booking rejected",
                    "تم رفض الحجز",
                )
                .content(
                    updated.rejection_reason.clone().unwrap_or_default(),
                    updated.rejection_reason.clone().unwrap_or_default(),
                ),
            ),
            _ => None,
        };
        if let Some(notification) = notification {
            NotificationService::new(self.db)
                .notify(notification.related(RELATED_BOOKING, updated.id))
                .await;
        }

        Ok(updated)
    }

    async fn find(&self, id: i32) -> Result<entity::booking::Model, AppError> {
        BookingRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Resource::Booking, id).into())
    }
}

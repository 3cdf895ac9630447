//! Maintenance requests raised by tenants and handled by landlords.

use entity::sea_orm_active_enums::{MaintenanceStatus, NotificationKind};
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::server::{
    data::{
        booking::BookingRepository, maintenance::MaintenanceRepository,
        property::PropertyRepository,
    },
    error::{
        domain::{DomainError, Resource},
        AppError,
    },
    model::{
        maintenance::{ensure_transition, CreateMaintenanceParams, UpdateMaintenanceParams},
        notification::{CreateNotificationParams, RELATED_MAINTENANCE},
        user::Caller,
    },
    service::notification::NotificationService,
};

pub struct MaintenanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a request on a listing the caller has booked.
    ///
    /// Admins may file for any listing. A referenced booking must be the
    /// caller's own booking on that listing. The landlord is notified.
    pub async fn create(
        &self,
        caller: Caller,
        params: CreateMaintenanceParams,
    ) -> Result<entity::maintenance_request::Model, AppError> {
        let property = PropertyRepository::new(self.db)
            .find_by_id(params.property_id)
            .await?
            .ok_or_else(|| {
                AppError::from(DomainError::not_found(Resource::Property, params.property_id))
            })?;

        let booking_repo = BookingRepository::new(self.db);
        if let Some(booking_id) = params.booking_id {
            let booking = booking_repo
                .find_by_id(booking_id)
                .await?
                .ok_or_else(|| AppError::from(DomainError::not_found(Resource::Booking, booking_id)))?;
            if booking.property_id != property.id
                || !(caller.is_admin() || booking.tenant_id == caller.id)
            {
                return Err(DomainError::Invalid("booking_id").into());
            }
        } else if !caller.is_admin()
            && !booking_repo
                .tenant_has_booking(caller.id, property.id)
                .await?
        {
            return Err(caller
                .denied("file maintenance requests for this property")
                .into());
        }

        let request = MaintenanceRepository::new(self.db)
            .create(caller.id, property.landlord_id, params)
            .await?;

        tracing::info!(
            "Tenant {} filed maintenance request {} on property {}",
            caller.id,
            request.id,
            property.id
        );

        NotificationService::new(self.db)
            .notify(
                CreateNotificationParams::new(
                    request.landlord_id,
                    NotificationKind::MaintenanceUpdate,
                    "New maintenance request",
                    "طلب صيانة جديد",
                )
                .content(
                    request.title.clone(),
                    request.title_ar.clone().unwrap_or_else(|| request.title.clone()),
                )
                .related(RELATED_MAINTENANCE, request.id),
            )
            .await;

        Ok(request)
    }

    /// Loads a request for its tenant, landlord or an admin.
    pub async fn get(
        &self,
        caller: Caller,
        id: i32,
    ) -> Result<entity::maintenance_request::Model, AppError> {
        let request = self.find(id).await?;

        if !(caller.is_admin() || caller.id == request.tenant_id || caller.id == request.landlord_id)
        {
            return Err(caller.denied("view this maintenance request").into());
        }

        Ok(request)
    }

    /// Updates status, response or cost.
    ///
    /// The landlord and admins manage requests. The tenant may only cancel a
    /// request that is still submitted. Every change notifies the tenant.
    pub async fn update(
        &self,
        caller: Caller,
        id: i32,
        params: UpdateMaintenanceParams,
    ) -> Result<entity::maintenance_request::Model, AppError> {
        let current = self.find(id).await?;

        let manages = caller.owns_or_admin(current.landlord_id);
        let by_tenant = !manages && caller.id == current.tenant_id;
        if !manages && !(by_tenant && params.is_status_only() && params.status.is_some()) {
            return Err(caller.denied("update this maintenance request").into());
        }
        if let Some(status) = params.status {
            if status != current.status {
                ensure_transition(current.status, status, by_tenant)?;
            }
        }

        let updated = MaintenanceRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| {
                AppError::from(DomainError::not_found(Resource::MaintenanceRequest, id))
            })?;

        tracing::info!(
            "Maintenance request {} updated by user {} (status {:?})",
            id,
            caller.id,
            updated.status
        );

        if !by_tenant {
            let status = updated.status.to_value();
            NotificationService::new(self.db)
                .notify(
                    CreateNotificationParams::new(
                        updated.tenant_id,
                        NotificationKind::MaintenanceUpdate,
                        "Maintenance request updated",
                        "تم تحديث طلب الصيانة",
                    )
                    .content(
                        format!("{}: {}", updated.title, status),
                        format!("{}: {}", updated.title_ar.as_deref().unwrap_or(&updated.title), status),
                    )
                    .related(RELATED_MAINTENANCE, updated.id),
                )
                .await;
        } else if updated.status == MaintenanceStatus::Cancelled {
            NotificationService::new(self.db)
                .notify(
                    CreateNotificationParams::new(
                        updated.landlord_id,
                        NotificationKind::MaintenanceUpdate,
                        "Maintenance request cancelled",
                        "تم إلغاء طلب الصيانة",
                    )
                    .content(
                        updated.title.clone(),
                        updated.title_ar.clone().unwrap_or_else(|| updated.title.clone()),
                    )
                    .related(RELATED_MAINTENANCE, updated.id),
                )
                .await;
        }

        Ok(updated)
    }

    pub async fn list_by_tenant(
        &self,
        tenant_id: i32,
    ) -> Result<Vec<entity::maintenance_request::Model>, AppError> {
        Ok(MaintenanceRepository::new(self.db)
            .list_by_tenant(tenant_id)
            .await?)
    }

    pub async fn list_by_landlord(
        &self,
        landlord_id: i32,
    ) -> Result<Vec<entity::maintenance_request::Model>, AppError> {
        Ok(MaintenanceRepository::new(self.db)
            .list_by_landlord(landlord_id)
            .await?)
    }

    async fn find(&self, id: i32) -> Result<entity::maintenance_request::Model, AppError> {
        MaintenanceRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Resource::MaintenanceRequest, id).into())
    }
}

//! Booking data repository.
//!
//! Bookings store copies of the listing's rent and deposit at request time, so
//! later listing edits never change an existing booking.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::BookingStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::booking::{CreateBookingParams, UpdateBookingStatusParams};

/// Repository providing database operations for bookings.
pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    /// Creates a new BookingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BookingRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a booking.
    ///
    /// # Arguments
    /// - `params` - Fully computed booking including duration and total
    ///
    /// # Returns
    /// - `Ok(Model)` - The created booking
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: CreateBookingParams,
    ) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();

        entity::booking::ActiveModel {
            property_id: ActiveValue::Set(params.property_id),
            tenant_id: ActiveValue::Set(params.tenant_id),
            landlord_id: ActiveValue::Set(params.landlord_id),
            status: ActiveValue::Set(params.status),
            move_in_date: ActiveValue::Set(params.move_in_date),
            move_out_date: ActiveValue::Set(params.move_out_date),
            duration_months: ActiveValue::Set(params.duration_months),
            monthly_rent: ActiveValue::Set(params.monthly_rent),
            security_deposit: ActiveValue::Set(params.security_deposit),
            total_amount: ActiveValue::Set(params.total_amount),
            tenant_notes: ActiveValue::Set(params.tenant_notes),
            landlord_notes: ActiveValue::Set(None),
            rejection_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(id).one(self.db).await
    }

    /// Lists a tenant's bookings, newest first.
    pub async fn list_by_tenant(
        &self,
        tenant_id: i32,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::TenantId.eq(tenant_id))
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .all(self.db)
            .await
    }

    /// Lists bookings on a landlord's listings, newest first.
    pub async fn list_by_landlord(
        &self,
        landlord_id: i32,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::LandlordId.eq(landlord_id))
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .all(self.db)
            .await
    }

    /// Lists every booking, newest first.
    ///
    /// # Arguments
    /// - `limit` - Maximum rows to return
    /// - `offset` - Rows to skip
    pub async fn list_all(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await
    }

    pub async fn count(&self, status: Option<BookingStatus>) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Booking::find();
        if let Some(status) = status {
            query = query.filter(entity::booking::Column::Status.eq(status));
        }
        query.count(self.db).await
    }

    /// Writes a new status and the optional landlord notes or rejection reason.
    ///
    /// Transition rules are checked by the caller.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated booking
    /// - `Ok(None)` - No booking with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(
        &self,
        id: i32,
        params: UpdateBookingStatusParams,
    ) -> Result<Option<entity::booking::Model>, DbErr> {
        let Some(booking) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active = booking.into_active_model();
        active.status = ActiveValue::Set(params.status);
        if let Some(notes) = params.landlord_notes {
            active.landlord_notes = ActiveValue::Set(Some(notes));
        }
        if let Some(reason) = params.rejection_reason {
            active.rejection_reason = ActiveValue::Set(Some(reason));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await.map(Some)
    }

    /// Returns whether the tenant holds any booking on the listing.
    pub async fn tenant_has_booking(
        &self,
        tenant_id: i32,
        property_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find()
            .filter(entity::booking::Column::TenantId.eq(tenant_id))
            .filter(entity::booking::Column::PropertyId.eq(property_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Active bookings whose move-out date falls in `[from, until]`.
    pub async fn active_ending_between(
        &self,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active))
            .filter(entity::booking::Column::MoveOutDate.gte(from))
            .filter(entity::booking::Column::MoveOutDate.lte(until))
            .order_by_asc(entity::booking::Column::MoveOutDate)
            .all(self.db)
            .await
    }

    /// Every booking, unpaged. Used for analytics aggregation.
    pub async fn all(&self) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .order_by_asc(entity::booking::Column::Id)
            .all(self.db)
            .await
    }
}

//! Property data repository.
//!
//! Besides CRUD this holds the listing search query: every supplied filter is an
//! AND clause over active listings, and availability windows exclude listings with
//! an overlapping blocked period or an approved/active booking.

use chrono::Utc;
use entity::sea_orm_active_enums::{BookingStatus, PropertyStatus};
use sea_orm::{
    sea_query::{Expr, ExprTrait, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};

use crate::server::{
    model::property::{CreatePropertyParams, SearchFilters, SearchPage, UpdatePropertyParams},
    util::json::to_json_list,
};

pub struct PropertyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PropertyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new listing.
    ///
    /// # Arguments
    /// - `params` - Validated listing fields including the owning landlord
    ///
    /// # Returns
    /// - `Ok(Model)` - The created listing with verification, featuring and views reset
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: CreatePropertyParams,
    ) -> Result<entity::property::Model, DbErr> {
        let now = Utc::now();

        entity::property::ActiveModel {
            landlord_id: ActiveValue::Set(params.landlord_id),
            title_en: ActiveValue::Set(params.title_en),
            title_ar: ActiveValue::Set(params.title_ar),
            description_en: ActiveValue::Set(params.description_en),
            description_ar: ActiveValue::Set(params.description_ar),
            property_type: ActiveValue::Set(params.property_type),
            status: ActiveValue::Set(params.status),
            city: ActiveValue::Set(params.city),
            city_ar: ActiveValue::Set(params.city_ar),
            district: ActiveValue::Set(params.district),
            district_ar: ActiveValue::Set(params.district_ar),
            address: ActiveValue::Set(params.address),
            address_ar: ActiveValue::Set(params.address_ar),
            latitude: ActiveValue::Set(params.latitude),
            longitude: ActiveValue::Set(params.longitude),
            bedrooms: ActiveValue::Set(params.bedrooms),
            bathrooms: ActiveValue::Set(params.bathrooms),
            size_sqm: ActiveValue::Set(params.size_sqm),
            floor: ActiveValue::Set(params.floor),
            furnished_level: ActiveValue::Set(params.furnished_level),
            monthly_rent: ActiveValue::Set(params.monthly_rent),
            security_deposit: ActiveValue::Set(params.security_deposit),
            amenities: ActiveValue::Set(to_json_list(params.amenities)),
            photos: ActiveValue::Set(to_json_list(params.photos)),
            house_rules: ActiveValue::Set(params.house_rules),
            house_rules_ar: ActiveValue::Set(params.house_rules_ar),
            min_stay_months: ActiveValue::Set(params.min_stay_months),
            max_stay_months: ActiveValue::Set(params.max_stay_months),
            instant_book: ActiveValue::Set(params.instant_book),
            is_verified: ActiveValue::Set(false),
            is_featured: ActiveValue::Set(false),
            view_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::property::Model>, DbErr> {
        entity::prelude::Property::find_by_id(id).one(self.db).await
    }

    /// Loads the listings with the given ids, newest first.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::property::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Property::find()
            .filter(entity::property::Column::Id.is_in(ids))
            .order_by_desc(entity::property::Column::CreatedAt)
            .order_by_desc(entity::property::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies a partial update to a listing.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated listing
    /// - `Ok(None)` - No listing with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpdatePropertyParams,
    ) -> Result<Option<entity::property::Model>, DbErr> {
        let Some(property) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active = property.into_active_model();
        if let Some(v) = params.title_en {
            active.title_en = ActiveValue::Set(v);
        }
        if let Some(v) = params.title_ar {
            active.title_ar = ActiveValue::Set(v);
        }
        if let Some(v) = params.description_en {
            active.description_en = ActiveValue::Set(Some(v));
        }
        if let Some(v) = params.description_ar {
            active.description_ar = ActiveValue::Set(Some(v));
        }
        if let Some(v) = params.property_type {
            active.property_type = ActiveValue::Set(v);
        }
        if let Some(v) = params.status {
            active.status = ActiveValue::Set(v);
        }
        if let Some(v) = params.city {
            active.city = ActiveValue::Set(Some(v));
        }
        if let Some(v) = params.city_ar {
            active.city_ar = ActiveValue::Set(Some(v));
        }
        if let Some(v) = params.district {
            active.district = ActiveValue::Set(Some(v));
        }
        if let Some(v) = params.district_ar {
            active.district_ar = ActiveValue::Set(Some(v));
        }
        if let Some(v) = params.address {
            active.address = ActiveValue::Set(Some(v));
        }
        if let Some(v) = params.address_ar {
            active.address_ar = ActiveValue::Set(Some(v));
        }
        if let Some(v) = params.latitude {
            active.latitude = ActiveValue::Set(Some(v));
        }
        if let Some(v) = params.longitude {
            active.longitude = ActiveValue::Set(Some(v));
        }
        if let Some(v) = params.bedrooms {
            active.bedrooms = ActiveValue::Set(v);
        }
        if let Some(v) = params.bathrooms {
            active.bathrooms = ActiveValue::Set(v);
        }
        if let Some(v) = params.size_sqm {
            active.size_sqm = ActiveValue::Set(Some(v));
        }
        if let Some(v) = params.floor {
            active.floor = ActiveValue::Set(Some(v));
        }
        if let Some(v) = params.furnished_level {
            active.furnished_level = ActiveValue::Set(v);
        }
        if let Some(v) = params.monthly_rent {
            active.monthly_rent = ActiveValue::Set(v);
        }
        if let Some(v) = params.security_deposit {
            active.security_deposit = ActiveValue::Set(Some(v));
        }
        if let Some(v) = params.amenities {
            active.amenities = ActiveValue::Set(to_json_list(v));
        }
        if let Some(v) = params.photos {
            active.photos = ActiveValue::Set(to_json_list(v));
        }
        if let Some(v) = params.house_rules {
            active.house_rules = ActiveValue::Set(Some(v));
        }
        if let Some(v) = params.house_rules_ar {
            active.house_rules_ar = ActiveValue::Set(Some(v));
        }
        if let Some(v) = params.min_stay_months {
            active.min_stay_months = ActiveValue::Set(v);
        }
        if let Some(v) = params.max_stay_months {
            active.max_stay_months = ActiveValue::Set(v);
        }
        if let Some(v) = params.instant_book {
            active.instant_book = ActiveValue::Set(v);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await.map(Some)
    }

    /// Deletes a listing together with its availability windows and favorites.
    ///
    /// Runs in a single transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - Listing deleted
    /// - `Ok(false)` - No listing with that id
    /// - `Err(DbErr)` - Database error; nothing is deleted
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::PropertyAvailability::delete_many()
            .filter(entity::property_availability::Column::PropertyId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::PropertyId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Property::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Lists a landlord's listings in every status, newest first.
    pub async fn list_by_landlord(
        &self,
        landlord_id: i32,
    ) -> Result<Vec<entity::property::Model>, DbErr> {
        entity::prelude::Property::find()
            .filter(entity::property::Column::LandlordId.eq(landlord_id))
            .order_by_desc(entity::property::Column::CreatedAt)
            .order_by_desc(entity::property::Column::Id)
            .all(self.db)
            .await
    }

    /// Atomically adds one to the listing's view counter.
    ///
    /// # Returns
    /// - `Ok(true)` - Counter incremented
    /// - `Ok(false)` - No listing with that id
    pub async fn increment_views(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Property::update_many()
            .col_expr(
                entity::property::Column::ViewCount,
                Expr::col(entity::property::Column::ViewCount).add(1),
            )
            .filter(entity::property::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self, status: Option<PropertyStatus>) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Property::find();
        if let Some(status) = status {
            query = query.filter(entity::property::Column::Status.eq(status));
        }
        query.count(self.db).await
    }

    /// Lists listings in every status for moderation, newest first.
    pub async fn list_all(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<entity::property::Model>, DbErr> {
        entity::prelude::Property::find()
            .order_by_desc(entity::property::Column::CreatedAt)
            .order_by_desc(entity::property::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await
    }

    /// Every listing, unpaged. Used for analytics aggregation.
    pub async fn all(&self) -> Result<Vec<entity::property::Model>, DbErr> {
        entity::prelude::Property::find()
            .order_by_asc(entity::property::Column::Id)
            .all(self.db)
            .await
    }

    /// Sets the moderation status of a listing.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated listing
    /// - `Ok(None)` - No listing with that id
    pub async fn set_status(
        &self,
        id: i32,
        status: PropertyStatus,
    ) -> Result<Option<entity::property::Model>, DbErr> {
        let Some(property) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active = property.into_active_model();
        active.status = ActiveValue::Set(status);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await.map(Some)
    }

    /// Searches active listings.
    ///
    /// Ordering is featured first, then newest, then highest id. `total` counts
    /// every match regardless of pagination.
    ///
    /// # Arguments
    /// - `filters` - Validated filters with capped limit and offset
    ///
    /// # Returns
    /// - `Ok(SearchPage)` - Requested page and total match count
    /// - `Err(DbErr)` - Database error during count or select
    pub async fn search(&self, filters: &SearchFilters) -> Result<SearchPage, DbErr> {
        use entity::property::Column;

        let mut query = entity::prelude::Property::find()
            .filter(Column::Status.eq(PropertyStatus::Active));

        if let Some(city) = &filters.city {
            query = query.filter(
                Condition::any()
                    .add(Column::City.eq(city.as_str()))
                    .add(Column::CityAr.eq(city.as_str())),
            );
        }
        if let Some(district) = &filters.district {
            query = query.filter(
                Condition::any()
                    .add(Column::District.eq(district.as_str()))
                    .add(Column::DistrictAr.eq(district.as_str())),
            );
        }
        if let Some(property_type) = filters.property_type {
            query = query.filter(Column::PropertyType.eq(property_type));
        }
        if let Some(furnished_level) = filters.furnished_level {
            query = query.filter(Column::FurnishedLevel.eq(furnished_level));
        }
        if let Some(min_price) = filters.min_price {
            query = query.filter(Column::MonthlyRent.gte(min_price));
        }
        if let Some(max_price) = filters.max_price {
            query = query.filter(Column::MonthlyRent.lte(max_price));
        }
        if let Some(bedrooms) = filters.bedrooms {
            query = query.filter(Column::Bedrooms.gte(bedrooms));
        }

        if filters.available_from.is_some() || filters.available_to.is_some() {
            use entity::{booking, property_availability};

            let mut blocked = Query::select()
                .column(property_availability::Column::PropertyId)
                .from(property_availability::Entity)
                .and_where(property_availability::Column::IsBlocked.eq(true))
                .to_owned();
            let mut booked = Query::select()
                .column(booking::Column::PropertyId)
                .from(booking::Entity)
                .and_where(
                    booking::Column::Status
                        .is_in([BookingStatus::Approved, BookingStatus::Active]),
                )
                .to_owned();

            // Half-open overlap; a missing bound leaves that side open.
            if let Some(to) = filters.available_to {
                blocked.and_where(property_availability::Column::StartDate.lt(to));
                booked.and_where(booking::Column::MoveInDate.lt(to));
            }
            if let Some(from) = filters.available_from {
                blocked.and_where(property_availability::Column::EndDate.gt(from));
                booked.and_where(booking::Column::MoveOutDate.gt(from));
            }

            query = query
                .filter(Column::Id.not_in_subquery(blocked))
                .filter(Column::Id.not_in_subquery(booked));
        }

        let total = query.clone().count(self.db).await?;
        let items = query
            .order_by_desc(Column::IsFeatured)
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(filters.limit)
            .offset(filters.offset)
            .all(self.db)
            .await?;

        Ok(SearchPage {
            items,
            total,
            limit: filters.limit,
            offset: filters.offset,
        })
    }
}

//! Property factory for creating test listings.
//!
//! Defaults produce an active, unfurnished Riyadh apartment renting for 5,000 SAR
//! (500,000 halalas) with a 1 to 12 month stay window.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::{FurnishedLevel, PropertyStatus, PropertyType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test properties with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let property = PropertyFactory::new(&db, landlord.id)
///     .city("Jeddah", "جدة")
///     .monthly_rent(350_000)
///     .instant_book(true)
///     .build()
///     .await?;
/// ```
pub struct PropertyFactory<'a> {
    db: &'a DatabaseConnection,
    landlord_id: i32,
    title_en: String,
    property_type: PropertyType,
    status: PropertyStatus,
    city: String,
    city_ar: String,
    district: String,
    district_ar: String,
    bedrooms: i32,
    furnished_level: FurnishedLevel,
    monthly_rent: i64,
    security_deposit: Option<i64>,
    min_stay_months: i32,
    max_stay_months: i32,
    instant_book: bool,
    is_featured: bool,
    created_at: chrono::DateTime<Utc>,
}

impl<'a> PropertyFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, landlord_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            landlord_id,
            title_en: format!("Apartment {}", id),
            property_type: PropertyType::Apartment,
            status: PropertyStatus::Active,
            city: "Riyadh".to_string(),
            city_ar: "الرياض".to_string(),
            district: "Al Olaya".to_string(),
            district_ar: "العليا".to_string(),
            bedrooms: 2,
            furnished_level: FurnishedLevel::Unfurnished,
            monthly_rent: 500_000,
            security_deposit: Some(500_000),
            min_stay_months: 1,
            max_stay_months: 12,
            instant_book: false,
            is_featured: false,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title_en = title.into();
        self
    }

    pub fn property_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = property_type;
        self
    }

    pub fn status(mut self, status: PropertyStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the English and Arabic city names.
    pub fn city(mut self, city: impl Into<String>, city_ar: impl Into<String>) -> Self {
        self.city = city.into();
        self.city_ar = city_ar.into();
        self
    }

    /// Sets the English and Arabic district names.
    pub fn district(mut self, district: impl Into<String>, district_ar: impl Into<String>) -> Self {
        self.district = district.into();
        self.district_ar = district_ar.into();
        self
    }

    pub fn bedrooms(mut self, bedrooms: i32) -> Self {
        self.bedrooms = bedrooms;
        self
    }

    pub fn furnished_level(mut self, furnished_level: FurnishedLevel) -> Self {
        self.furnished_level = furnished_level;
        self
    }

    /// Sets the monthly rent in halalas.
    pub fn monthly_rent(mut self, monthly_rent: i64) -> Self {
        self.monthly_rent = monthly_rent;
        self
    }

    pub fn security_deposit(mut self, security_deposit: Option<i64>) -> Self {
        self.security_deposit = security_deposit;
        self
    }

    pub fn stay_months(mut self, min: i32, max: i32) -> Self {
        self.min_stay_months = min;
        self.max_stay_months = max;
        self
    }

    pub fn instant_book(mut self, instant_book: bool) -> Self {
        self.instant_book = instant_book;
        self
    }

    pub fn featured(mut self, is_featured: bool) -> Self {
        self.is_featured = is_featured;
        self
    }

    pub fn created_at(mut self, created_at: chrono::DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the property entity into the database.
    pub async fn build(self) -> Result<entity::property::Model, DbErr> {
        entity::property::ActiveModel {
            landlord_id: ActiveValue::Set(self.landlord_id),
            title_ar: ActiveValue::Set(format!("شقة {}", self.title_en)),
            title_en: ActiveValue::Set(self.title_en),
            description_en: ActiveValue::Set(None),
            description_ar: ActiveValue::Set(None),
            property_type: ActiveValue::Set(self.property_type),
            status: ActiveValue::Set(self.status),
            city: ActiveValue::Set(Some(self.city)),
            city_ar: ActiveValue::Set(Some(self.city_ar)),
            district: ActiveValue::Set(Some(self.district)),
            district_ar: ActiveValue::Set(Some(self.district_ar)),
            address: ActiveValue::Set(None),
            address_ar: ActiveValue::Set(None),
            latitude: ActiveValue::Set(None),
            longitude: ActiveValue::Set(None),
            bedrooms: ActiveValue::Set(self.bedrooms),
            bathrooms: ActiveValue::Set(1),
            size_sqm: ActiveValue::Set(None),
            floor: ActiveValue::Set(None),
            furnished_level: ActiveValue::Set(self.furnished_level),
            monthly_rent: ActiveValue::Set(self.monthly_rent),
            security_deposit: ActiveValue::Set(self.security_deposit),
            amenities: ActiveValue::Set(serde_json::json!([])),
            photos: ActiveValue::Set(serde_json::json!([])),
            house_rules: ActiveValue::Set(None),
            house_rules_ar: ActiveValue::Set(None),
            min_stay_months: ActiveValue::Set(self.min_stay_months),
            max_stay_months: ActiveValue::Set(self.max_stay_months),
            instant_book: ActiveValue::Set(self.instant_book),
            is_verified: ActiveValue::Set(false),
            is_featured: ActiveValue::Set(self.is_featured),
            view_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active property with default values for the given landlord.
pub async fn create_property(
    db: &DatabaseConnection,
    landlord_id: i32,
) -> Result<entity::property::Model, DbErr> {
    PropertyFactory::new(db, landlord_id).build().await
}

use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{FurnishedLevel, PropertyStatus, PropertyType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "property")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub landlord_id: i32,
    pub title_en: String,
    pub title_ar: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_en: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_ar: Option<String>,
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    pub city: Option<String>,
    pub city_ar: Option<String>,
    pub district: Option<String>,
    pub district_ar: Option<String>,
    pub address: Option<String>,
    pub address_ar: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub size_sqm: Option<i32>,
    pub floor: Option<i32>,
    pub furnished_level: FurnishedLevel,
    /// Monthly rent in halalas.
    pub monthly_rent: i64,
    /// Security deposit in halalas.
    pub security_deposit: Option<i64>,
    /// JSON array of amenity keys.
    pub amenities: Json,
    /// JSON array of photo URLs.
    pub photos: Json,
    #[sea_orm(column_type = "Text", nullable)]
    pub house_rules: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub house_rules_ar: Option<String>,
    pub min_stay_months: i32,
    pub max_stay_months: i32,
    pub instant_book: bool,
    pub is_verified: bool,
    pub is_featured: bool,
    pub view_count: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

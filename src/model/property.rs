use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{FurnishedLevel, PropertyStatus, PropertyType};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::review::RatingSummaryDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PropertyDto {
    pub id: i32,
    pub landlord_id: i32,
    pub title_en: String,
    pub title_ar: String,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    #[schema(value_type = String)]
    pub property_type: PropertyType,
    #[schema(value_type = String)]
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
    #[schema(value_type = String)]
    pub furnished_level: FurnishedLevel,
    /// Monthly rent in halalas
    pub monthly_rent: i64,
    /// Security deposit in halalas
    pub security_deposit: Option<i64>,
    pub amenities: Vec<String>,
    pub photos: Vec<String>,
    pub house_rules: Option<String>,
    pub house_rules_ar: Option<String>,
    pub min_stay_months: i32,
    pub max_stay_months: i32,
    pub instant_book: bool,
    pub is_verified: bool,
    pub is_featured: bool,
    pub view_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single listing together with its published review summary.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropertyDetailDto {
    pub property: PropertyDto,
    pub rating: RatingSummaryDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePropertyDto {
    /// Owner of the listing; only honoured for admins
    pub landlord_id: Option<i32>,
    pub title_en: String,
    pub title_ar: String,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    #[schema(value_type = String)]
    pub property_type: PropertyType,
    pub city: Option<String>,
    pub city_ar: Option<String>,
    pub district: Option<String>,
    pub district_ar: Option<String>,
    pub address: Option<String>,
    pub address_ar: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub size_sqm: Option<i32>,
    pub floor: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub furnished_level: Option<FurnishedLevel>,
    pub monthly_rent: i64,
    pub security_deposit: Option<i64>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    pub house_rules: Option<String>,
    pub house_rules_ar: Option<String>,
    pub min_stay_months: Option<i32>,
    pub max_stay_months: Option<i32>,
    #[serde(default)]
    pub instant_book: bool,
    /// Initial status, `draft` when omitted
    #[schema(value_type = Option<String>)]
    pub status: Option<PropertyStatus>,
}

/// Partial update; omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePropertyDto {
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    #[schema(value_type = Option<String>)]
    pub property_type: Option<PropertyType>,
    #[schema(value_type = Option<String>)]
    pub status: Option<PropertyStatus>,
    pub city: Option<String>,
    pub city_ar: Option<String>,
    pub district: Option<String>,
    pub district_ar: Option<String>,
    pub address: Option<String>,
    pub address_ar: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub size_sqm: Option<i32>,
    pub floor: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub furnished_level: Option<FurnishedLevel>,
    pub monthly_rent: Option<i64>,
    pub security_deposit: Option<i64>,
    pub amenities: Option<Vec<String>>,
    pub photos: Option<Vec<String>>,
    pub house_rules: Option<String>,
    pub house_rules_ar: Option<String>,
    pub min_stay_months: Option<i32>,
    pub max_stay_months: Option<i32>,
    pub instant_book: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetPropertyStatusDto {
    #[schema(value_type = String)]
    pub status: PropertyStatus,
}

/// Property search filters.
///
/// Also the stored shape of a saved search, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PropertySearchDto {
    /// Matches English or Arabic city name
    pub city: Option<String>,
    /// Matches English or Arabic district name
    pub district: Option<String>,
    #[schema(value_type = Option<String>)]
    #[param(value_type = Option<String>)]
    pub property_type: Option<PropertyType>,
    #[schema(value_type = Option<String>)]
    #[param(value_type = Option<String>)]
    pub furnished_level: Option<FurnishedLevel>,
    /// Minimum monthly rent in halalas (inclusive)
    pub min_price: Option<i64>,
    /// Maximum monthly rent in halalas (inclusive)
    pub max_price: Option<i64>,
    /// Minimum number of bedrooms
    pub bedrooms: Option<i32>,
    pub available_from: Option<DateTime<Utc>>,
    pub available_to: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropertySearchResultDto {
    pub items: Vec<PropertyDto>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

/// Admin listing page over every status.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropertyPageDto {
    pub items: Vec<PropertyDto>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PropertyCountQuery {
    /// Only count listings in this status
    #[param(value_type = Option<String>)]
    pub status: Option<PropertyStatus>,
}

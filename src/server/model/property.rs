//! Property domain models, parameters and search filters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{FurnishedLevel, PropertyStatus, PropertyType};

use crate::{
    model::property::{
        CreatePropertyDto, PropertyDto, PropertySearchDto, PropertySearchResultDto,
        UpdatePropertyDto,
    },
    server::{
        error::{domain::DomainError, internal::InternalError},
        util::{
            json::from_json_list,
            pagination::{cap_limit, cap_offset},
            sanitize::{sanitize_opt, sanitize_text},
        },
    },
};

#[derive(Debug, Clone)]
pub struct CreatePropertyParams {
    pub landlord_id: i32,
    pub title_en: String,
    pub title_ar: String,
    pub description_en: Option<String>,
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
    pub monthly_rent: i64,
    pub security_deposit: Option<i64>,
    pub amenities: Vec<String>,
    pub photos: Vec<String>,
    pub house_rules: Option<String>,
    pub house_rules_ar: Option<String>,
    pub min_stay_months: i32,
    pub max_stay_months: i32,
    pub instant_book: bool,
}

impl CreatePropertyParams {
    /// Builds validated creation parameters for the given owner.
    ///
    /// Free text is sanitized; defaults are applied for omitted counts and stay bounds.
    pub fn from_dto(landlord_id: i32, dto: CreatePropertyDto) -> Result<Self, DomainError> {
        let params = Self {
            landlord_id,
            title_en: sanitize_text(dto.title_en.trim()),
            title_ar: sanitize_text(dto.title_ar.trim()),
            description_en: sanitize_opt(dto.description_en),
            description_ar: sanitize_opt(dto.description_ar),
            property_type: dto.property_type,
            status: dto.status.unwrap_or(PropertyStatus::Draft),
            city: dto.city,
            city_ar: dto.city_ar,
            district: dto.district,
            district_ar: dto.district_ar,
            address: sanitize_opt(dto.address),
            address_ar: sanitize_opt(dto.address_ar),
            latitude: dto.latitude,
            longitude: dto.longitude,
            bedrooms: dto.bedrooms.unwrap_or(1),
            bathrooms: dto.bathrooms.unwrap_or(1),
            size_sqm: dto.size_sqm,
            floor: dto.floor,
            furnished_level: dto.furnished_level.unwrap_or(FurnishedLevel::Unfurnished),
            monthly_rent: dto.monthly_rent,
            security_deposit: dto.security_deposit,
            amenities: dto.amenities,
            photos: dto.photos,
            house_rules: sanitize_opt(dto.house_rules),
            house_rules_ar: sanitize_opt(dto.house_rules_ar),
            min_stay_months: dto.min_stay_months.unwrap_or(1),
            max_stay_months: dto.max_stay_months.unwrap_or(12),
            instant_book: dto.instant_book,
        };
        params.validate()?;
        Ok(params)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.title_en.is_empty() {
            return Err(DomainError::Invalid("title_en"));
        }
        if self.title_ar.is_empty() {
            return Err(DomainError::Invalid("title_ar"));
        }
        validate_listing_numbers(
            self.monthly_rent,
            self.security_deposit,
            self.bedrooms,
            self.bathrooms,
            self.min_stay_months,
            self.max_stay_months,
        )
    }
}

/// Upper bound for any stored amount, in halalas (one billion riyals).
pub const MAX_AMOUNT: i64 = 100_000_000_000;
/// Longest stay a listing may offer.
pub const MAX_STAY_MONTHS: i32 = 120;

/// Shared numeric checks for new and updated listings.
pub fn validate_listing_numbers(
    monthly_rent: i64,
    security_deposit: Option<i64>,
    bedrooms: i32,
    bathrooms: i32,
    min_stay_months: i32,
    max_stay_months: i32,
) -> Result<(), DomainError> {
    if monthly_rent <= 0 {
        return Err(DomainError::Invalid("monthly_rent"));
    }
    if monthly_rent > MAX_AMOUNT {
        return Err(DomainError::AmountTooLarge { max: MAX_AMOUNT });
    }
    if security_deposit.is_some_and(|d| d < 0) {
        return Err(DomainError::Invalid("security_deposit"));
    }
    if security_deposit.is_some_and(|d| d > MAX_AMOUNT) {
        return Err(DomainError::AmountTooLarge { max: MAX_AMOUNT });
    }
    if bedrooms < 0 {
        return Err(DomainError::Invalid("bedrooms"));
    }
    if bathrooms < 0 {
        return Err(DomainError::Invalid("bathrooms"));
    }
    if min_stay_months < 1 || min_stay_months > max_stay_months {
        return Err(DomainError::Invalid("min_stay_months"));
    }
    if max_stay_months > MAX_STAY_MONTHS {
        return Err(DomainError::Invalid("max_stay_months"));
    }
    Ok(())
}

/// Partial listing update. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdatePropertyParams {
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub property_type: Option<PropertyType>,
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

impl From<UpdatePropertyDto> for UpdatePropertyParams {
    fn from(dto: UpdatePropertyDto) -> Self {
        Self {
            title_en: dto.title_en.map(|t| sanitize_text(t.trim())),
            title_ar: dto.title_ar.map(|t| sanitize_text(t.trim())),
            description_en: sanitize_opt(dto.description_en),
            description_ar: sanitize_opt(dto.description_ar),
            property_type: dto.property_type,
            status: dto.status,
            city: dto.city,
            city_ar: dto.city_ar,
            district: dto.district,
            district_ar: dto.district_ar,
            address: sanitize_opt(dto.address),
            address_ar: sanitize_opt(dto.address_ar),
            latitude: dto.latitude,
            longitude: dto.longitude,
            bedrooms: dto.bedrooms,
            bathrooms: dto.bathrooms,
            size_sqm: dto.size_sqm,
            floor: dto.floor,
            furnished_level: dto.furnished_level,
            monthly_rent: dto.monthly_rent,
            security_deposit: dto.security_deposit,
            amenities: dto.amenities,
            photos: dto.photos,
            house_rules: sanitize_opt(dto.house_rules),
            house_rules_ar: sanitize_opt(dto.house_rules_ar),
            min_stay_months: dto.min_stay_months,
            max_stay_months: dto.max_stay_months,
            instant_book: dto.instant_book,
        }
    }
}

impl UpdatePropertyParams {
    /// Validates the update as applied on top of the stored listing.
    pub fn validate_against(&self, current: &entity::property::Model) -> Result<(), DomainError> {
        if self.title_en.as_deref().is_some_and(str::is_empty) {
            return Err(DomainError::Invalid("title_en"));
        }
        if self.title_ar.as_deref().is_some_and(str::is_empty) {
            return Err(DomainError::Invalid("title_ar"));
        }
        validate_listing_numbers(
            self.monthly_rent.unwrap_or(current.monthly_rent),
            self.security_deposit.or(current.security_deposit),
            self.bedrooms.unwrap_or(current.bedrooms),
            self.bathrooms.unwrap_or(current.bathrooms),
            self.min_stay_months.unwrap_or(current.min_stay_months),
            self.max_stay_months.unwrap_or(current.max_stay_months),
        )
    }
}

/// Validated search filters with normalised pagination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub city: Option<String>,
    pub district: Option<String>,
    pub property_type: Option<PropertyType>,
    pub furnished_level: Option<FurnishedLevel>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub bedrooms: Option<i32>,
    pub available_from: Option<DateTime<Utc>>,
    pub available_to: Option<DateTime<Utc>>,
    pub limit: u64,
    pub offset: u64,
}

impl SearchFilters {
    /// Normalises a search request.
    ///
    /// Blank text filters are dropped and pagination is capped. A window whose start
    /// is after its end is rejected.
    pub fn from_dto(dto: PropertySearchDto) -> Result<Self, DomainError> {
        if let (Some(from), Some(to)) = (dto.available_from, dto.available_to) {
            if from > to {
                return Err(DomainError::InvalidDateRange);
            }
        }

        Ok(Self {
            city: non_blank(dto.city),
            district: non_blank(dto.district),
            property_type: dto.property_type,
            furnished_level: dto.furnished_level,
            min_price: dto.min_price,
            max_price: dto.max_price,
            bedrooms: dto.bedrooms,
            available_from: dto.available_from,
            available_to: dto.available_to,
            limit: cap_limit(dto.limit),
            offset: cap_offset(dto.offset),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// One page of search results.
#[derive(Debug, Clone)]
pub struct SearchPage {
    pub items: Vec<entity::property::Model>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

impl TryFrom<entity::property::Model> for PropertyDto {
    type Error = InternalError;

    fn try_from(property: entity::property::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            amenities: from_json_list("property.amenities", &property.amenities)?,
            photos: from_json_list("property.photos", &property.photos)?,
            id: property.id,
            landlord_id: property.landlord_id,
            title_en: property.title_en,
            title_ar: property.title_ar,
            description_en: property.description_en,
            description_ar: property.description_ar,
            property_type: property.property_type,
            status: property.status,
            city: property.city,
            city_ar: property.city_ar,
            district: property.district,
            district_ar: property.district_ar,
            address: property.address,
            address_ar: property.address_ar,
            latitude: property.latitude,
            longitude: property.longitude,
            bedrooms: property.bedrooms,
            bathrooms: property.bathrooms,
            size_sqm: property.size_sqm,
            floor: property.floor,
            furnished_level: property.furnished_level,
            monthly_rent: property.monthly_rent,
            security_deposit: property.security_deposit,
            house_rules: property.house_rules,
            house_rules_ar: property.house_rules_ar,
            min_stay_months: property.min_stay_months,
            max_stay_months: property.max_stay_months,
            instant_book: property.instant_book,
            is_verified: property.is_verified,
            is_featured: property.is_featured,
            view_count: property.view_count,
            created_at: property.created_at,
            updated_at: property.updated_at,
        })
    }
}

impl TryFrom<SearchPage> for PropertySearchResultDto {
    type Error = InternalError;

    fn try_from(page: SearchPage) -> Result<Self, Self::Error> {
        Ok(Self {
            items: into_property_dtos(page.items)?,
            total: page.total,
            limit: page.limit,
            offset: page.offset,
        })
    }
}

/// Converts a list of listings, failing on the first malformed JSON column.
pub fn into_property_dtos(
    properties: Vec<entity::property::Model>,
) -> Result<Vec<PropertyDto>, InternalError> {
    properties.into_iter().map(PropertyDto::try_from).collect()
}

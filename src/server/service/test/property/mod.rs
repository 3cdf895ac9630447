use crate::{
    model::property::CreatePropertyDto,
    server::{
        data::user::UserRepository,
        error::{domain::DomainError, AppError},
        model::{property::CreatePropertyParams, user::Caller},
        service::property::PropertyService,
    },
};
use entity::sea_orm_active_enums::{PropertyStatus, PropertyType, UserRole};
use test_utils::{builder::TestBuilder, factory, factory::property::PropertyFactory};

mod create;
mod visibility;

fn listing(landlord_id: Option<i32>) -> CreatePropertyDto {
    CreatePropertyDto {
        landlord_id,
        title_en: "Olaya two bedroom".to_string(),
        title_ar: "شقة غرفتين في العليا".to_string(),
        description_en: None,
        description_ar: None,
        property_type: PropertyType::Apartment,
        city: Some("Riyadh".to_string()),
        city_ar: Some("الرياض".to_string()),
        district: None,
        district_ar: None,
        address: None,
        address_ar: None,
        latitude: None,
        longitude: None,
        bedrooms: Some(2),
        bathrooms: Some(2),
        size_sqm: None,
        floor: None,
        furnished_level: None,
        monthly_rent: 450_000,
        security_deposit: None,
        amenities: Vec::new(),
        photos: Vec::new(),
        house_rules: None,
        house_rules_ar: None,
        min_stay_months: None,
        max_stay_months: None,
        instant_book: false,
        status: None,
    }
}

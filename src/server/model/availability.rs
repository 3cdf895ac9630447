use chrono::{DateTime, Utc};

use crate::{
    model::availability::{AvailabilityDto, SetAvailabilityDto},
    server::error::domain::DomainError,
};

#[derive(Debug, Clone)]
pub struct SetAvailabilityParams {
    pub property_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_blocked: bool,
    pub price_override: Option<i64>,
}

impl SetAvailabilityParams {
    pub fn from_dto(property_id: i32, dto: SetAvailabilityDto) -> Result<Self, DomainError> {
        if dto.start_date >= dto.end_date {
            return Err(DomainError::InvalidDateRange);
        }
        if dto.price_override.is_some_and(|p| p <= 0) {
            return Err(DomainError::Invalid("price_override"));
        }

        Ok(Self {
            property_id,
            start_date: dto.start_date,
            end_date: dto.end_date,
            is_blocked: dto.is_blocked,
            price_override: dto.price_override,
        })
    }
}

impl From<entity::property_availability::Model> for AvailabilityDto {
    fn from(period: entity::property_availability::Model) -> Self {
        Self {
            id: period.id,
            property_id: period.property_id,
            start_date: period.start_date,
            end_date: period.end_date,
            is_blocked: period.is_blocked,
            price_override: period.price_override,
        }
    }
}

use crate::{
    model::district::{CreateDistrictDto, DistrictDto},
    server::error::domain::DomainError,
};

#[derive(Debug, Clone)]
pub struct CreateDistrictParams {
    pub city: String,
    pub city_ar: String,
    pub name_en: String,
    pub name_ar: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl TryFrom<CreateDistrictDto> for CreateDistrictParams {
    type Error = DomainError;

    fn try_from(dto: CreateDistrictDto) -> Result<Self, Self::Error> {
        let required = |value: String, field: &'static str| {
            let value = value.trim().to_string();
            if value.is_empty() {
                Err(DomainError::Invalid(field))
            } else {
                Ok(value)
            }
        };

        Ok(Self {
            city: required(dto.city, "city")?,
            city_ar: required(dto.city_ar, "city_ar")?,
            name_en: required(dto.name_en, "name_en")?,
            name_ar: required(dto.name_ar, "name_ar")?,
            latitude: dto.latitude,
            longitude: dto.longitude,
        })
    }
}

impl From<entity::district::Model> for DistrictDto {
    fn from(district: entity::district::Model) -> Self {
        Self {
            id: district.id,
            city: district.city,
            city_ar: district.city_ar,
            name_en: district.name_en,
            name_ar: district.name_ar,
            latitude: district.latitude,
            longitude: district.longitude,
            is_active: district.is_active,
        }
    }
}

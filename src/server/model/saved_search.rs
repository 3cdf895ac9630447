use sea_orm::prelude::Json;

use crate::{
    model::{
        property::PropertySearchDto,
        saved_search::{CreateSavedSearchDto, SavedSearchDto},
    },
    server::{
        error::{internal::InternalError, AppError},
        model::property::SearchFilters,
        util::sanitize::sanitize_opt,
    },
};

#[derive(Debug, Clone)]
pub struct CreateSavedSearchParams {
    pub user_id: i32,
    pub name: Option<String>,
    pub filters: Json,
    pub alert_enabled: bool,
}

impl CreateSavedSearchParams {
    /// Validates the filters the same way a live search would and encodes them.
    pub fn from_dto(user_id: i32, dto: CreateSavedSearchDto) -> Result<Self, AppError> {
        SearchFilters::from_dto(dto.filters.clone())?;

        let filters = serde_json::to_value(&dto.filters).map_err(|source| {
            InternalError::MalformedJson {
                column: "saved_search.filters",
                source,
            }
        })?;

        Ok(Self {
            user_id,
            name: sanitize_opt(dto.name),
            filters,
            alert_enabled: dto.alert_enabled,
        })
    }
}

/// Decodes the stored filter JSON.
pub fn decode_filters(
    saved: &entity::saved_search::Model,
) -> Result<PropertySearchDto, InternalError> {
    serde_json::from_value(saved.filters.clone()).map_err(|source| InternalError::MalformedJson {
        column: "saved_search.filters",
        source,
    })
}

impl TryFrom<entity::saved_search::Model> for SavedSearchDto {
    type Error = InternalError;

    fn try_from(saved: entity::saved_search::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            filters: decode_filters(&saved)?,
            id: saved.id,
            user_id: saved.user_id,
            name: saved.name,
            alert_enabled: saved.alert_enabled,
            created_at: saved.created_at,
        })
    }
}

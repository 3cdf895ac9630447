//! District reference data.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::district::DistrictRepository,
    error::{
        domain::{DomainError, Resource},
        AppError,
    },
    model::district::CreateDistrictParams,
};

pub struct DistrictService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DistrictService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active districts, optionally limited to one city (English or Arabic name).
    pub async fn list(&self, city: Option<&str>) -> Result<Vec<entity::district::Model>, AppError> {
        Ok(DistrictRepository::new(self.db).list_active(city).await?)
    }

    pub async fn create(
        &self,
        params: CreateDistrictParams,
    ) -> Result<entity::district::Model, AppError> {
        let district = DistrictRepository::new(self.db).create(params).await?;

        tracing::info!("Created district {} ({})", district.id, district.name_en);

        Ok(district)
    }

    pub async fn set_active(
        &self,
        id: i32,
        is_active: bool,
    ) -> Result<entity::district::Model, AppError> {
        DistrictRepository::new(self.db)
            .set_active(id, is_active)
            .await?
            .ok_or_else(|| DomainError::not_found(Resource::District, id).into())
    }
}

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{availability::AvailabilityRepository, property::PropertyRepository},
    error::{
        domain::{DomainError, Resource},
        AppError,
    },
    model::{availability::SetAvailabilityParams, user::Caller},
};

pub struct AvailabilityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AvailabilityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds an availability or blocked window to the caller's listing.
    pub async fn set(
        &self,
        caller: Caller,
        params: SetAvailabilityParams,
    ) -> Result<entity::property_availability::Model, AppError> {
        let property = PropertyRepository::new(self.db)
            .find_by_id(params.property_id)
            .await?
            .ok_or_else(|| {
                AppError::from(DomainError::not_found(Resource::Property, params.property_id))
            })?;
        caller.ensure_owner_or_admin(property.landlord_id, "manage availability")?;

        Ok(AvailabilityRepository::new(self.db).create(params).await?)
    }

    pub async fn list(
        &self,
        property_id: i32,
    ) -> Result<Vec<entity::property_availability::Model>, AppError> {
        Ok(AvailabilityRepository::new(self.db)
            .list_by_property(property_id)
            .await?)
    }

    pub async fn delete(&self, caller: Caller, id: i32) -> Result<(), AppError> {
        let repo = AvailabilityRepository::new(self.db);

        let period = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::from(DomainError::not_found(Resource::Availability, id)))?;
        let property = PropertyRepository::new(self.db)
            .find_by_id(period.property_id)
            .await?
            .ok_or_else(|| {
                AppError::from(DomainError::not_found(Resource::Property, period.property_id))
            })?;
        caller.ensure_owner_or_admin(property.landlord_id, "manage availability")?;

        repo.delete(id).await?;

        Ok(())
    }
}

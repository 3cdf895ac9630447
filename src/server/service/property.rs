//! Listing management, visibility rules and search.

use entity::sea_orm_active_enums::{PropertyStatus, UserRole};
use sea_orm::DatabaseConnection;

use crate::{
    model::review::RatingSummaryDto,
    server::{
        data::{property::PropertyRepository, review::ReviewRepository, user::UserRepository},
        error::{
            domain::{DomainError, Resource},
            AppError,
        },
        model::{
            property::{CreatePropertyParams, SearchFilters, SearchPage, UpdatePropertyParams},
            review::summarize,
            user::Caller,
        },
    },
};

pub struct PropertyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PropertyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a listing for `params.landlord_id`.
    ///
    /// When an admin creates a listing for someone else, that user must exist and
    /// is promoted to landlord if they were a plain user.
    pub async fn create(
        &self,
        caller: Caller,
        params: CreatePropertyParams,
    ) -> Result<entity::property::Model, AppError> {
        if params.landlord_id != caller.id {
            let user_repo = UserRepository::new(self.db);
            let owner = user_repo
                .find_by_id(params.landlord_id)
                .await?
                .ok_or_else(|| {
                    AppError::from(DomainError::not_found(Resource::User, params.landlord_id))
                })?;
            if owner.role == UserRole::User {
                user_repo.update_role(owner.id, UserRole::Landlord).await?;
            }
        }

        let property = PropertyRepository::new(self.db).create(params).await?;

        tracing::info!(
            "User {} created property {} for landlord {}",
            caller.id,
            property.id,
            property.landlord_id
        );

        Ok(property)
    }

    /// Loads a listing the viewer is allowed to see.
    ///
    /// Active listings are public. Other statuses are visible to the owner and
    /// admins only and look missing to everyone else.
    pub async fn get_visible(
        &self,
        viewer: Option<Caller>,
        id: i32,
    ) -> Result<entity::property::Model, AppError> {
        let property = self.find(id).await?;

        let visible = property.status == PropertyStatus::Active
            || viewer.is_some_and(|v| v.owns_or_admin(property.landlord_id));
        if !visible {
            return Err(DomainError::not_found(Resource::Property, id).into());
        }

        Ok(property)
    }

    /// Visible listing plus its published rating summary.
    pub async fn get_detail(
        &self,
        viewer: Option<Caller>,
        id: i32,
    ) -> Result<(entity::property::Model, RatingSummaryDto), AppError> {
        let property = self.get_visible(viewer, id).await?;
        let ratings = ReviewRepository::new(self.db)
            .published_ratings(property.id)
            .await?;

        Ok((property, summarize(&ratings)))
    }

    pub async fn update(
        &self,
        caller: Caller,
        id: i32,
        params: UpdatePropertyParams,
    ) -> Result<entity::property::Model, AppError> {
        let current = self.find(id).await?;
        caller.ensure_owner_or_admin(current.landlord_id, "update this property")?;
        params.validate_against(&current)?;

        PropertyRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| DomainError::not_found(Resource::Property, id).into())
    }

    /// Deletes a listing with its availability windows and favorites.
    pub async fn delete(&self, caller: Caller, id: i32) -> Result<(), AppError> {
        let property = self.find(id).await?;
        caller.ensure_owner_or_admin(property.landlord_id, "delete this property")?;

        PropertyRepository::new(self.db).delete(id).await?;

        tracing::info!("User {} deleted property {}", caller.id, id);

        Ok(())
    }

    pub async fn list_by_landlord(
        &self,
        landlord_id: i32,
    ) -> Result<Vec<entity::property::Model>, AppError> {
        Ok(PropertyRepository::new(self.db)
            .list_by_landlord(landlord_id)
            .await?)
    }

    pub async fn increment_views(&self, id: i32) -> Result<(), AppError> {
        if !PropertyRepository::new(self.db).increment_views(id).await? {
            return Err(DomainError::not_found(Resource::Property, id).into());
        }
        Ok(())
    }

    pub async fn count(&self, status: Option<PropertyStatus>) -> Result<u64, AppError> {
        Ok(PropertyRepository::new(self.db).count(status).await?)
    }

    /// One page of listings in any status with the overall count.
    pub async fn list_all(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<entity::property::Model>, u64), AppError> {
        let repo = PropertyRepository::new(self.db);

        let items = repo.list_all(limit, offset).await?;
        let total = repo.count(None).await?;

        Ok((items, total))
    }

    /// Moderates a listing. Admin only; checked by the caller.
    pub async fn set_status(
        &self,
        id: i32,
        status: PropertyStatus,
    ) -> Result<entity::property::Model, AppError> {
        let property = PropertyRepository::new(self.db)
            .set_status(id, status)
            .await?
            .ok_or_else(|| AppError::from(DomainError::not_found(Resource::Property, id)))?;

        tracing::info!("Property {} moved to {:?}", id, status);

        Ok(property)
    }

    pub async fn search(&self, filters: &SearchFilters) -> Result<SearchPage, AppError> {
        Ok(PropertyRepository::new(self.db).search(filters).await?)
    }

    async fn find(&self, id: i32) -> Result<entity::property::Model, AppError> {
        PropertyRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Resource::Property, id).into())
    }
}

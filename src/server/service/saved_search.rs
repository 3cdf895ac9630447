//! Saved property searches.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{property::PropertyRepository, saved_search::SavedSearchRepository},
    error::{
        domain::{DomainError, Resource},
        AppError,
    },
    model::{
        property::{SearchFilters, SearchPage},
        saved_search::{decode_filters, CreateSavedSearchParams},
        user::Caller,
    },
};

pub struct SavedSearchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SavedSearchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateSavedSearchParams,
    ) -> Result<entity::saved_search::Model, AppError> {
        Ok(SavedSearchRepository::new(self.db).create(params).await?)
    }

    pub async fn list(&self, user_id: i32) -> Result<Vec<entity::saved_search::Model>, AppError> {
        Ok(SavedSearchRepository::new(self.db)
            .list_by_user(user_id)
            .await?)
    }

    pub async fn delete(&self, caller: Caller, id: i32) -> Result<(), AppError> {
        let saved = self.owned(caller, id).await?;

        SavedSearchRepository::new(self.db).delete(saved.id).await?;

        Ok(())
    }

    /// Runs the stored filters as a live search.
    pub async fn run(&self, caller: Caller, id: i32) -> Result<SearchPage, AppError> {
        let saved = self.owned(caller, id).await?;
        let filters = SearchFilters::from_dto(decode_filters(&saved)?)?;

        Ok(PropertyRepository::new(self.db).search(&filters).await?)
    }

    /// Loads a saved search; other users' searches look missing.
    async fn owned(
        &self,
        caller: Caller,
        id: i32,
    ) -> Result<entity::saved_search::Model, AppError> {
        SavedSearchRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|saved| caller.owns_or_admin(saved.user_id))
            .ok_or_else(|| DomainError::not_found(Resource::SavedSearch, id).into())
    }
}

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{favorite::FavoriteRepository, property::PropertyRepository},
    error::{
        domain::{DomainError, Resource},
        AppError,
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Favorites a listing; repeating the call is harmless.
    pub async fn add(&self, user_id: i32, property_id: i32) -> Result<(), AppError> {
        if PropertyRepository::new(self.db)
            .find_by_id(property_id)
            .await?
            .is_none()
        {
            return Err(DomainError::not_found(Resource::Property, property_id).into());
        }

        FavoriteRepository::new(self.db)
            .add(user_id, property_id)
            .await?;

        Ok(())
    }

    pub async fn remove(&self, user_id: i32, property_id: i32) -> Result<(), AppError> {
        FavoriteRepository::new(self.db)
            .remove(user_id, property_id)
            .await?;

        Ok(())
    }

    pub async fn is_favorite(&self, user_id: i32, property_id: i32) -> Result<bool, AppError> {
        Ok(FavoriteRepository::new(self.db)
            .exists(user_id, property_id)
            .await?)
    }

    /// The user's favorited listings.
    pub async fn list(&self, user_id: i32) -> Result<Vec<entity::property::Model>, AppError> {
        let ids = FavoriteRepository::new(self.db)
            .property_ids_for_user(user_id)
            .await?;

        Ok(PropertyRepository::new(self.db).find_by_ids(ids).await?)
    }
}

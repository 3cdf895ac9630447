use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{
        domain::{DomainError, Resource},
        AppError,
    },
    model::user::{UpdateProfileParams, UpsertUserParam},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers or refreshes the user behind an open id.
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<entity::user::Model, AppError> {
        let user = UserRepository::new(self.db).upsert(param).await?;

        tracing::debug!("Signed in user {} ({})", user.id, user.open_id);

        Ok(user)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<entity::user::Model, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Resource::User, id).into())
    }

    pub async fn get_by_open_id(
        &self,
        open_id: &str,
    ) -> Result<Option<entity::user::Model>, AppError> {
        Ok(UserRepository::new(self.db)
            .find_by_open_id(open_id)
            .await?)
    }

    pub async fn update_profile(
        &self,
        id: i32,
        params: UpdateProfileParams,
    ) -> Result<entity::user::Model, AppError> {
        UserRepository::new(self.db)
            .update_profile(id, params)
            .await?
            .ok_or_else(|| DomainError::not_found(Resource::User, id).into())
    }

    /// Changes a user's role. Admin only; checked by the caller.
    pub async fn update_role(
        &self,
        id: i32,
        role: UserRole,
    ) -> Result<entity::user::Model, AppError> {
        let user = UserRepository::new(self.db)
            .update_role(id, role)
            .await?
            .ok_or_else(|| AppError::from(DomainError::not_found(Resource::User, id)))?;

        tracing::info!("User {} role set to {:?}", user.id, user.role);

        Ok(user)
    }

    pub async fn count(&self) -> Result<u64, AppError> {
        Ok(UserRepository::new(self.db).count().await?)
    }

    /// Returns one page of users and the total user count.
    pub async fn list(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<entity::user::Model>, u64), AppError> {
        let repo = UserRepository::new(self.db);

        let users = repo.list(limit, offset).await?;
        let total = repo.count().await?;

        Ok((users, total))
    }
}

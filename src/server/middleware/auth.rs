use axum::http::HeaderMap;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, AppError},
    service::user::UserService,
};

/// Header carrying the caller's identity, set by the upstream identity gateway.
pub const OPEN_ID_HEADER: &str = "x-open-id";

pub enum Permission {
    Admin,
    /// Landlords and admins.
    Landlord,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Returns the caller's open id from the identity header.
    pub fn open_id(&self) -> Result<String, AuthError> {
        self.headers
            .get(OPEN_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .ok_or(AuthError::MissingIdentity)
    }

    /// Resolves the caller when an identity header is present.
    ///
    /// Used by public endpoints that show more to owners and admins. A missing
    /// header or an unregistered open id yields `None`.
    pub async fn optional_user(&self) -> Result<Option<entity::user::Model>, AppError> {
        let Ok(open_id) = self.open_id() else {
            return Ok(None);
        };

        UserService::new(self.db).get_by_open_id(&open_id).await
    }

    /// Resolves the caller and checks every permission.
    ///
    /// An empty permission list only requires a registered user.
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let open_id = self.open_id()?;

        let Some(user) = UserService::new(self.db).get_by_open_id(&open_id).await? else {
            return Err(AuthError::UnknownUser(open_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.role != UserRole::Admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "Admin permission required".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Landlord => {
                    if !matches!(user.role, UserRole::Landlord | UserRole::Admin) {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "Landlord permission required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

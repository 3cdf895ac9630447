//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::{PreferredLang, UserRole};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .open_id("gateway-123")
///     .name("Sara")
///     .role(UserRole::Landlord)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    open_id: String,
    name: String,
    role: UserRole,
    created_at: chrono::DateTime<Utc>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - open_id: `"open_{id}"` where id is auto-incremented
    /// - name: `"User {id}"`
    /// - role: `UserRole::User`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            open_id: format!("open_{}", id),
            name: format!("User {}", id),
            role: UserRole::User,
            created_at: Utc::now(),
        }
    }

    pub fn open_id(mut self, open_id: impl Into<String>) -> Self {
        self.open_id = open_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Overrides the registration timestamp, used by analytics tests.
    pub fn created_at(mut self, created_at: chrono::DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            open_id: ActiveValue::Set(self.open_id),
            name: ActiveValue::Set(Some(self.name)),
            name_ar: ActiveValue::Set(None),
            email: ActiveValue::Set(None),
            phone: ActiveValue::Set(None),
            role: ActiveValue::Set(self.role),
            avatar_url: ActiveValue::Set(None),
            bio: ActiveValue::Set(None),
            bio_ar: ActiveValue::Set(None),
            preferred_lang: ActiveValue::Set(PreferredLang::Ar),
            is_verified: ActiveValue::Set(false),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            last_signed_in: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an admin user.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(UserRole::Admin).build().await
}

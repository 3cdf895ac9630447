//! User data repository for database operations.
//!
//! Users are keyed by the open id issued by the identity gateway. This module
//! provides the upsert used on every sign-in plus profile, role and admin listing
//! queries.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{PreferredLang, UserRole};
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::user::{UpdateProfileParams, UpsertUserParam};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a user or refreshes the existing row with the same open id.
    ///
    /// Only the fields given as `Some` overwrite stored values, so a sign-in that
    /// carries no name never blanks a profile. `last_signed_in` is always refreshed.
    ///
    /// # Arguments
    /// - `param` - Open id plus optional name, Arabic name, email and role
    ///
    /// # Returns
    /// - `Ok(Model)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();

        let mut update_columns = vec![
            entity::user::Column::LastSignedIn,
            entity::user::Column::UpdatedAt,
        ];
        if param.name.is_some() {
            update_columns.push(entity::user::Column::Name);
        }
        if param.name_ar.is_some() {
            update_columns.push(entity::user::Column::NameAr);
        }
        if param.email.is_some() {
            update_columns.push(entity::user::Column::Email);
        }
        if param.role.is_some() {
            update_columns.push(entity::user::Column::Role);
        }

        entity::prelude::User::insert(entity::user::ActiveModel {
            open_id: ActiveValue::Set(param.open_id),
            name: ActiveValue::Set(param.name),
            name_ar: ActiveValue::Set(param.name_ar),
            email: ActiveValue::Set(param.email),
            phone: ActiveValue::Set(None),
            role: ActiveValue::Set(param.role.unwrap_or(UserRole::User)),
            avatar_url: ActiveValue::Set(None),
            bio: ActiveValue::Set(None),
            bio_ar: ActiveValue::Set(None),
            preferred_lang: ActiveValue::Set(PreferredLang::Ar),
            is_verified: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            last_signed_in: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::OpenId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// `(id, name)` pairs for the given users; unknown ids are skipped.
    pub async fn names_by_ids(&self, ids: Vec<i32>) -> Result<Vec<(i32, Option<String>)>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::Id)
            .column(entity::user::Column::Name)
            .filter(entity::user::Column::Id.is_in(ids))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Finds a user by the open id from the identity header.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user registered with that open id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_open_id(
        &self,
        open_id: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::OpenId.eq(open_id))
            .one(self.db)
            .await
    }

    /// Applies a partial profile update.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(
        &self,
        id: i32,
        params: UpdateProfileParams,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active = user.into_active_model();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(Some(name));
        }
        if let Some(name_ar) = params.name_ar {
            active.name_ar = ActiveValue::Set(Some(name_ar));
        }
        if let Some(phone) = params.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(bio) = params.bio {
            active.bio = ActiveValue::Set(Some(bio));
        }
        if let Some(bio_ar) = params.bio_ar {
            active.bio_ar = ActiveValue::Set(Some(bio_ar));
        }
        if let Some(avatar_url) = params.avatar_url {
            active.avatar_url = ActiveValue::Set(Some(avatar_url));
        }
        if let Some(preferred_lang) = params.preferred_lang {
            active.preferred_lang = ActiveValue::Set(preferred_lang);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await.map(Some)
    }

    /// Sets a user's role.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated user
    /// - `Ok(None)` - No user with that id
    pub async fn update_role(
        &self,
        id: i32,
        role: UserRole,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active = user.into_active_model();
        active.role = ActiveValue::Set(role);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await.map(Some)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Lists users newest first.
    ///
    /// # Arguments
    /// - `limit` - Maximum rows to return
    /// - `offset` - Rows to skip
    pub async fn list(&self, limit: u64, offset: u64) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await
    }

    /// Registration time and role of every user created at or after `since`.
    pub async fn registrations_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<(DateTime<Utc>, UserRole)>, DbErr> {
        entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::CreatedAt)
            .column(entity::user::Column::Role)
            .filter(entity::user::Column::CreatedAt.gte(since))
            .into_tuple()
            .all(self.db)
            .await
    }
}

//! Favorite data repository.
//!
//! A favorite is a unique (user, property) pair; adding one twice is a no-op.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a favorite unless the pair already exists.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    /// - `property_id` - ID of the listing
    ///
    /// # Returns
    /// - `Ok(())` - Favorite exists after the call
    /// - `Err(DbErr)` - Database error during insert
    pub async fn add(&self, user_id: i32, property_id: i32) -> Result<(), DbErr> {
        if self.exists(user_id, property_id).await? {
            return Ok(());
        }

        entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            property_id: ActiveValue::Set(property_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Returns `true` when a favorite was removed.
    pub async fn remove(&self, user_id: i32, property_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::PropertyId.eq(property_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, user_id: i32, property_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::PropertyId.eq(property_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Property ids the user has favorited, most recent first.
    pub async fn property_ids_for_user(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Favorite::find()
            .select_only()
            .column(entity::favorite::Column::PropertyId)
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_desc(entity::favorite::Column::CreatedAt)
            .order_by_desc(entity::favorite::Column::Id)
            .into_tuple()
            .all(self.db)
            .await
    }
}

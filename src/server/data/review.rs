//! Review data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::review::CreateReviewParams;

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a published review by `tenant_id`.
    pub async fn create(
        &self,
        tenant_id: i32,
        params: CreateReviewParams,
    ) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            property_id: ActiveValue::Set(params.property_id),
            tenant_id: ActiveValue::Set(tenant_id),
            booking_id: ActiveValue::Set(params.booking_id),
            rating: ActiveValue::Set(params.rating),
            comment: ActiveValue::Set(params.comment),
            comment_ar: ActiveValue::Set(params.comment_ar),
            is_published: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::review::Model>, DbErr> {
        entity::prelude::Review::find_by_id(id).one(self.db).await
    }

    pub async fn exists_for_booking(&self, booking_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find()
            .filter(entity::review::Column::BookingId.eq(booking_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Published reviews for a listing, newest first.
    pub async fn list_published_by_property(
        &self,
        property_id: i32,
    ) -> Result<Vec<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::PropertyId.eq(property_id))
            .filter(entity::review::Column::IsPublished.eq(true))
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .all(self.db)
            .await
    }

    /// Ratings of the listing's published reviews.
    pub async fn published_ratings(&self, property_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Review::find()
            .select_only()
            .column(entity::review::Column::Rating)
            .filter(entity::review::Column::PropertyId.eq(property_id))
            .filter(entity::review::Column::IsPublished.eq(true))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Every review regardless of publication, newest first.
    pub async fn list_all(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Review::find().count(self.db).await
    }

    pub async fn set_published(
        &self,
        id: i32,
        is_published: bool,
    ) -> Result<Option<entity::review::Model>, DbErr> {
        let Some(review) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active = review.into_active_model();
        active.is_published = ActiveValue::Set(is_published);

        active.update(self.db).await.map(Some)
    }

    /// Returns `true` when a review was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Review::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

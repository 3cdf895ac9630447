use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::saved_search::CreateSavedSearchParams;

pub struct SavedSearchRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SavedSearchRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateSavedSearchParams,
    ) -> Result<entity::saved_search::Model, DbErr> {
        entity::saved_search::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            name: ActiveValue::Set(params.name),
            filters: ActiveValue::Set(params.filters),
            alert_enabled: ActiveValue::Set(params.alert_enabled),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::saved_search::Model>, DbErr> {
        entity::prelude::SavedSearch::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn list_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::saved_search::Model>, DbErr> {
        entity::prelude::SavedSearch::find()
            .filter(entity::saved_search::Column::UserId.eq(user_id))
            .order_by_desc(entity::saved_search::Column::CreatedAt)
            .order_by_desc(entity::saved_search::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::SavedSearch::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

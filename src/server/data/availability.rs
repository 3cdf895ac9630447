use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::availability::SetAvailabilityParams;

pub struct AvailabilityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AvailabilityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: SetAvailabilityParams,
    ) -> Result<entity::property_availability::Model, DbErr> {
        entity::property_availability::ActiveModel {
            property_id: ActiveValue::Set(params.property_id),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            is_blocked: ActiveValue::Set(params.is_blocked),
            price_override: ActiveValue::Set(params.price_override),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::property_availability::Model>, DbErr> {
        entity::prelude::PropertyAvailability::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Lists a listing's availability windows by start date.
    pub async fn list_by_property(
        &self,
        property_id: i32,
    ) -> Result<Vec<entity::property_availability::Model>, DbErr> {
        entity::prelude::PropertyAvailability::find()
            .filter(entity::property_availability::Column::PropertyId.eq(property_id))
            .order_by_asc(entity::property_availability::Column::StartDate)
            .order_by_asc(entity::property_availability::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns `true` when a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PropertyAvailability::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::district::CreateDistrictParams;

pub struct DistrictRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DistrictRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateDistrictParams,
    ) -> Result<entity::district::Model, DbErr> {
        entity::district::ActiveModel {
            city: ActiveValue::Set(params.city),
            city_ar: ActiveValue::Set(params.city_ar),
            name_en: ActiveValue::Set(params.name_en),
            name_ar: ActiveValue::Set(params.name_ar),
            latitude: ActiveValue::Set(params.latitude),
            longitude: ActiveValue::Set(params.longitude),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Active districts, optionally limited to one city (English or Arabic name).
    pub async fn list_active(
        &self,
        city: Option<&str>,
    ) -> Result<Vec<entity::district::Model>, DbErr> {
        let mut query = entity::prelude::District::find()
            .filter(entity::district::Column::IsActive.eq(true));
        if let Some(city) = city {
            query = query.filter(
                Condition::any()
                    .add(entity::district::Column::City.eq(city))
                    .add(entity::district::Column::CityAr.eq(city)),
            );
        }

        query
            .order_by_asc(entity::district::Column::City)
            .order_by_asc(entity::district::Column::NameEn)
            .all(self.db)
            .await
    }

    pub async fn set_active(
        &self,
        id: i32,
        is_active: bool,
    ) -> Result<Option<entity::district::Model>, DbErr> {
        let Some(district) = entity::prelude::District::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = district.into_active_model();
        active.is_active = ActiveValue::Set(is_active);

        active.update(self.db).await.map(Some)
    }
}

//! District factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a district in the given city.
pub async fn create_district(
    db: &DatabaseConnection,
    city: &str,
    name_en: &str,
    is_active: bool,
) -> Result<entity::district::Model, DbErr> {
    entity::district::ActiveModel {
        city: ActiveValue::Set(city.to_string()),
        city_ar: ActiveValue::Set(city.to_string()),
        name_en: ActiveValue::Set(name_en.to_string()),
        name_ar: ActiveValue::Set(name_en.to_string()),
        latitude: ActiveValue::Set(None),
        longitude: ActiveValue::Set(None),
        is_active: ActiveValue::Set(is_active),
        ..Default::default()
    }
    .insert(db)
    .await
}

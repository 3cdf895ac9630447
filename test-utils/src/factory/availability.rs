//! Availability window factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an availability window for a property.
///
/// # Arguments
/// - `db` - Database connection
/// - `property_id` - Property the window belongs to
/// - `start_date` / `end_date` - Window bounds
/// - `is_blocked` - Whether the window blocks bookings
pub async fn create_availability(
    db: &DatabaseConnection,
    property_id: i32,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    is_blocked: bool,
) -> Result<entity::property_availability::Model, DbErr> {
    entity::property_availability::ActiveModel {
        property_id: ActiveValue::Set(property_id),
        start_date: ActiveValue::Set(start_date),
        end_date: ActiveValue::Set(end_date),
        is_blocked: ActiveValue::Set(is_blocked),
        price_override: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

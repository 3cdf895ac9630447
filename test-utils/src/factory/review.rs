//! Review factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a review with the given rating and publish flag.
pub async fn create_review(
    db: &DatabaseConnection,
    property_id: i32,
    tenant_id: i32,
    booking_id: Option<i32>,
    rating: i32,
    is_published: bool,
) -> Result<entity::review::Model, DbErr> {
    entity::review::ActiveModel {
        property_id: ActiveValue::Set(property_id),
        tenant_id: ActiveValue::Set(tenant_id),
        booking_id: ActiveValue::Set(booking_id),
        rating: ActiveValue::Set(rating),
        comment: ActiveValue::Set(Some("Great stay".to_string())),
        comment_ar: ActiveValue::Set(None),
        is_published: ActiveValue::Set(is_published),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

use crate::server::{
    error::{domain::DomainError, AppError},
    model::{review::CreateReviewParams, user::Caller},
    service::review::ReviewService,
};
use entity::sea_orm_active_enums::BookingStatus;
use test_utils::{
    builder::TestBuilder,
    factory,
    factory::{helpers::create_booking_with_dependencies, user::UserFactory},
};

mod create;
mod list;

fn review(property_id: i32, booking_id: Option<i32>, rating: i32) -> CreateReviewParams {
    CreateReviewParams {
        property_id,
        booking_id,
        rating,
        comment: Some("Clean and quiet".to_string()),
        comment_ar: None,
    }
}

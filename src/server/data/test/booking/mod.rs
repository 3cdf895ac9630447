use crate::server::{data::booking::BookingRepository, model::booking::UpdateBookingStatusParams};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::BookingStatus;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder, factory, factory::helpers::create_booking_with_dependencies,
};

mod active_ending_between;

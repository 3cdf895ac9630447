use crate::server::{
    data::property::PropertyRepository,
    model::property::{SearchFilters, UpdatePropertyParams},
};
use chrono::{Duration, TimeZone, Utc};
use entity::sea_orm_active_enums::{BookingStatus, FurnishedLevel, PropertyStatus, PropertyType};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod increment_views;
mod search;
mod update;

fn filters() -> SearchFilters {
    SearchFilters {
        limit: 20,
        ..Default::default()
    }
}

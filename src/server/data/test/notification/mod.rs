use crate::server::{
    data::notification::NotificationRepository,
    model::notification::{CreateNotificationParams, RELATED_BOOKING},
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::NotificationKind;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::notification::create_notification};

mod read_state;

use crate::server::{
    error::{domain::DomainError, AppError},
    model::user::Caller,
    service::notification::NotificationService,
};
use chrono::Utc;
use entity::sea_orm_active_enums::NotificationKind;
use test_utils::{builder::TestBuilder, factory, factory::notification::create_notification};

mod mark_read;

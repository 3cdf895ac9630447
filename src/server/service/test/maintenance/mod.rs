use crate::server::{
    data::notification::NotificationRepository,
    error::{domain::DomainError, AppError},
    model::{
        maintenance::{CreateMaintenanceParams, UpdateMaintenanceParams},
        user::Caller,
    },
    service::maintenance::MaintenanceService,
};
use entity::sea_orm_active_enums::{
    BookingStatus, MaintenanceCategory, MaintenancePriority, MaintenanceStatus, NotificationKind,
};
use test_utils::{
    builder::TestBuilder,
    factory,
    factory::{
        helpers::{create_booking_with_dependencies, create_property_with_landlord},
        maintenance::MaintenanceFactory,
    },
};

mod create;
mod update;

fn leak(property_id: i32) -> CreateMaintenanceParams {
    CreateMaintenanceParams {
        property_id,
        booking_id: None,
        title: "Kitchen tap leaking".to_string(),
        title_ar: None,
        description: "Dripping since Monday".to_string(),
        description_ar: None,
        category: MaintenanceCategory::Plumbing,
        priority: MaintenancePriority::High,
        photos: Vec::new(),
    }
}

fn to_status(status: MaintenanceStatus) -> UpdateMaintenanceParams {
    UpdateMaintenanceParams {
        status: Some(status),
        ..Default::default()
    }
}

use crate::server::{
    data::maintenance::MaintenanceRepository, model::maintenance::UpdateMaintenanceParams,
};
use entity::sea_orm_active_enums::{MaintenancePriority, MaintenanceStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::maintenance::MaintenanceFactory};

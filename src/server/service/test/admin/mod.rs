use crate::server::{error::AppError, service::admin::AdminService};
use entity::sea_orm_active_enums::{
    BookingStatus, MaintenanceStatus, PaymentKind, PaymentStatus, PropertyStatus, PropertyType,
};
use test_utils::{
    builder::TestBuilder,
    factory,
    factory::{
        booking::BookingFactory, maintenance::MaintenanceFactory, payment::PaymentFactory,
        property::PropertyFactory,
    },
};

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::{payment::CreatePaymentParams, user::Caller},
    service::payment::PaymentService,
};
use entity::sea_orm_active_enums::{BookingStatus, NotificationKind, PaymentKind, PaymentStatus};
use test_utils::{
    builder::TestBuilder,
    factory,
    factory::{helpers::create_booking_with_dependencies, payment::PaymentFactory},
};

mod create;

fn rent(booking_id: i32, status: PaymentStatus) -> CreatePaymentParams {
    CreatePaymentParams {
        booking_id,
        kind: PaymentKind::Rent,
        amount: 500_000,
        status,
        description: None,
        description_ar: None,
    }
}

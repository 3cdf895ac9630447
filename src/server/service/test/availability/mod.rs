use crate::{
    model::availability::SetAvailabilityDto,
    server::{
        error::{auth::AuthError, domain::DomainError, AppError},
        model::{availability::SetAvailabilityParams, user::Caller},
        service::availability::AvailabilityService,
    },
};
use chrono::{DateTime, Duration, Utc};
use test_utils::{
    builder::TestBuilder,
    factory,
    factory::{availability::create_availability, helpers::create_property_with_landlord},
};

mod delete;
mod list;
mod set;

/// A window starting `from_days` from now and lasting `length_days`.
fn window(from_days: i64, length_days: i64) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc::now() + Duration::days(from_days);
    (start, start + Duration::days(length_days))
}

fn blocked(property_id: i32, from_days: i64, length_days: i64) -> SetAvailabilityParams {
    let (start_date, end_date) = window(from_days, length_days);
    SetAvailabilityParams::from_dto(
        property_id,
        SetAvailabilityDto {
            start_date,
            end_date,
            is_blocked: true,
            price_override: None,
        },
    )
    .unwrap()
}

//! Shared helper utilities for factory methods.
//!
//! Provides unique ID generation and shortcuts that create an entity together with
//! the rows it depends on.

use entity::sea_orm_active_enums::BookingStatus;
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{booking::BookingFactory, property::create_property, user::create_user};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a landlord and one active property owned by them.
///
/// # Returns
/// - `Ok((landlord, property))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_property_with_landlord(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::property::Model), DbErr> {
    let landlord = crate::factory::user::UserFactory::new(db)
        .role(entity::sea_orm_active_enums::UserRole::Landlord)
        .build()
        .await?;
    let property = create_property(db, landlord.id).await?;

    Ok((landlord, property))
}

/// Creates a landlord, a property, a tenant and a booking in the given status.
///
/// The booking copies rent from the property and spans six months starting in
/// thirty days.
///
/// # Returns
/// - `Ok((landlord, tenant, property, booking))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
    status: BookingStatus,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::property::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let (landlord, property) = create_property_with_landlord(db).await?;
    let tenant = create_user(db).await?;
    let booking = BookingFactory::new(db, &property, tenant.id)
        .status(status)
        .build()
        .await?;

    Ok((landlord, tenant, property, booking))
}

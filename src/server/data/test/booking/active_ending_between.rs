use super::*;
use test_utils::factory::booking::BookingFactory;

/// Tests selecting active bookings that end inside the reminder window.
///
/// Verifies that bookings ending later, and non-active bookings, are skipped.
///
/// Expected: Ok with only the active booking ending within the window
#[tokio::test]
async fn finds_active_bookings_ending_soon() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_landlord(db).await?;
    let tenant = factory::user::create_user(db).await?;
    let now = Utc::now();

    // Ends in roughly ten days.
    let ending = BookingFactory::new(db, &property, tenant.id)
        .status(BookingStatus::Active)
        .stay(now - Duration::days(80), 3)
        .build()
        .await?;
    BookingFactory::new(db, &property, tenant.id)
        .status(BookingStatus::Active)
        .stay(now - Duration::days(10), 6)
        .build()
        .await?;
    BookingFactory::new(db, &property, tenant.id)
        .status(BookingStatus::Approved)
        .stay(now - Duration::days(80), 3)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let found = repo
        .active_ending_between(now, now + Duration::days(14))
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, ending.id);

    Ok(())
}

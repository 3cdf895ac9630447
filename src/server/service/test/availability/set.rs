use super::*;

/// Tests the owner blocking a window on their listing.
///
/// Expected: Ok with the window stored against the listing
#[tokio::test]
async fn owner_adds_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (landlord, property) = create_property_with_landlord(db).await?;

    let period = AvailabilityService::new(db)
        .set(Caller::from(&landlord), blocked(property.id, 5, 10))
        .await?;

    assert_eq!(period.property_id, property.id);
    assert!(period.is_blocked);
    assert!(period.start_date < period.end_date);

    Ok(())
}

/// Tests an admin managing a listing they do not own.
///
/// Expected: Ok
#[tokio::test]
async fn admin_adds_window_for_any_listing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = create_property_with_landlord(db).await?;
    let admin = factory::create_admin(db).await?;

    let period = AvailabilityService::new(db)
        .set(Caller::from(&admin), blocked(property.id, 1, 3))
        .await?;

    assert_eq!(period.property_id, property.id);

    Ok(())
}

/// Tests another user adding a window to someone else's listing.
///
/// Expected: Err(AccessDenied) and nothing stored
#[tokio::test]
async fn rejects_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = create_property_with_landlord(db).await?;
    let stranger = factory::create_user(db).await?;
    let service = AvailabilityService::new(db);

    let result = service
        .set(Caller::from(&stranger), blocked(property.id, 1, 3))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == stranger.id
    ));
    assert!(service.list(property.id).await?.is_empty());

    Ok(())
}

/// Tests a window whose end is not after its start.
///
/// Expected: Err(InvalidDateRange) for both equal and reversed bounds
#[test]
fn rejects_end_not_after_start() {
    let (start, end) = window(1, 3);

    for (start_date, end_date) in [(start, start), (end, start)] {
        let result = SetAvailabilityParams::from_dto(
            1,
            SetAvailabilityDto {
                start_date,
                end_date,
                is_blocked: false,
                price_override: None,
            },
        );

        assert!(matches!(result, Err(DomainError::InvalidDateRange)));
    }
}

use super::*;

/// Tests the owner removing a window.
///
/// Expected: Ok and the window no longer listed
#[tokio::test]
async fn owner_removes_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (landlord, property) = create_property_with_landlord(db).await?;
    let (start, end) = window(3, 7);
    let period = create_availability(db, property.id, start, end, true).await?;
    let service = AvailabilityService::new(db);

    service.delete(Caller::from(&landlord), period.id).await?;

    assert!(service.list(property.id).await?.is_empty());

    Ok(())
}

/// Tests another user removing a window on someone else's listing.
///
/// Expected: Err(AccessDenied) and the window kept
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
    let (start, end) = window(3, 7);
    let period = create_availability(db, property.id, start, end, true).await?;
    let service = AvailabilityService::new(db);

    let result = service.delete(Caller::from(&stranger), period.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(service.list(property.id).await?.len(), 1);

    Ok(())
}

/// Tests removing a window that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_window_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;

    let result = AvailabilityService::new(db)
        .delete(Caller::from(&admin), 999)
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::NotFound { .. }))
    ));

    Ok(())
}

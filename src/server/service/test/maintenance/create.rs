use super::*;

/// Tests a tenant with a booking filing a request.
///
/// Expected: Ok with status Submitted, landlord copied from the property and a
/// MaintenanceUpdate notification for the landlord
#[tokio::test]
async fn tenant_with_booking_files_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (landlord, tenant, property, _) =
        create_booking_with_dependencies(db, BookingStatus::Active).await?;

    let request = MaintenanceService::new(db)
        .create(Caller::from(&tenant), leak(property.id))
        .await?;

    assert_eq!(request.status, MaintenanceStatus::Submitted);
    assert_eq!(request.tenant_id, tenant.id);
    assert_eq!(request.landlord_id, landlord.id);

    let notifications = NotificationRepository::new(db)
        .list_by_user(landlord.id)
        .await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::MaintenanceUpdate);

    Ok(())
}

/// Tests a user without any booking on the listing.
///
/// Expected: Err(AuthErr)
#[tokio::test]
async fn requires_booking_on_property() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = create_property_with_landlord(db).await?;
    let stranger = factory::create_user(db).await?;

    let result = MaintenanceService::new(db)
        .create(Caller::from(&stranger), leak(property.id))
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));

    Ok(())
}

/// Tests referencing a booking for a different listing.
///
/// Expected: Err(Invalid("booking_id"))
#[tokio::test]
async fn rejects_booking_for_other_property() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, tenant, _, booking) =
        create_booking_with_dependencies(db, BookingStatus::Active).await?;
    let (_, other_property) = create_property_with_landlord(db).await?;

    let mut params = leak(other_property.id);
    params.booking_id = Some(booking.id);
    let result = MaintenanceService::new(db)
        .create(Caller::from(&tenant), params)
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::Invalid("booking_id")))
    ));

    Ok(())
}

use super::*;

/// Tests the tenant recording a completed rent payment.
///
/// Expected: Ok with paid_at set and a PaymentReceived notification for the landlord
#[tokio::test]
async fn completed_payment_notifies_landlord() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (landlord, tenant, _, booking) =
        create_booking_with_dependencies(db, BookingStatus::Active).await?;

    let payment = PaymentService::new(db)
        .create(
            Caller::from(&tenant),
            rent(booking.id, PaymentStatus::Completed),
        )
        .await?;

    assert!(payment.paid_at.is_some());
    assert_eq!(payment.landlord_id, landlord.id);

    let notifications = NotificationRepository::new(db)
        .list_by_user(landlord.id)
        .await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::PaymentReceived);
    assert_eq!(
        notifications[0].content_en.as_deref(),
        Some(format!("5000.00 SAR received for booking #{}", booking.id).as_str())
    );

    Ok(())
}

/// Tests a pending payment.
///
/// Expected: Ok without paid_at and no notification
#[tokio::test]
async fn pending_payment_is_silent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (landlord, tenant, _, booking) =
        create_booking_with_dependencies(db, BookingStatus::Active).await?;

    let payment = PaymentService::new(db)
        .create(Caller::from(&tenant), rent(booking.id, PaymentStatus::Pending))
        .await?;

    assert!(payment.paid_at.is_none());
    assert_eq!(
        NotificationRepository::new(db).unread_count(landlord.id).await?,
        0
    );

    Ok(())
}

/// Tests an outsider recording a payment or listing a booking's payments.
///
/// Expected: Err(AuthErr) for both
#[tokio::test]
async fn outsiders_are_denied() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, booking) = create_booking_with_dependencies(db, BookingStatus::Active).await?;
    let stranger = factory::create_user(db).await?;
    let service = PaymentService::new(db);

    let create = service
        .create(
            Caller::from(&stranger),
            rent(booking.id, PaymentStatus::Pending),
        )
        .await;
    let list = service
        .list_by_booking(Caller::from(&stranger), booking.id)
        .await;

    assert!(matches!(create, Err(AppError::AuthErr(_))));
    assert!(matches!(list, Err(AppError::AuthErr(_))));

    Ok(())
}

/// Tests the tenant completing a pending payment.
///
/// Expected: Err(AuthErr); only the landlord or an admin may change status
#[tokio::test]
async fn tenant_cannot_update_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (landlord, tenant, _, booking) =
        create_booking_with_dependencies(db, BookingStatus::Active).await?;
    let payment = PaymentFactory::new(db, &booking)
        .status(PaymentStatus::Pending)
        .build()
        .await?;
    let service = PaymentService::new(db);

    let result = service
        .update_status(Caller::from(&tenant), payment.id, PaymentStatus::Completed)
        .await;
    assert!(matches!(result, Err(AppError::AuthErr(_))));

    let updated = service
        .update_status(Caller::from(&landlord), payment.id, PaymentStatus::Completed)
        .await?;
    assert!(updated.paid_at.is_some());

    Ok(())
}

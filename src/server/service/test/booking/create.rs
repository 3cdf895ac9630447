use super::*;

/// Tests booking an active listing that requires approval.
///
/// Expected: Ok with status Pending, rent copied, total = rent × months, sanitized
/// notes and a BookingRequest notification for the landlord
#[tokio::test]
async fn creates_pending_booking_and_notifies_landlord() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (landlord, property) = create_property_with_landlord(db).await?;
    let tenant = factory::create_user(db).await?;

    let booking = BookingService::new(db)
        .create(Caller::from(&tenant), request(property.id, 3))
        .await?;

    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.landlord_id, landlord.id);
    assert_eq!(booking.duration_months, 3);
    assert_eq!(booking.monthly_rent, property.monthly_rent);
    assert_eq!(booking.total_amount, property.monthly_rent * 3);
    assert_eq!(
        booking.tenant_notes.as_deref(),
        Some("&lt;b&gt;Quiet&lt;&#x2F;b&gt; tenant")
    );

    let notifications = NotificationRepository::new(db)
        .list_by_user(landlord.id)
        .await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::BookingRequest);
    assert_eq!(notifications[0].related_id, Some(booking.id));

    Ok(())
}

/// Tests booking an instant-book listing.
///
/// Expected: Ok with status Approved
#[tokio::test]
async fn instant_book_skips_approval() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let landlord = factory::create_user(db).await?;
    let property = PropertyFactory::new(db, landlord.id)
        .instant_book(true)
        .build()
        .await?;
    let tenant = factory::create_user(db).await?;

    let booking = BookingService::new(db)
        .create(Caller::from(&tenant), request(property.id, 2))
        .await?;

    assert_eq!(booking.status, BookingStatus::Approved);

    Ok(())
}

/// Tests booking a listing that is not active.
///
/// Expected: Err(PropertyNotBookable) and no booking stored
#[tokio::test]
async fn rejects_inactive_listing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let landlord = factory::create_user(db).await?;
    let property = PropertyFactory::new(db, landlord.id)
        .status(PropertyStatus::Draft)
        .build()
        .await?;
    let tenant = factory::create_user(db).await?;

    let result = BookingService::new(db)
        .create(Caller::from(&tenant), request(property.id, 2))
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::PropertyNotBookable))
    ));
    assert_eq!(BookingRepository::new(db).count(None).await?, 0);

    Ok(())
}

/// Tests a landlord booking their own listing.
///
/// Expected: Err(OwnPropertyBooking)
#[tokio::test]
async fn rejects_own_listing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (landlord, property) = create_property_with_landlord(db).await?;

    let result = BookingService::new(db)
        .create(Caller::from(&landlord), request(property.id, 2))
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::OwnPropertyBooking))
    ));

    Ok(())
}

/// Tests a stay longer than the listing allows.
///
/// Expected: Err(StayOutOfRange) naming the requested and allowed months
#[tokio::test]
async fn rejects_stay_outside_listing_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let landlord = factory::create_user(db).await?;
    let property = PropertyFactory::new(db, landlord.id)
        .stay_months(3, 6)
        .build()
        .await?;
    let tenant = factory::create_user(db).await?;

    let result = BookingService::new(db)
        .create(Caller::from(&tenant), request(property.id, 8))
        .await;

    match result {
        Err(AppError::DomainErr(DomainError::StayOutOfRange { months, min, max })) => {
            assert_eq!((months, min, max), (8, 3, 6));
        }
        other => panic!("expected StayOutOfRange, got {:?}", other),
    }

    Ok(())
}

/// Tests booking a listing whose rent times the stay does not fit in an amount.
///
/// Expected: Err(AmountTooLarge) and no booking stored
#[tokio::test]
async fn rejects_total_beyond_amount_cap() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let landlord = factory::create_user(db).await?;
    let property = PropertyFactory::new(db, landlord.id)
        .monthly_rent(i64::MAX / 2 + 1)
        .build()
        .await?;
    let tenant = factory::create_user(db).await?;

    let result = BookingService::new(db)
        .create(Caller::from(&tenant), request(property.id, 2))
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::AmountTooLarge { .. }))
    ));
    assert_eq!(BookingRepository::new(db).count(None).await?, 0);

    Ok(())
}

use super::*;

/// Tests reviewing a completed booking.
///
/// Expected: Ok with the review published
#[tokio::test]
async fn reviews_completed_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, tenant, property, booking) =
        create_booking_with_dependencies(db, BookingStatus::Completed).await?;

    let created = ReviewService::new(db)
        .create(
            Caller::from(&tenant),
            review(property.id, Some(booking.id), 5),
        )
        .await?;

    assert!(created.is_published);
    assert_eq!(created.booking_id, Some(booking.id));

    Ok(())
}

/// Tests reviewing the same booking twice.
///
/// Expected: Err(DuplicateReview)
#[tokio::test]
async fn rejects_second_review_of_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, tenant, property, booking) =
        create_booking_with_dependencies(db, BookingStatus::Completed).await?;
    let service = ReviewService::new(db);

    service
        .create(
            Caller::from(&tenant),
            review(property.id, Some(booking.id), 4),
        )
        .await?;
    let result = service
        .create(
            Caller::from(&tenant),
            review(property.id, Some(booking.id), 2),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::DuplicateReview))
    ));

    Ok(())
}

/// Tests reviewing a booking that has not finished.
///
/// Expected: Err(BookingNotReviewable)
#[tokio::test]
async fn rejects_unfinished_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, tenant, property, booking) =
        create_booking_with_dependencies(db, BookingStatus::Active).await?;

    let result = ReviewService::new(db)
        .create(
            Caller::from(&tenant),
            review(property.id, Some(booking.id), 5),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::BookingNotReviewable))
    ));

    Ok(())
}

/// Tests reviewing somebody else's booking.
///
/// Expected: Err(BookingNotReviewable)
#[tokio::test]
async fn rejects_other_tenants_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, property, booking) =
        create_booking_with_dependencies(db, BookingStatus::Completed).await?;
    let other = factory::create_user(db).await?;

    let result = ReviewService::new(db)
        .create(
            Caller::from(&other),
            review(property.id, Some(booking.id), 5),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::BookingNotReviewable))
    ));

    Ok(())
}

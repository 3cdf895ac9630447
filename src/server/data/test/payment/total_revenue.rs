use super::*;

/// Tests that revenue counts completed payments and ignores refunds.
///
/// Expected: Ok(700_000) from rent plus deposit, refund and pending excluded
#[tokio::test]
async fn sums_completed_non_refund_payments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, booking) = create_booking_with_dependencies(db, BookingStatus::Active).await?;
    PaymentFactory::new(db, &booking)
        .kind(PaymentKind::Rent)
        .amount(500_000)
        .status(PaymentStatus::Completed)
        .build()
        .await?;
    PaymentFactory::new(db, &booking)
        .kind(PaymentKind::Deposit)
        .amount(200_000)
        .status(PaymentStatus::Completed)
        .build()
        .await?;
    PaymentFactory::new(db, &booking)
        .kind(PaymentKind::Refund)
        .amount(100_000)
        .status(PaymentStatus::Completed)
        .build()
        .await?;
    PaymentFactory::new(db, &booking)
        .kind(PaymentKind::Rent)
        .amount(500_000)
        .status(PaymentStatus::Pending)
        .build()
        .await?;

    let repo = PaymentRepository::new(db);

    assert_eq!(repo.total_revenue().await?, 700_000);

    Ok(())
}

/// Tests revenue with no payments.
///
/// Expected: Ok(0)
#[tokio::test]
async fn is_zero_without_payments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PaymentRepository::new(db);

    assert_eq!(repo.total_revenue().await?, 0);

    Ok(())
}

/// Tests revenue whose total does not fit in an i64.
///
/// Expected: Err(DbErr::Custom) instead of a wrapped or panicking sum
#[tokio::test]
async fn reports_overflowing_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, booking) = create_booking_with_dependencies(db, BookingStatus::Active).await?;
    for _ in 0..2 {
        PaymentFactory::new(db, &booking)
            .kind(PaymentKind::Rent)
            .amount(i64::MAX / 2 + 1)
            .status(PaymentStatus::Completed)
            .build()
            .await?;
    }

    let result = PaymentRepository::new(db).total_revenue().await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}

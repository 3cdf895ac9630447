use super::*;

/// Tests that a completed payment copies parties from the booking and is stamped paid.
///
/// Expected: Ok with tenant, landlord and paid_at set, currency SAR
#[tokio::test]
async fn copies_parties_and_stamps_paid_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (landlord, tenant, _, booking) =
        create_booking_with_dependencies(db, BookingStatus::Active).await?;

    let repo = PaymentRepository::new(db);
    let payment = repo
        .create(
            &booking,
            CreatePaymentParams {
                booking_id: booking.id,
                kind: PaymentKind::Rent,
                amount: 500_000,
                status: PaymentStatus::Completed,
                description: None,
                description_ar: None,
            },
        )
        .await?;

    assert_eq!(payment.tenant_id, tenant.id);
    assert_eq!(payment.landlord_id, landlord.id);
    assert_eq!(payment.currency, "SAR");
    assert!(payment.paid_at.is_some());

    Ok(())
}

/// Tests that moving a pending payment to completed stamps `paid_at`.
///
/// Expected: Ok(Some) with status Completed and paid_at set
#[tokio::test]
async fn update_status_stamps_paid_at_on_completion() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, booking) = create_booking_with_dependencies(db, BookingStatus::Active).await?;
    let pending = PaymentFactory::new(db, &booking).build().await?;
    assert!(pending.paid_at.is_none());

    let repo = PaymentRepository::new(db);
    let updated = repo
        .update_status(pending.id, PaymentStatus::Completed)
        .await?
        .unwrap();

    assert_eq!(updated.status, PaymentStatus::Completed);
    assert!(updated.paid_at.is_some());
    assert_eq!(repo.list_by_booking(booking.id).await?.len(), 1);

    Ok(())
}

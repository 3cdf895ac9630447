use super::*;

/// Tests listing windows inserted out of order.
///
/// Expected: Ok with windows ordered by start date and only this listing's
/// windows included
#[tokio::test]
async fn orders_by_start_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = create_property_with_landlord(db).await?;
    let (_, other) = create_property_with_landlord(db).await?;

    let (late_start, late_end) = window(40, 5);
    let (early_start, early_end) = window(2, 5);
    let (mid_start, mid_end) = window(20, 5);
    let late = create_availability(db, property.id, late_start, late_end, true).await?;
    let early = create_availability(db, property.id, early_start, early_end, false).await?;
    let mid = create_availability(db, property.id, mid_start, mid_end, true).await?;
    create_availability(db, other.id, early_start, early_end, true).await?;

    let periods = AvailabilityService::new(db).list(property.id).await?;

    let ids: Vec<i32> = periods.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![early.id, mid.id, late.id]);

    Ok(())
}

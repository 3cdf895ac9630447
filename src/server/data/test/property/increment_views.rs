use super::*;

/// Tests that each call adds exactly one view.
///
/// Expected: Ok(true) twice and view_count 2
#[tokio::test]
async fn increments_view_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_landlord(db).await?;

    let repo = PropertyRepository::new(db);
    assert!(repo.increment_views(property.id).await?);
    assert!(repo.increment_views(property.id).await?);

    let stored = repo.find_by_id(property.id).await?.unwrap();
    assert_eq!(stored.view_count, 2);

    Ok(())
}

/// Tests incrementing a listing that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PropertyRepository::new(db);

    assert!(!repo.increment_views(42).await?);

    Ok(())
}

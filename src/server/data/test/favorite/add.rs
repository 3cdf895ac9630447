use super::*;

/// Tests that adding the same favorite twice keeps one row.
///
/// Expected: Ok for both calls and a single property id listed
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_landlord(db).await?;
    let user = factory::user::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.add(user.id, property.id).await?;
    repo.add(user.id, property.id).await?;

    assert_eq!(repo.property_ids_for_user(user.id).await?, vec![property.id]);
    assert!(repo.exists(user.id, property.id).await?);

    Ok(())
}

/// Tests removing a favorite.
///
/// Expected: Ok(true) on first removal, Ok(false) on the second
#[tokio::test]
async fn remove_reports_whether_a_row_was_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_landlord(db).await?;
    let user = factory::user::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.add(user.id, property.id).await?;

    assert!(repo.remove(user.id, property.id).await?);
    assert!(!repo.remove(user.id, property.id).await?);
    assert!(!repo.exists(user.id, property.id).await?);

    Ok(())
}

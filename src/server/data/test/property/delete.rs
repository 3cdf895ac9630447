use super::*;
use test_utils::factory::availability::create_availability;

/// Tests that deleting a listing removes its availability and favorites.
///
/// Verifies that rows of other listings are untouched.
///
/// Expected: Ok(true) and only the other listing's rows remain
#[tokio::test]
async fn removes_availability_and_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (landlord, property) = factory::helpers::create_property_with_landlord(db).await?;
    let other = factory::create_property(db, landlord.id).await?;
    let user = factory::user::create_user(db).await?;

    let now = Utc::now();
    create_availability(db, property.id, now, now + Duration::days(5), true).await?;
    create_availability(db, other.id, now, now + Duration::days(5), true).await?;
    let favorites = crate::server::data::favorite::FavoriteRepository::new(db);
    favorites.add(user.id, property.id).await?;
    favorites.add(user.id, other.id).await?;

    let repo = PropertyRepository::new(db);
    assert!(repo.delete(property.id).await?);

    assert!(repo.find_by_id(property.id).await?.is_none());
    assert_eq!(
        entity::prelude::PropertyAvailability::find().count(db).await?,
        1
    );
    assert_eq!(entity::prelude::Favorite::find().count(db).await?, 1);
    assert!(favorites.exists(user.id, other.id).await?);

    Ok(())
}

/// Tests deleting a listing that does not exist.
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

    assert!(!repo.delete(7).await?);

    Ok(())
}

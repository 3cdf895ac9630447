use super::*;

/// Tests that only published reviews are listed and rated.
///
/// Expected: Ok with one listed review and ratings [4]
#[tokio::test]
async fn hides_unpublished_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_landlord(db).await?;
    let tenant = factory::user::create_user(db).await?;
    let visible = create_review(db, property.id, tenant.id, None, 4, true).await?;
    create_review(db, property.id, tenant.id, None, 1, false).await?;

    let repo = ReviewRepository::new(db);
    let listed = repo.list_published_by_property(property.id).await?;

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, visible.id);
    assert_eq!(repo.published_ratings(property.id).await?, vec![4]);
    assert_eq!(repo.count().await?, 2);

    Ok(())
}

/// Tests unpublishing and deleting a review.
///
/// Expected: Ok with the review hidden, then removed
#[tokio::test]
async fn moderation_hides_and_deletes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_landlord(db).await?;
    let tenant = factory::user::create_user(db).await?;
    let review = create_review(db, property.id, tenant.id, None, 5, true).await?;

    let repo = ReviewRepository::new(db);
    let hidden = repo.set_published(review.id, false).await?.unwrap();
    assert!(!hidden.is_published);
    assert!(repo.published_ratings(property.id).await?.is_empty());

    assert!(repo.delete(review.id).await?);
    assert!(repo.find_by_id(review.id).await?.is_none());

    Ok(())
}

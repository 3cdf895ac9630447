use super::*;

/// Tests listing a property's reviews after one is unpublished.
///
/// Expected: only the published review, carrying the reviewer's name, and an
/// average over published reviews only
#[tokio::test]
async fn lists_published_reviews_with_names() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, property, _) =
        create_booking_with_dependencies(db, BookingStatus::Completed).await?;
    let noura = UserFactory::new(db).name("Noura").build().await?;
    let fahad = UserFactory::new(db).name("Fahad").build().await?;
    factory::review::create_review(db, property.id, noura.id, None, 4, true).await?;
    let hidden = factory::review::create_review(db, property.id, fahad.id, None, 1, true).await?;

    let service = ReviewService::new(db);
    service.set_published(hidden.id, false).await?;

    let reviews = service.list_by_property(property.id).await?;
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].reviewer_name.as_deref(), Some("Noura"));

    let summary = service.average_rating(property.id).await?;
    assert_eq!(summary.count, 1);
    assert_eq!(summary.average, 4.0);

    let (all, total) = service.list_all(20, 0).await?;
    assert_eq!(all.len(), 2);
    assert_eq!(total, 2);

    Ok(())
}

use super::*;

/// Tests a partial listing update.
///
/// Expected: Ok(Some) with new rent and amenities, title unchanged
#[tokio::test]
async fn applies_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_landlord(db).await?;

    let repo = PropertyRepository::new(db);
    let updated = repo
        .update(
            property.id,
            UpdatePropertyParams {
                monthly_rent: Some(750_000),
                amenities: Some(vec!["wifi".to_string(), "pool".to_string()]),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.monthly_rent, 750_000);
    assert_eq!(updated.amenities, serde_json::json!(["wifi", "pool"]));
    assert_eq!(updated.title_en, property.title_en);

    Ok(())
}

/// Tests that moderation changes only the status.
///
/// Expected: Ok(Some) with status Rejected
#[tokio::test]
async fn set_status_changes_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_landlord(db).await?;

    let repo = PropertyRepository::new(db);
    let updated = repo
        .set_status(property.id, PropertyStatus::Rejected)
        .await?
        .unwrap();

    assert_eq!(updated.status, PropertyStatus::Rejected);
    assert_eq!(repo.count(Some(PropertyStatus::Active)).await?, 0);
    assert_eq!(repo.count(None).await?, 1);

    Ok(())
}

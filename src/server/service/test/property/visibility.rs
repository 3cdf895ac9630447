use super::*;

/// Tests who can see a draft listing.
///
/// Expected: anonymous viewers and strangers get NotFound; the owner and admins
/// see it
#[tokio::test]
async fn drafts_are_visible_to_owner_and_admin_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let admin = factory::create_admin(db).await?;
    let draft = PropertyFactory::new(db, owner.id)
        .status(PropertyStatus::Draft)
        .build()
        .await?;
    let service = PropertyService::new(db);

    for viewer in [None, Some(Caller::from(&stranger))] {
        let result = service.get_visible(viewer, draft.id).await;
        assert!(matches!(
            result,
            Err(AppError::DomainErr(DomainError::NotFound { .. }))
        ));
    }

    assert_eq!(
        service
            .get_visible(Some(Caller::from(&owner)), draft.id)
            .await?
            .id,
        draft.id
    );
    let (detail, rating) = service
        .get_detail(Some(Caller::from(&admin)), draft.id)
        .await?;
    assert_eq!(detail.id, draft.id);
    assert_eq!(rating.count, 0);

    Ok(())
}

/// Tests a stranger editing a listing.
///
/// Expected: Err(AuthErr)
#[tokio::test]
async fn only_owner_or_admin_updates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let property = factory::create_property(db, owner.id).await?;

    let result = PropertyService::new(db)
        .update(
            Caller::from(&stranger),
            property.id,
            Default::default(),
        )
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));

    Ok(())
}

use super::*;

/// Tests running a saved city search.
///
/// Expected: only listings in the saved city are returned
#[tokio::test]
async fn runs_stored_filters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let landlord = factory::create_user(db).await?;
    let jeddah = PropertyFactory::new(db, landlord.id)
        .city("Jeddah", "جدة")
        .build()
        .await?;
    PropertyFactory::new(db, landlord.id).build().await?;
    let user = factory::create_user(db).await?;

    let service = SavedSearchService::new(db);
    let saved = service
        .create(CreateSavedSearchParams::from_dto(
            user.id,
            CreateSavedSearchDto {
                name: Some("Jeddah flats".to_string()),
                filters: PropertySearchDto {
                    city: Some("جدة".to_string()),
                    ..Default::default()
                },
                alert_enabled: true,
            },
        )?)
        .await?;

    let page = service.run(Caller::from(&user), saved.id).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, jeddah.id);

    Ok(())
}

/// Tests another user running or deleting someone's saved search.
///
/// Expected: Err(NotFound) for both
#[tokio::test]
async fn other_users_searches_look_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let service = SavedSearchService::new(db);
    let saved = service
        .create(CreateSavedSearchParams::from_dto(
            owner.id,
            CreateSavedSearchDto {
                name: None,
                filters: PropertySearchDto::default(),
                alert_enabled: false,
            },
        )?)
        .await?;

    let run = service.run(Caller::from(&other), saved.id).await;
    let delete = service.delete(Caller::from(&other), saved.id).await;

    assert!(matches!(
        run,
        Err(AppError::DomainErr(DomainError::NotFound { .. }))
    ));
    assert!(matches!(
        delete,
        Err(AppError::DomainErr(DomainError::NotFound { .. }))
    ));
    assert_eq!(service.list(owner.id).await?.len(), 1);

    Ok(())
}

/// Tests saving a search whose date range is reversed.
///
/// Expected: Err(InvalidDateRange) before anything is stored
#[test]
fn rejects_reversed_dates() {
    let now = Utc::now();
    let result = CreateSavedSearchParams::from_dto(
        1,
        CreateSavedSearchDto {
            name: None,
            filters: PropertySearchDto {
                available_from: Some(now + Duration::days(30)),
                available_to: Some(now),
                ..Default::default()
            },
            alert_enabled: false,
        },
    );

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::InvalidDateRange))
    ));
}

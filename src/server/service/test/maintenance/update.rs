use super::*;

/// Tests the landlord completing an in-progress request.
///
/// Expected: Ok with status Completed, resolved_at set and the tenant notified
#[tokio::test]
async fn landlord_completes_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (landlord, property) = create_property_with_landlord(db).await?;
    let tenant = factory::create_user(db).await?;
    let request = MaintenanceFactory::new(db, &property, tenant.id)
        .status(MaintenanceStatus::InProgress)
        .build()
        .await?;

    let updated = MaintenanceService::new(db)
        .update(
            Caller::from(&landlord),
            request.id,
            to_status(MaintenanceStatus::Completed),
        )
        .await?;

    assert_eq!(updated.status, MaintenanceStatus::Completed);
    assert!(updated.resolved_at.is_some());
    assert_eq!(
        NotificationRepository::new(db).unread_count(tenant.id).await?,
        1
    );

    Ok(())
}

/// Tests the tenant cancelling a submitted request.
///
/// Expected: Ok with status Cancelled
#[tokio::test]
async fn tenant_cancels_submitted_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = create_property_with_landlord(db).await?;
    let tenant = factory::create_user(db).await?;
    let request = MaintenanceFactory::new(db, &property, tenant.id)
        .build()
        .await?;

    let updated = MaintenanceService::new(db)
        .update(
            Caller::from(&tenant),
            request.id,
            to_status(MaintenanceStatus::Cancelled),
        )
        .await?;

    assert_eq!(updated.status, MaintenanceStatus::Cancelled);

    Ok(())
}

/// Tests the tenant cancelling once work has started.
///
/// Expected: Err(InvalidMaintenanceTransition)
#[tokio::test]
async fn tenant_cannot_cancel_in_progress_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = create_property_with_landlord(db).await?;
    let tenant = factory::create_user(db).await?;
    let request = MaintenanceFactory::new(db, &property, tenant.id)
        .status(MaintenanceStatus::InProgress)
        .build()
        .await?;

    let result = MaintenanceService::new(db)
        .update(
            Caller::from(&tenant),
            request.id,
            to_status(MaintenanceStatus::Cancelled),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::InvalidMaintenanceTransition { .. }))
    ));

    Ok(())
}

/// Tests the tenant writing a landlord response.
///
/// Expected: Err(AuthErr)
#[tokio::test]
async fn tenant_cannot_respond() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = create_property_with_landlord(db).await?;
    let tenant = factory::create_user(db).await?;
    let request = MaintenanceFactory::new(db, &property, tenant.id)
        .build()
        .await?;

    let result = MaintenanceService::new(db)
        .update(
            Caller::from(&tenant),
            request.id,
            UpdateMaintenanceParams {
                landlord_response: Some("Fixed it myself".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));

    Ok(())
}

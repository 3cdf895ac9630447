use super::*;

/// Tests the recipient marking their notification as read.
///
/// Expected: Ok and the unread count drops to zero
#[tokio::test]
async fn recipient_marks_read() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let notification =
        create_notification(db, user.id, NotificationKind::System, Utc::now()).await?;
    let service = NotificationService::new(db);

    service.mark_read(Caller::from(&user), notification.id).await?;

    assert_eq!(service.unread_count(user.id).await?, 0);

    Ok(())
}

/// Tests one user marking another user's notification as read.
///
/// Expected: Err(NotFound) and the owner's notification still unread
#[tokio::test]
async fn other_user_cannot_mark_read() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let notification =
        create_notification(db, owner.id, NotificationKind::System, Utc::now()).await?;
    let service = NotificationService::new(db);

    let result = service
        .mark_read(Caller::from(&intruder), notification.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::NotFound { id, .. })) if id == notification.id
    ));
    assert_eq!(service.unread_count(owner.id).await?, 1);

    Ok(())
}

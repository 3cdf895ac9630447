use super::*;

/// Tests listing notifications newest first and the unread count.
///
/// Expected: Ok with newest first and unread count 2
#[tokio::test]
async fn lists_newest_first_with_unread_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let now = Utc::now();
    let older = create_notification(db, user.id, NotificationKind::System, now - Duration::hours(1))
        .await?;
    let newer = create_notification(db, user.id, NotificationKind::MessageNew, now).await?;

    let repo = NotificationRepository::new(db);
    let listed = repo.list_by_user(user.id).await?;

    assert_eq!(listed[0].id, newer.id);
    assert_eq!(listed[1].id, older.id);
    assert_eq!(repo.unread_count(user.id).await?, 2);

    Ok(())
}

/// Tests marking one and then all notifications as read.
///
/// Expected: Ok with unread count 1 after the first call and 0 after the second
#[tokio::test]
async fn mark_read_and_mark_all_read() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let now = Utc::now();
    let first = create_notification(db, user.id, NotificationKind::System, now).await?;
    create_notification(db, user.id, NotificationKind::System, now).await?;
    create_notification(db, user.id, NotificationKind::System, now).await?;
    create_notification(db, other.id, NotificationKind::System, now).await?;

    let repo = NotificationRepository::new(db);
    assert!(repo.mark_read(first.id).await?);
    assert_eq!(repo.unread_count(user.id).await?, 2);

    assert_eq!(repo.mark_all_read(user.id).await?, 2);
    assert_eq!(repo.unread_count(user.id).await?, 0);
    assert_eq!(repo.unread_count(other.id).await?, 1);

    Ok(())
}

/// Tests detecting an existing notification for a related record.
///
/// Expected: Ok(false) before creation and Ok(true) after
#[tokio::test]
async fn exists_for_matches_kind_and_related_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    assert!(
        !repo
            .exists_for(user.id, NotificationKind::LeaseExpiring, RELATED_BOOKING, 9)
            .await?
    );

    repo.create(
        CreateNotificationParams::new(
            user.id,
            NotificationKind::LeaseExpiring,
            "Lease ending soon",
            "عقدك ينتهي قريباً",
        )
        .related(RELATED_BOOKING, 9),
    )
    .await?;

    assert!(
        repo.exists_for(user.id, NotificationKind::LeaseExpiring, RELATED_BOOKING, 9)
            .await?
    );
    assert!(
        !repo
            .exists_for(user.id, NotificationKind::LeaseExpiring, RELATED_BOOKING, 10)
            .await?
    );

    Ok(())
}

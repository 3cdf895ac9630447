use super::*;

/// Tests starting a conversation about a listing twice.
///
/// Expected: the landlord comes from the listing and the second call returns the
/// same conversation
#[tokio::test]
async fn starts_conversation_from_property_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (landlord, property) = create_property_with_landlord(db).await?;
    let tenant = factory::create_user(db).await?;
    let service = MessagingService::new(db);
    let dto = StartConversationDto {
        landlord_id: None,
        property_id: Some(property.id),
    };

    let first = service
        .start_conversation(Caller::from(&tenant), dto.clone())
        .await?;
    let second = service
        .start_conversation(Caller::from(&tenant), dto)
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(first.landlord_id, landlord.id);
    assert_eq!(first.tenant_id, tenant.id);

    Ok(())
}

/// Tests opening a conversation with yourself.
///
/// Expected: Err(Invalid("landlord_id"))
#[tokio::test]
async fn rejects_self_conversation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (landlord, property) = create_property_with_landlord(db).await?;

    let result = MessagingService::new(db)
        .start_conversation(
            Caller::from(&landlord),
            StartConversationDto {
                landlord_id: None,
                property_id: Some(property.id),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::Invalid("landlord_id")))
    ));

    Ok(())
}

/// Tests naming a landlord together with a listing owned by someone else.
///
/// Expected: Err(Invalid("property_id")) while the owner pairing succeeds
#[tokio::test]
async fn rejects_listing_of_another_landlord() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, property) = create_property_with_landlord(db).await?;
    let other_landlord = factory::create_user(db).await?;
    let tenant = factory::create_user(db).await?;
    let service = MessagingService::new(db);

    let result = service
        .start_conversation(
            Caller::from(&tenant),
            StartConversationDto {
                landlord_id: Some(other_landlord.id),
                property_id: Some(property.id),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::Invalid("property_id")))
    ));

    let conversation = service
        .start_conversation(
            Caller::from(&tenant),
            StartConversationDto {
                landlord_id: Some(owner.id),
                property_id: Some(property.id),
            },
        )
        .await?;
    assert_eq!(conversation.property_id, Some(property.id));

    Ok(())
}

/// Tests a message exchange and read tracking.
///
/// Expected: the landlord is notified, sees one unread message and after marking
/// the conversation read sees none
#[tokio::test]
async fn sends_and_reads_messages() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (landlord, property) = create_property_with_landlord(db).await?;
    let tenant = factory::create_user(db).await?;
    let service = MessagingService::new(db);
    let conversation = service
        .start_conversation(
            Caller::from(&tenant),
            StartConversationDto {
                landlord_id: Some(landlord.id),
                property_id: Some(property.id),
            },
        )
        .await?;

    service
        .send_message(Caller::from(&tenant), conversation.id, text("Is parking included?"))
        .await?;

    let notifications = NotificationRepository::new(db)
        .list_by_user(landlord.id)
        .await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::MessageNew);
    assert_eq!(
        notifications[0].content_en.as_deref(),
        Some("Is parking included?")
    );

    assert_eq!(service.unread_count(landlord.id).await?, 1);
    assert_eq!(service.unread_count(tenant.id).await?, 0);

    let changed = service
        .mark_read(Caller::from(&landlord), conversation.id)
        .await?;
    assert_eq!(changed, 1);
    assert_eq!(service.unread_count(landlord.id).await?, 0);

    Ok(())
}

/// Tests a non-participant sending into a conversation.
///
/// Expected: Err(AuthErr)
#[tokio::test]
async fn outsiders_cannot_send() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let landlord = factory::create_user(db).await?;
    let tenant = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let conversation =
        factory::conversation::create_conversation(db, tenant.id, landlord.id, None).await?;

    let result = MessagingService::new(db)
        .send_message(Caller::from(&stranger), conversation.id, text("hello"))
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));

    Ok(())
}

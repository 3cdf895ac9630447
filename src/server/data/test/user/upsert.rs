use super::*;

/// Tests creating a user on first sign-in.
///
/// Verifies that a new open id inserts a row with the default role and language.
///
/// Expected: Ok with role User and preferred_lang Ar
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            open_id: "gateway-1".to_string(),
            name: Some("Sara".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(user.open_id, "gateway-1");
    assert_eq!(user.name.as_deref(), Some("Sara"));
    assert_eq!(user.role, UserRole::User);
    assert_eq!(user.preferred_lang, PreferredLang::Ar);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests that signing in again never duplicates the user.
///
/// Verifies that the second upsert updates the same row and keeps the stored
/// name when none is supplied.
///
/// Expected: Ok with one row, original name and new email
#[tokio::test]
async fn keeps_existing_fields_when_not_provided() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo
        .upsert(UpsertUserParam {
            open_id: "gateway-2".to_string(),
            name: Some("Omar".to_string()),
            ..Default::default()
        })
        .await?;

    let second = repo
        .upsert(UpsertUserParam {
            open_id: "gateway-2".to_string(),
            email: Some("omar@example.com".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.name.as_deref(), Some("Omar"));
    assert_eq!(second.email.as_deref(), Some("omar@example.com"));
    assert!(second.last_signed_in >= first.last_signed_in);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests that an explicit role overwrites the stored one.
///
/// Expected: Ok with role Landlord
#[tokio::test]
async fn updates_role_when_provided() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .upsert(UpsertUserParam {
            open_id: existing.open_id.clone(),
            role: Some(UserRole::Landlord),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.role, UserRole::Landlord);
    assert_eq!(updated.name, existing.name);

    Ok(())
}

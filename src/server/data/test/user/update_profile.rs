use super::*;

/// Tests a partial profile update.
///
/// Verifies that only the supplied fields change.
///
/// Expected: Ok(Some) with new phone and language, original name kept
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            user.id,
            UpdateProfileParams {
                phone: Some("+966500000000".to_string()),
                preferred_lang: Some(PreferredLang::En),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.phone.as_deref(), Some("+966500000000"));
    assert_eq!(updated.preferred_lang, PreferredLang::En);
    assert_eq!(updated.name, user.name);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update_profile(999, UpdateProfileParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}

use super::*;

/// Tests that a request without the identity header is rejected.
///
/// Expected: Err(AuthError::MissingIdentity)
#[tokio::test]
async fn rejects_missing_identity_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingIdentity))
    ));

    Ok(())
}

/// Tests that an identity with no registered user is rejected.
///
/// Expected: Err(AuthError::UnknownUser)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let headers = headers_for("nobody");

    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UnknownUser(ref id))) if id == "nobody"
    ));

    Ok(())
}

/// Tests that any registered user passes when no permission is required.
///
/// Expected: Ok(User)
#[tokio::test]
async fn resolves_registered_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::UserFactory::new(db)
        .open_id("gateway-1")
        .build()
        .await?;
    let headers = headers_for("gateway-1");

    let resolved = AuthGuard::new(db, &headers).require(&[]).await?;

    assert_eq!(resolved.id, user.id);

    Ok(())
}

/// Tests that a plain user is denied admin access.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_permission_to_regular_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .open_id("gateway-2")
        .role(UserRole::Landlord)
        .build()
        .await?;
    let headers = headers_for("gateway-2");

    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that the landlord permission accepts landlords and admins but not tenants.
///
/// Expected: Ok for landlord and admin, Err(AccessDenied) for tenant
#[tokio::test]
async fn landlord_permission_accepts_landlords_and_admins() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    for (open_id, role) in [
        ("landlord", UserRole::Landlord),
        ("admin", UserRole::Admin),
        ("tenant", UserRole::Tenant),
    ] {
        factory::user::UserFactory::new(db)
            .open_id(open_id)
            .role(role)
            .build()
            .await?;
    }

    let landlord = headers_for("landlord");
    let admin = headers_for("admin");
    let tenant = headers_for("tenant");

    assert!(AuthGuard::new(db, &landlord)
        .require(&[Permission::Landlord])
        .await
        .is_ok());
    assert!(AuthGuard::new(db, &admin)
        .require(&[Permission::Landlord])
        .await
        .is_ok());
    assert!(matches!(
        AuthGuard::new(db, &tenant)
            .require(&[Permission::Landlord])
            .await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that the optional lookup tolerates anonymous callers.
///
/// Expected: Ok(None) without a header and Ok(Some) for a registered user
#[tokio::test]
async fn optional_user_allows_anonymous_callers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::create_user(db).await?;

    let anonymous = HeaderMap::new();
    let known = headers_for(&user.open_id);

    assert!(AuthGuard::new(db, &anonymous).optional_user().await?.is_none());
    assert_eq!(
        AuthGuard::new(db, &known).optional_user().await?.map(|u| u.id),
        Some(user.id)
    );

    Ok(())
}

use super::*;

/// Tests an admin listing a property for a plain user.
///
/// Expected: the listing belongs to that user, starts as Draft and the user is
/// promoted to Landlord
#[tokio::test]
async fn admin_creates_for_user_and_promotes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let owner = factory::create_user(db).await?;
    let caller = Caller::from(&admin);

    let params = CreatePropertyParams::from_dto(
        caller.owner_for(Some(owner.id)),
        listing(Some(owner.id)),
    )?;
    let property = PropertyService::new(db).create(caller, params).await?;

    assert_eq!(property.landlord_id, owner.id);
    assert_eq!(property.status, PropertyStatus::Draft);
    let promoted = UserRepository::new(db).find_by_id(owner.id).await?.unwrap();
    assert_eq!(promoted.role, UserRole::Landlord);

    Ok(())
}

/// Tests a landlord naming someone else as owner.
///
/// Expected: the requested owner is ignored and the caller owns the listing
#[tokio::test]
async fn non_admins_always_own_their_listings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let landlord = factory::user::UserFactory::new(db)
        .role(UserRole::Landlord)
        .build()
        .await?;
    let other = factory::create_user(db).await?;
    let caller = Caller::from(&landlord);

    let params = CreatePropertyParams::from_dto(
        caller.owner_for(Some(other.id)),
        listing(Some(other.id)),
    )?;
    let property = PropertyService::new(db).create(caller, params).await?;

    assert_eq!(property.landlord_id, landlord.id);

    Ok(())
}

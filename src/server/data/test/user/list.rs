use super::*;
use chrono::{Duration, Utc};

/// Tests listing users newest first with limit and offset.
///
/// Expected: Ok with the second-newest user on the second page of size one
#[tokio::test]
async fn pages_users_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let oldest = factory::user::UserFactory::new(db)
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let middle = factory::user::UserFactory::new(db)
        .created_at(now - Duration::days(1))
        .build()
        .await?;
    let newest = factory::user::UserFactory::new(db)
        .created_at(now)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let all = repo.list(10, 0).await?;
    let page = repo.list(1, 1).await?;

    let ids: Vec<i32> = all.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, middle.id);

    Ok(())
}

/// Tests loading registrations since a cutoff.
///
/// Expected: Ok with only the user created after the cutoff
#[tokio::test]
async fn registrations_since_filters_by_creation_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::user::UserFactory::new(db)
        .created_at(now - Duration::days(400))
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .role(UserRole::Landlord)
        .created_at(now - Duration::days(3))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let registrations = repo.registrations_since(now - Duration::days(30)).await?;

    assert_eq!(registrations.len(), 1);
    assert_eq!(registrations[0].1, UserRole::Landlord);

    Ok(())
}

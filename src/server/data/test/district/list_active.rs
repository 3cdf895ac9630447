use super::*;

/// Tests that inactive districts are hidden and the city filter applies.
///
/// Expected: Ok with the two active Riyadh districts, then one after deactivation
#[tokio::test]
async fn lists_active_districts_for_city() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::District)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let olaya = create_district(db, "Riyadh", "Al Olaya", true).await?;
    create_district(db, "Riyadh", "Al Malqa", true).await?;
    create_district(db, "Riyadh", "Old Town", false).await?;
    create_district(db, "Jeddah", "Al Rawdah", true).await?;

    let repo = DistrictRepository::new(db);
    assert_eq!(repo.list_active(Some("Riyadh")).await?.len(), 2);
    assert_eq!(repo.list_active(None).await?.len(), 3);

    repo.set_active(olaya.id, false).await?.unwrap();

    let names: Vec<String> = repo
        .list_active(Some("Riyadh"))
        .await?
        .into_iter()
        .map(|d| d.name_en)
        .collect();
    assert_eq!(names, vec!["Al Malqa".to_string()]);

    Ok(())
}

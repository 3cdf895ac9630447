use super::*;
use test_utils::factory::{
    availability::create_availability, booking::BookingFactory, property::PropertyFactory,
};

/// Tests that only active listings are searchable.
///
/// Expected: Ok with the active listing only and total 1
#[tokio::test]
async fn returns_only_active_listings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let landlord = factory::user::create_user(db).await?;
    let active = factory::create_property(db, landlord.id).await?;
    PropertyFactory::new(db, landlord.id)
        .status(PropertyStatus::Draft)
        .build()
        .await?;

    let repo = PropertyRepository::new(db);
    let page = repo.search(&filters()).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, active.id);

    Ok(())
}

/// Tests that city matches either the English or the Arabic name.
///
/// Expected: Ok with the Jeddah listing for both spellings
#[tokio::test]
async fn matches_city_in_either_language() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let landlord = factory::user::create_user(db).await?;
    factory::create_property(db, landlord.id).await?;
    let jeddah = PropertyFactory::new(db, landlord.id)
        .city("Jeddah", "جدة")
        .build()
        .await?;

    let repo = PropertyRepository::new(db);
    for city in ["Jeddah", "جدة"] {
        let page = repo
            .search(&SearchFilters {
                city: Some(city.to_string()),
                ..filters()
            })
            .await?;

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, jeddah.id);
    }

    Ok(())
}

/// Tests that district matches either the English or the Arabic name.
///
/// Expected: Ok with the Al Malqa listing for both spellings
#[tokio::test]
async fn matches_district_in_either_language() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let landlord = factory::user::create_user(db).await?;
    factory::create_property(db, landlord.id).await?;
    let malqa = PropertyFactory::new(db, landlord.id)
        .district("Al Malqa", "الملقا")
        .build()
        .await?;

    let repo = PropertyRepository::new(db);
    for district in ["Al Malqa", "الملقا"] {
        let page = repo
            .search(&SearchFilters {
                district: Some(district.to_string()),
                ..filters()
            })
            .await?;

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, malqa.id);
    }

    Ok(())
}

/// Tests filtering by furnishing level.
///
/// Expected: Ok with only the fully furnished listing
#[tokio::test]
async fn filters_by_furnished_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let landlord = factory::user::create_user(db).await?;
    factory::create_property(db, landlord.id).await?;
    PropertyFactory::new(db, landlord.id)
        .furnished_level(FurnishedLevel::SemiFurnished)
        .build()
        .await?;
    let furnished = PropertyFactory::new(db, landlord.id)
        .furnished_level(FurnishedLevel::FullyFurnished)
        .build()
        .await?;

    let page = PropertyRepository::new(db)
        .search(&SearchFilters {
            furnished_level: Some(FurnishedLevel::FullyFurnished),
            ..filters()
        })
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, furnished.id);

    Ok(())
}

/// Tests combining price bounds, minimum bedrooms and property type.
///
/// Verifies that filters are ANDed and price bounds are inclusive.
///
/// Expected: Ok with only the villa priced exactly at the upper bound
#[tokio::test]
async fn combines_numeric_and_type_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let landlord = factory::user::create_user(db).await?;
    let villa = PropertyFactory::new(db, landlord.id)
        .property_type(PropertyType::Villa)
        .bedrooms(4)
        .monthly_rent(900_000)
        .build()
        .await?;
    PropertyFactory::new(db, landlord.id)
        .property_type(PropertyType::Villa)
        .bedrooms(2)
        .monthly_rent(800_000)
        .build()
        .await?;
    PropertyFactory::new(db, landlord.id)
        .property_type(PropertyType::Apartment)
        .bedrooms(4)
        .monthly_rent(850_000)
        .build()
        .await?;

    let repo = PropertyRepository::new(db);
    let page = repo
        .search(&SearchFilters {
            property_type: Some(PropertyType::Villa),
            min_price: Some(500_000),
            max_price: Some(900_000),
            bedrooms: Some(3),
            ..filters()
        })
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, villa.id);

    Ok(())
}

/// Tests ordering: featured first, then newest, then highest id.
///
/// Expected: Ok with featured, newer, older order
#[tokio::test]
async fn orders_featured_then_newest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let landlord = factory::user::create_user(db).await?;
    let now = Utc::now();
    let featured = PropertyFactory::new(db, landlord.id)
        .featured(true)
        .created_at(now - Duration::days(10))
        .build()
        .await?;
    let older = PropertyFactory::new(db, landlord.id)
        .created_at(now - Duration::days(5))
        .build()
        .await?;
    let newer = PropertyFactory::new(db, landlord.id)
        .created_at(now)
        .build()
        .await?;

    let repo = PropertyRepository::new(db);
    let page = repo.search(&filters()).await?;

    let ids: Vec<i32> = page.items.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![featured.id, newer.id, older.id]);

    Ok(())
}

/// Tests that pagination does not affect the total.
///
/// Expected: Ok with two items on the page and total 3
#[tokio::test]
async fn total_ignores_pagination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let landlord = factory::user::create_user(db).await?;
    for _ in 0..3 {
        factory::create_property(db, landlord.id).await?;
    }

    let repo = PropertyRepository::new(db);
    let page = repo
        .search(&SearchFilters {
            limit: 2,
            offset: 1,
            ..filters()
        })
        .await?;

    assert_eq!(page.total, 3);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.limit, 2);
    assert_eq!(page.offset, 1);

    Ok(())
}

/// Tests that a blocked period overlapping the window excludes the listing.
///
/// Verifies that unblocked periods and non-overlapping blocks do not exclude.
///
/// Expected: Ok with only the listings whose blocks miss the window
#[tokio::test]
async fn excludes_listings_blocked_in_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let landlord = factory::user::create_user(db).await?;
    let blocked = factory::create_property(db, landlord.id).await?;
    let open_period = factory::create_property(db, landlord.id).await?;
    let blocked_later = factory::create_property(db, landlord.id).await?;

    let day = |d: u32| Utc.with_ymd_and_hms(2027, 3, d, 0, 0, 0).unwrap();
    create_availability(db, blocked.id, day(5), day(15), true).await?;
    create_availability(db, open_period.id, day(5), day(15), false).await?;
    // Starts exactly where the window ends, so no overlap.
    create_availability(db, blocked_later.id, day(20), day(25), true).await?;

    let repo = PropertyRepository::new(db);
    let page = repo
        .search(&SearchFilters {
            available_from: Some(day(10)),
            available_to: Some(day(20)),
            ..filters()
        })
        .await?;

    let mut ids: Vec<i32> = page.items.iter().map(|p| p.id).collect();
    ids.sort();
    assert_eq!(ids, vec![open_period.id, blocked_later.id]);
    assert_eq!(page.total, 2);

    Ok(())
}

/// Tests that approved and active bookings exclude a listing, pending ones do not.
///
/// Expected: Ok with only the listing whose overlapping booking is pending
#[tokio::test]
async fn excludes_listings_booked_in_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let landlord = factory::user::create_user(db).await?;
    let tenant = factory::user::create_user(db).await?;
    let approved = factory::create_property(db, landlord.id).await?;
    let active = factory::create_property(db, landlord.id).await?;
    let pending = factory::create_property(db, landlord.id).await?;

    let move_in = Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap();
    for (property, status) in [
        (&approved, BookingStatus::Approved),
        (&active, BookingStatus::Active),
        (&pending, BookingStatus::Pending),
    ] {
        BookingFactory::new(db, property, tenant.id)
            .status(status)
            .stay(move_in, 6)
            .build()
            .await?;
    }

    let repo = PropertyRepository::new(db);
    let page = repo
        .search(&SearchFilters {
            available_from: Some(Utc.with_ymd_and_hms(2027, 3, 1, 0, 0, 0).unwrap()),
            ..filters()
        })
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, pending.id);

    Ok(())
}

/// Tests an open-ended window that ends before a booking starts.
///
/// Expected: Ok with the booked listing still included
#[tokio::test]
async fn window_with_only_end_is_open_at_start() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let landlord = factory::user::create_user(db).await?;
    let tenant = factory::user::create_user(db).await?;
    let property = factory::create_property(db, landlord.id).await?;
    BookingFactory::new(db, &property, tenant.id)
        .status(BookingStatus::Active)
        .stay(Utc.with_ymd_and_hms(2027, 6, 1, 0, 0, 0).unwrap(), 3)
        .build()
        .await?;

    let repo = PropertyRepository::new(db);
    let before = repo
        .search(&SearchFilters {
            available_to: Some(Utc.with_ymd_and_hms(2027, 5, 1, 0, 0, 0).unwrap()),
            ..filters()
        })
        .await?;
    let during = repo
        .search(&SearchFilters {
            available_to: Some(Utc.with_ymd_and_hms(2027, 7, 1, 0, 0, 0).unwrap()),
            ..filters()
        })
        .await?;

    assert_eq!(before.total, 1);
    assert_eq!(during.total, 0);

    Ok(())
}

pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_property_table;
mod m20260301_000003_create_property_availability_table;
mod m20260301_000004_create_favorite_table;
mod m20260301_000005_create_booking_table;
mod m20260301_000006_create_payment_table;
mod m20260302_000007_create_conversation_table;
mod m20260302_000008_create_message_table;
mod m20260302_000009_create_maintenance_request_table;
mod m20260302_000010_create_review_table;
mod m20260302_000011_create_notification_table;
mod m20260302_000012_create_saved_search_table;
mod m20260303_000013_create_district_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_property_table::Migration),
            Box::new(m20260301_000003_create_property_availability_table::Migration),
            Box::new(m20260301_000004_create_favorite_table::Migration),
            Box::new(m20260301_000005_create_booking_table::Migration),
            Box::new(m20260301_000006_create_payment_table::Migration),
            Box::new(m20260302_000007_create_conversation_table::Migration),
            Box::new(m20260302_000008_create_message_table::Migration),
            Box::new(m20260302_000009_create_maintenance_request_table::Migration),
            Box::new(m20260302_000010_create_review_table::Migration),
            Box::new(m20260302_000011_create_notification_table::Migration),
            Box::new(m20260302_000012_create_saved_search_table::Migration),
            Box::new(m20260303_000013_create_district_table::Migration),
        ]
    }
}

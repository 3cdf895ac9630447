use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` (or one of the table-set shortcuts), then
/// call `build()` to get a `TestContext` backed by an in-memory SQLite database.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Property};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Property)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the entity using SQLite syntax. The
    /// table is created when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed for listing and booking flows.
    ///
    /// Includes users, properties, availability windows, favorites, bookings,
    /// payments and notifications.
    pub fn with_booking_tables(self) -> Self {
        self.with_table(User)
            .with_table(Property)
            .with_table(PropertyAvailability)
            .with_table(Favorite)
            .with_table(Booking)
            .with_table(Payment)
            .with_table(Notification)
    }

    /// Adds every marketplace table.
    ///
    /// Use this for service, controller and router tests that touch several domains.
    pub fn with_marketplace_tables(self) -> Self {
        self.with_booking_tables()
            .with_table(Conversation)
            .with_table(Message)
            .with_table(MaintenanceRequest)
            .with_table(Review)
            .with_table(SavedSearch)
            .with_table(District)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

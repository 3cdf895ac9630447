//! Monthly Key Test Utils
//!
//! Shared testing utilities for the marketplace backend. Tests build an isolated
//! in-memory SQLite database whose tables are generated straight from the entity
//! models, then seed it with factories.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with builder-style overrides
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn books_a_property() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_marketplace_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (landlord, property) = factory::helpers::create_property_with_landlord(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

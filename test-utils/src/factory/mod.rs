//! Factory methods for creating test data.
//!
//! Each entity has a factory module with either a `*Factory` builder for
//! customization or a `create_*` convenience function, or both. Foreign keys are
//! plain integers, so callers create parents first and pass their ids in.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let tenant = factory::user::create_user(&db).await?;
//! let (landlord, property) = factory::helpers::create_property_with_landlord(&db).await?;
//! let booking = factory::booking::BookingFactory::new(&db, &property, tenant.id)
//!     .status(BookingStatus::Active)
//!     .build()
//!     .await?;
//! ```

pub mod availability;
pub mod booking;
pub mod conversation;
pub mod district;
pub mod helpers;
pub mod maintenance;
pub mod notification;
pub mod payment;
pub mod property;
pub mod review;
pub mod user;

pub use booking::create_booking;
pub use property::create_property;
pub use user::{create_admin, create_user};

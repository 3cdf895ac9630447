//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce
//! ownership and role rules through `Caller`, apply state machine transitions,
//! coordinate several repositories where an operation spans domains, and raise
//! notifications as a side effect of booking, payment, messaging and maintenance
//! changes. Services return entity models; controllers convert them to DTOs.

pub mod admin;
pub mod availability;
pub mod booking;
pub mod district;
pub mod favorite;
pub mod maintenance;
pub mod messaging;
pub mod notification;
pub mod payment;
pub mod property;
pub mod review;
pub mod saved_search;
pub mod user;

//! HTTP request handlers.
//!
//! Each module groups the endpoints of one domain under its OpenAPI tag. Handlers
//! resolve the caller through `AuthGuard`, convert request DTOs into parameter
//! types, call a service and map the returned entity models back to DTOs.

pub mod admin;
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

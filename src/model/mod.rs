//! Request and response DTOs shared by the HTTP API.
//!
//! Every type here derives `ToSchema` (or `IntoParams` for query strings) so it
//! appears in the generated OpenAPI document. Amounts are integers in halalas.

pub mod admin;
pub mod api;
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

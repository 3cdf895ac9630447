//! Server-side domain models and parameter types.
//!
//! Parameter structs carry validated input from controllers into services and
//! repositories. Entity models are converted to DTOs here, at the boundary between
//! the service layer and the API.

pub mod analytics;
pub mod availability;
pub mod booking;
pub mod district;
pub mod maintenance;
pub mod messaging;
pub mod notification;
pub mod payment;
pub mod property;
pub mod review;
pub mod saved_search;
pub mod user;

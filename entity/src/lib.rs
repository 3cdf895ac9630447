//! SeaORM entity models for the rental marketplace schema.
//!
//! Foreign keys are plain integer columns; relationships are enforced by the
//! service layer, so the entities declare no relations.

pub mod prelude;

pub mod booking;
pub mod conversation;
pub mod district;
pub mod favorite;
pub mod maintenance_request;
pub mod message;
pub mod notification;
pub mod payment;
pub mod property;
pub mod property_availability;
pub mod review;
pub mod saved_search;
pub mod sea_orm_active_enums;
pub mod user;

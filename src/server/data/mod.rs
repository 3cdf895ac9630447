//! Database repository layer for all domain entities.
//!
//! Each repository wraps a borrowed `DatabaseConnection` and exposes the queries
//! one table needs. Repositories return SeaORM entity models or `DbErr`; mapping to
//! DTOs and business rule checks happen in the service layer.

pub mod availability;
pub mod booking;
pub mod conversation;
pub mod district;
pub mod favorite;
pub mod maintenance;
pub mod notification;
pub mod payment;
pub mod property;
pub mod review;
pub mod saved_search;
pub mod user;

#[cfg(test)]
mod test;

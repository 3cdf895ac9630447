//! Small helpers shared by services and controllers.

pub mod json;
pub mod pagination;
pub mod sanitize;

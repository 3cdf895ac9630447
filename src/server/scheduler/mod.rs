//! Background cron jobs.
//!
//! Jobs run on `tokio-cron-scheduler` in their own task, independent of request
//! handling.

pub mod lease_reminders;

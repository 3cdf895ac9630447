use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_LEASE_REMINDER_DAYS: i64 = 14;
const DEFAULT_LEASE_REMINDER_CRON: &str = "0 0 6 * * *";
const DEFAULT_RATE_LIMIT_PER_SECOND: u64 = 10;
const DEFAULT_RATE_LIMIT_BURST: u32 = 50;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Allowed CORS origin; any origin when unset.
    pub cors_origin: Option<String>,

    /// Bookings ending within this many days get a lease expiry reminder.
    pub lease_reminder_days: i64,
    pub lease_reminder_cron: String,

    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            cors_origin: std::env::var("CORS_ORIGIN").ok().filter(|o| !o.is_empty()),
            lease_reminder_days: parse_or("LEASE_REMINDER_DAYS", DEFAULT_LEASE_REMINDER_DAYS)?,
            lease_reminder_cron: std::env::var("LEASE_REMINDER_CRON")
                .unwrap_or_else(|_| DEFAULT_LEASE_REMINDER_CRON.to_string()),
            rate_limit_per_second: parse_or(
                "RATE_LIMIT_PER_SECOND",
                DEFAULT_RATE_LIMIT_PER_SECOND,
            )?,
            rate_limit_burst: parse_or("RATE_LIMIT_BURST", DEFAULT_RATE_LIMIT_BURST)?,
        })
    }
}

/// Reads and parses an optional environment variable, falling back to `default` when unset.
fn parse_or<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
                reason: e.to_string(),
            }),
        Err(_) => Ok(default),
    }
}

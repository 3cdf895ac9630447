use thiserror::Error;

/// Internal issues indicating unexpected data or possible bugs.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A JSON column holds a value that does not decode into the expected shape.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to decode JSON column '{column}': {source}")]
    MalformedJson {
        /// The table and column that held the value
        column: &'static str,
        /// The underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// The rate limiter configuration was rejected by the governor builder.
    #[error("Invalid rate limit configuration: {0} per second, burst {1}")]
    InvalidRateLimit(u64, u32),
}

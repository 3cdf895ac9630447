//! Limit and offset normalisation for list queries.

pub const DEFAULT_LIMIT: u64 = 20;
pub const MAX_LIMIT: u64 = 100;
pub const MAX_OFFSET: u64 = 100_000;

/// Caps a requested page size.
///
/// Missing or non-positive values take `DEFAULT_LIMIT`; anything above `MAX_LIMIT`
/// is clamped.
pub fn cap_limit(limit: Option<i64>) -> u64 {
    match limit {
        Some(limit) if limit >= 1 => (limit as u64).min(MAX_LIMIT),
        _ => DEFAULT_LIMIT,
    }
}

/// Caps a requested offset to `0..=MAX_OFFSET`.
pub fn cap_offset(offset: Option<i64>) -> u64 {
    match offset {
        Some(offset) if offset > 0 => (offset as u64).min(MAX_OFFSET),
        _ => 0,
    }
}

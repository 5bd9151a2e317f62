//! Wall-clock helpers.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall time as unix milliseconds.
#[must_use]
pub fn now_unix_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

// Timing helpers used to stamp log lines
//
// Austin Shafer - 2020
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the unix epoch.
///
/// Returns 0 if the system clock is set before the epoch, log
/// lines are the only consumer and they should never fail.
pub fn get_current_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

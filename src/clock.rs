//! Wall-clock timestamps for metric samples
//!
//! Samples carry Unix timestamps (fractional seconds) rather than `Instant`s
//! because snapshots cross the process boundary to dashboards and monitors
//! that need absolute times.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current Unix time in fractional seconds
///
/// Returns 0.0 if the system clock reads before the epoch, which only
/// happens on badly misconfigured hosts; metrics degrade gracefully
/// rather than panicking in that case.
#[must_use]
pub fn unix_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

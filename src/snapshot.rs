//! Component snapshot type and derived-ratio helpers
//!
//! An immutable composite view of one component's metrics, assembled by
//! [`ComponentMetrics::snapshot`](crate::registry::ComponentMetrics::snapshot)
//! and handed as-is to reporting threads and dashboards.
//!
//! # Consistency
//! A snapshot is *not* globally atomic. Each metric is read under its own
//! guard, so concurrent writers can leave a snapshot reflecting a mix of
//! before and after states across different metric names. That is by
//! contract: per-name reads are exact, the composite is best-effort.

use serde::Serialize;
use std::collections::BTreeMap;

/// Point-in-time-ish view of one component's metrics
///
/// Sets appear as their sizes and series as their sample counts; full
/// contents are available through the owning registry when needed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComponentSnapshot {
    pub component: String,
    /// Unix seconds of the last write to any metric in the registry
    pub last_update: f64,
    pub counters: BTreeMap<String, i64>,
    pub gauges: BTreeMap<String, f64>,
    pub sets: BTreeMap<String, usize>,
    pub recent_series: BTreeMap<String, usize>,
}

impl ComponentSnapshot {
    /// Counter value by name, 0 when the name was never written
    #[must_use]
    pub fn counter(&self, name: &str) -> i64 {
        self.counters.get(name).copied().unwrap_or(0)
    }

    /// Gauge value by name, 0.0 when the name was never written
    #[must_use]
    pub fn gauge(&self, name: &str) -> f64 {
        self.gauges.get(name).copied().unwrap_or(0.0)
    }

    /// Total across all counters
    ///
    /// Pure calculation, no side effects.
    #[must_use]
    pub fn counter_total(&self) -> i64 {
        self.counters.values().sum()
    }
}

/// Success-style ratio of two counters, 0.0 when the denominator is not positive
///
/// Derived ratios are recomputed from raw counters at read time and never
/// stored; this helper is the single division-by-zero guard for all of them.
#[must_use]
pub fn ratio(numerator: i64, denominator: i64) -> f64 {
    if denominator > 0 {
        numerator as f64 / denominator as f64
    } else {
        0.0
    }
}

//! Thread-safe metrics aggregation core for mesh networking components
//!
//! Process-local statistics collection shared by the mesh router and the
//! topology engine: counters, gauges, unique-item sets, and bounded
//! recent-value series, all keyed by metric name and safe to mutate from
//! many threads at once while a reporting thread reads snapshots.
//!
//! Data flows one direction: producer threads record through a facade
//! ([`RouterStats`], [`TopologyStats`]) into that component's
//! [`ComponentMetrics`] registry; a reporting thread snapshots one registry
//! or every registry via the [`MetricsHub`] and hands the result to
//! consumers as plain serializable maps.
//!
//! Locking is per-metric-name (concurrent maps plus per-value atomics), so
//! two different metric names never contend beyond a brief map-shard guard.
//! Snapshots are best-effort composites, not frozen views; see the
//! [`snapshot`] module for the exact guarantee.

pub mod atomic;
pub mod clock;
pub mod constants;
pub mod hub;
pub mod registry;
pub mod series;
pub mod set;
pub mod snapshot;
pub mod stats;
pub mod value;

pub use atomic::{AtomicCounter, AtomicGauge};
pub use hub::MetricsHub;
pub use registry::ComponentMetrics;
pub use series::{RecentSeries, TimedValue};
pub use set::UniqueSet;
pub use snapshot::ComponentSnapshot;
pub use stats::{RouterStats, RouterStatsReport, TopologyStats, TopologyStatsReport};
pub use value::MetricValue;

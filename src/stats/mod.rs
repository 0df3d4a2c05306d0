//! Named-metric facades for mesh subsystems
//!
//! Each facade layers a closed metric-name catalog (see
//! [`constants`](crate::constants)) and a handful of derived read-time
//! ratios on top of one generic [`ComponentMetrics`] registry. Derived
//! values are never stored; they are recomputed from the raw counters and
//! series on every read.

mod router;
mod topology;

pub use router::{RouterStats, RouterStatsReport};
pub use topology::{TopologyStats, TopologyStatsReport};

//! Mesh topology engine telemetry facade
//!
//! Path computation, path-cache effectiveness, and failover events for one
//! node's topology engine. Catalog fixed in
//! [`constants::topology`](crate::constants::topology).

use crate::constants::topology::*;
use crate::registry::ComponentMetrics;
use crate::snapshot::{ComponentSnapshot, ratio};
use serde::Serialize;

/// Telemetry recorder for one node's topology engine
#[derive(Debug, Clone)]
pub struct TopologyStats {
    node_id: String,
    metrics: ComponentMetrics,
}

/// Topology snapshot plus derived cache effectiveness
#[derive(Debug, Clone, Serialize)]
pub struct TopologyStatsReport {
    #[serde(flatten)]
    pub snapshot: ComponentSnapshot,
    /// hits / (hits + misses), 0.0 with no lookups
    pub cache_hit_rate: f64,
}

impl TopologyStats {
    #[must_use]
    pub fn new(node_id: impl Into<String>) -> Self {
        let node_id = node_id.into();
        let metrics = ComponentMetrics::new(format!("mesh_topology.{node_id}"));
        Self { node_id, metrics }
    }

    #[must_use]
    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    /// Underlying registry handle, e.g. for hub registration
    #[must_use]
    pub fn metrics(&self) -> &ComponentMetrics {
        &self.metrics
    }

    /// Record that a path had to be computed
    ///
    /// Also counts a cache miss: a miss is defined as "we had to compute a
    /// path", so the two counters move together 1:1. Downstream hit-rate
    /// consumers depend on this coupling; do not split the two events.
    pub fn record_path_computation(&self) {
        self.metrics.increment_counter(PATH_COMPUTATIONS);
        self.metrics.increment_counter(CACHE_MISSES);
    }

    /// Record a path served from cache
    pub fn record_cache_hit(&self) {
        self.metrics.increment_counter(CACHE_HITS);
    }

    /// Record a failover to an alternate path
    pub fn record_failover(&self) {
        self.metrics.increment_counter(FAILOVER_EVENTS);
    }

    /// Update node/link gauges from the latest topology scan
    pub fn update_topology_counts(&self, nodes: usize, links: usize) {
        self.metrics.set_gauge(TOTAL_NODES, nodes as f64);
        self.metrics.set_gauge(TOTAL_LINKS, links as f64);
    }

    /// Update the path-cache size gauge
    pub fn update_cache_size(&self, size: usize) {
        self.metrics.set_gauge(CACHE_SIZE, size as f64);
    }

    /// Snapshot with derived cache hit rate
    #[must_use]
    pub fn stats(&self) -> TopologyStatsReport {
        let snapshot = self.metrics.snapshot();
        let hits = snapshot.counter(CACHE_HITS);
        let misses = snapshot.counter(CACHE_MISSES);

        TopologyStatsReport {
            snapshot,
            cache_hit_rate: ratio(hits, hits + misses),
        }
    }
}

//! Mesh router telemetry facade
//!
//! Connection outcomes, packet flow, peer liveness, and per-peer latency
//! samples for one router node. The catalog of names this facade writes is
//! fixed in [`constants::router`](crate::constants::router).

use crate::constants::router::*;
use crate::constants::series::LATENCY_WINDOW;
use crate::registry::ComponentMetrics;
use crate::snapshot::{ComponentSnapshot, ratio};
use serde::Serialize;

/// Telemetry recorder for one mesh router node
#[derive(Debug, Clone)]
pub struct RouterStats {
    node_id: String,
    metrics: ComponentMetrics,
}

/// Router snapshot plus derived ratios, recomputed on every read
#[derive(Debug, Clone, Serialize)]
pub struct RouterStatsReport {
    #[serde(flatten)]
    pub snapshot: ComponentSnapshot,
    /// established / (established + failed), 0.0 with no attempts
    pub success_rate: f64,
    /// Over the most recent latency window, 0.0 with no samples
    pub avg_latency: f64,
    pub min_latency: f64,
    pub max_latency: f64,
}

impl RouterStats {
    #[must_use]
    pub fn new(node_id: impl Into<String>) -> Self {
        let node_id = node_id.into();
        let metrics = ComponentMetrics::new(format!("mesh_router.{node_id}"));
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

    pub fn record_connection_established(&self) {
        self.metrics.increment_counter(CONNECTIONS_ESTABLISHED);
    }

    pub fn record_connection_failed(&self) {
        self.metrics.increment_counter(CONNECTIONS_FAILED);
    }

    pub fn record_packet_routed(&self) {
        self.metrics.increment_counter(PACKETS_ROUTED);
    }

    pub fn record_packet_dropped(&self) {
        self.metrics.increment_counter(PACKETS_DROPPED);
    }

    /// Update peer liveness gauges from the latest peer table scan
    pub fn update_peer_count(&self, total: usize, alive: usize) {
        self.metrics.set_gauge(TOTAL_PEERS, total as f64);
        self.metrics.set_gauge(ALIVE_PEERS, alive as f64);
    }

    /// Update the cached-route gauge
    pub fn update_route_cache(&self, routes: usize) {
        self.metrics.set_gauge(ROUTES_CACHED, routes as f64);
    }

    /// Record one latency measurement for a peer
    pub fn update_peer_latency(&self, peer_id: &str, latency_ms: f64) {
        self.metrics.add_recent(PEER_LATENCIES, (peer_id, latency_ms));
    }

    /// Snapshot with derived connection and latency statistics
    #[must_use]
    pub fn stats(&self) -> RouterStatsReport {
        let snapshot = self.metrics.snapshot();
        let established = snapshot.counter(CONNECTIONS_ESTABLISHED);
        let failed = snapshot.counter(CONNECTIONS_FAILED);

        let latencies: Vec<f64> = self
            .metrics
            .get_recent(PEER_LATENCIES, Some(LATENCY_WINDOW))
            .iter()
            .filter_map(|(_, value)| value.as_f64())
            .collect();

        let (avg_latency, min_latency, max_latency) = if latencies.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            let sum: f64 = latencies.iter().sum();
            let min = latencies.iter().copied().fold(f64::INFINITY, f64::min);
            let max = latencies.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            (sum / latencies.len() as f64, min, max)
        };

        RouterStatsReport {
            snapshot,
            success_rate: ratio(established, established + failed),
            avg_latency,
            min_latency,
            max_latency,
        }
    }
}

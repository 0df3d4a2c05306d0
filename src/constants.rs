//! Constants used throughout the metrics core
//!
//! This module centralizes magic numbers and the facade metric-name catalogs
//! so producers and consumers agree on names without string duplication.

/// Bounded series configuration
pub mod series {
    /// Capacity of every recent-value ring buffer (entries, not bytes)
    ///
    /// Once a series is full the oldest entry is silently evicted on append.
    /// 1000 samples keeps per-series memory bounded while holding enough
    /// history for rolling statistics at typical mesh event rates.
    pub const CAPACITY: usize = 1000;

    /// Number of most-recent latency samples used for derived latency stats
    ///
    /// Rolling avg/min/max are computed over this window, not the full
    /// buffer, so stale samples age out of the derived values quickly.
    pub const LATENCY_WINDOW: usize = 100;
}

/// Metric-name catalog for the mesh router facade
///
/// Closed set: the router facade only ever writes these names. External
/// consumers (feature-vector builders, dashboards) parse them verbatim,
/// so renaming any of these is a breaking change.
pub mod router {
    // Counters
    pub const CONNECTIONS_ESTABLISHED: &str = "connections_established";
    pub const CONNECTIONS_FAILED: &str = "connections_failed";
    pub const PACKETS_ROUTED: &str = "packets_routed";
    pub const PACKETS_DROPPED: &str = "packets_dropped";

    // Gauges
    pub const TOTAL_PEERS: &str = "total_peers";
    pub const ALIVE_PEERS: &str = "alive_peers";
    pub const ROUTES_CACHED: &str = "routes_cached";

    // Series
    pub const PEER_LATENCIES: &str = "peer_latencies";
}

/// Metric-name catalog for the mesh topology facade
pub mod topology {
    // Counters
    pub const PATH_COMPUTATIONS: &str = "path_computations";
    pub const CACHE_HITS: &str = "cache_hits";
    pub const CACHE_MISSES: &str = "cache_misses";
    pub const FAILOVER_EVENTS: &str = "failover_events";

    // Gauges
    pub const TOTAL_NODES: &str = "total_nodes";
    pub const TOTAL_LINKS: &str = "total_links";
    pub const CACHE_SIZE: &str = "cache_size";
}

//! Hub discovery and snapshot serialization tests
//!
//! A reporting thread discovers every component through the hub, snapshots
//! them all, and serializes the result for the metrics endpoint. These tests
//! pin the discovery semantics and the JSON shape consumers parse.

use mesh_metrics::{ComponentMetrics, MetricsHub, RouterStats};

#[test]
fn test_hub_round_trip() {
    let hub = MetricsHub::new();
    let metrics = ComponentMetrics::new("test_component");
    hub.register("test_id", metrics);

    let retrieved = hub.get("test_id").expect("registered component");
    assert_eq!(retrieved.component(), "test_component");
}

#[test]
fn test_hub_absent_component_is_none() {
    let hub = MetricsHub::new();
    assert!(hub.get("nonexistent_id").is_none());
}

#[test]
fn test_all_snapshots_covers_every_component() {
    let hub = MetricsHub::new();

    let component1 = ComponentMetrics::new("component1");
    component1.increment_counter_by("requests", 3);
    hub.register("id1", component1);

    let component2 = ComponentMetrics::new("component2");
    component2.set_gauge("load", 0.5);
    hub.register("id2", component2);

    let all = hub.all_snapshots();
    assert_eq!(all.len(), 2);
    assert_eq!(all["id1"].component, "component1");
    assert_eq!(all["id1"].counter("requests"), 3);
    assert_eq!(all["id2"].component, "component2");
    assert_eq!(all["id2"].gauge("load"), 0.5);
}

#[test]
fn test_reregistration_is_last_register_wins() {
    let hub = MetricsHub::new();
    hub.register("node", ComponentMetrics::new("old"));
    hub.register("node", ComponentMetrics::new("new"));

    let all = hub.all_snapshots();
    assert_eq!(all.len(), 1);
    assert_eq!(all["node"].component, "new");
}

#[test]
fn test_snapshot_serializes_to_expected_json_shape() {
    let metrics = ComponentMetrics::new("mesh_router.node-A");
    metrics.increment_counter_by("packets_routed", 7);
    metrics.set_gauge("alive_peers", 3.0);
    metrics.add_to_set("seen_peers", "peer1");
    metrics.add_recent("events", 1.0);

    let json = serde_json::to_value(metrics.snapshot()).expect("snapshot serializes");

    assert_eq!(json["component"], "mesh_router.node-A");
    assert_eq!(json["counters"]["packets_routed"], 7);
    assert_eq!(json["gauges"]["alive_peers"], 3.0);
    // Sets serialize as sizes and series as sample counts
    assert_eq!(json["sets"]["seen_peers"], 1);
    assert_eq!(json["recent_series"]["events"], 1);
    assert!(json["last_update"].as_f64().expect("last_update is a number") > 0.0);
}

#[test]
fn test_router_report_serializes_with_derived_ratios() {
    let router = RouterStats::new("node-A");
    router.record_connection_established();
    router.record_connection_failed();

    let json = serde_json::to_value(router.stats()).expect("report serializes");

    // Snapshot fields are flattened alongside the derived ratios
    assert_eq!(json["component"], "mesh_router.node-A");
    assert_eq!(json["counters"]["connections_established"], 1);
    assert_eq!(json["success_rate"], 0.5);
    assert_eq!(json["avg_latency"], 0.0);
}

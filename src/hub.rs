//! Process-wide component registry
//!
//! A single hub maps component identifiers to their metrics registries so a
//! reporting thread can discover and snapshot every component. The hub is an
//! explicit constructed object handed to components at startup, not a hidden
//! module-level singleton; sharing happens through cheap clones.

use crate::registry::ComponentMetrics;
use crate::snapshot::ComponentSnapshot;
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Registry of every component's [`ComponentMetrics`]
///
/// Registration happens once per component at startup and entries live for
/// the process lifetime; there is no removal operation. Re-registering an
/// identifier silently replaces the prior entry (last-register-wins), so
/// callers own the uniqueness of their identifiers.
#[derive(Debug, Clone, Default)]
pub struct MetricsHub {
    components: Arc<DashMap<String, ComponentMetrics>>,
}

impl MetricsHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component's metrics under a stable identifier
    pub fn register(&self, component_id: impl Into<String>, metrics: ComponentMetrics) {
        let component_id = component_id.into();
        debug!(
            component_id = %component_id,
            component = %metrics.component(),
            "registered component metrics"
        );
        if self.components.insert(component_id, metrics).is_some() {
            debug!("replaced previously registered component metrics");
        }
    }

    /// Handle to a registered component's metrics, `None` when unknown
    #[must_use]
    pub fn get(&self, component_id: &str) -> Option<ComponentMetrics> {
        self.components
            .get(component_id)
            .map(|entry| entry.value().clone())
    }

    /// Number of registered components
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Snapshot every registered component
    ///
    /// Handles are collected first and each snapshot is taken outside any
    /// hub-wide critical section, so different components' snapshots may be
    /// taken at visibly different instants. Cost is O(components x metrics
    /// per component).
    #[must_use]
    pub fn all_snapshots(&self) -> BTreeMap<String, ComponentSnapshot> {
        let handles: Vec<(String, ComponentMetrics)> = self
            .components
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();

        handles
            .into_iter()
            .map(|(component_id, metrics)| (component_id, metrics.snapshot()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let hub = MetricsHub::new();
        hub.register("router", ComponentMetrics::new("mesh_router"));

        let metrics = hub.get("router").expect("registered component");
        assert_eq!(metrics.component(), "mesh_router");
    }

    #[test]
    fn test_get_unknown_is_none() {
        let hub = MetricsHub::new();
        assert!(hub.get("nonexistent").is_none());
    }

    #[test]
    fn test_last_register_wins() {
        let hub = MetricsHub::new();
        hub.register("node", ComponentMetrics::new("first"));
        hub.register("node", ComponentMetrics::new("second"));

        assert_eq!(hub.len(), 1);
        assert_eq!(hub.get("node").unwrap().component(), "second");
    }

    #[test]
    fn test_handles_share_state() {
        let hub = MetricsHub::new();
        hub.register("router", ComponentMetrics::new("mesh_router"));

        hub.get("router").unwrap().increment_counter("packets");
        assert_eq!(hub.get("router").unwrap().get_counter("packets"), 1);
    }

    #[test]
    fn test_all_snapshots() {
        let hub = MetricsHub::new();

        let router = ComponentMetrics::new("component1");
        router.increment_counter("c");
        hub.register("id1", router);
        hub.register("id2", ComponentMetrics::new("component2"));

        let all = hub.all_snapshots();
        assert_eq!(all.len(), 2);
        assert_eq!(all["id1"].component, "component1");
        assert_eq!(all["id1"].counter("c"), 1);
        assert_eq!(all["id2"].component, "component2");
    }
}

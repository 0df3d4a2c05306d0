//! Per-component metrics registry
//!
//! One [`ComponentMetrics`] instance per owning component (router, topology
//! engine), created at component startup and alive for the process lifetime.
//! Producers write through cheap clones of the handle; a reporting thread
//! reads composite snapshots.
//!
//! # Lazy creation
//! Metric names come into existence on first write. Creation goes through
//! `DashMap::entry`, whose insert-or-fetch is atomic: two threads racing to
//! create the same new name always converge on a single value, so no
//! increment can be lost to a duplicate-construction race. This is the load-
//! bearing invariant of the whole subsystem.
//!
//! # Granularity
//! The four collections (counters, gauges, sets, series) are independent
//! maps, and within each map entries are guarded per-name. Operations on
//! different metric names never serialize against each other beyond the
//! map's brief shard guard; operations on the same name are strictly
//! serialized.

use crate::atomic::{AtomicCounter, AtomicGauge};
use crate::clock::unix_now;
use crate::series::{RecentSeries, TimedValue};
use crate::set::UniqueSet;
use crate::snapshot::ComponentSnapshot;
use crate::value::MetricValue;
use dashmap::DashMap;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
struct RegistryInner {
    component: String,
    counters: DashMap<String, AtomicCounter>,
    gauges: DashMap<String, AtomicGauge>,
    sets: DashMap<String, UniqueSet>,
    series: DashMap<String, RecentSeries>,
    /// Unix seconds of the most recent write to any metric
    last_update: AtomicGauge,
}

/// Thread-safe registry of named metrics for one component
///
/// Cloning is cheap (shared `Arc` inner); all methods take `&self` and are
/// safe to call concurrently from any thread. No method performs I/O or
/// blocks beyond brief in-memory guard acquisition.
#[derive(Debug, Clone)]
pub struct ComponentMetrics {
    inner: Arc<RegistryInner>,
}

impl ComponentMetrics {
    #[must_use]
    pub fn new(component: impl Into<String>) -> Self {
        let component = component.into();
        debug!(component = %component, "created metrics registry");
        Self {
            inner: Arc::new(RegistryInner {
                component,
                counters: DashMap::new(),
                gauges: DashMap::new(),
                sets: DashMap::new(),
                series: DashMap::new(),
                last_update: AtomicGauge::new(unix_now()),
            }),
        }
    }

    /// Name of the owning component
    #[must_use]
    pub fn component(&self) -> &str {
        &self.inner.component
    }

    /// Unix seconds of the most recent write
    #[must_use]
    pub fn last_update(&self) -> f64 {
        self.inner.last_update.get()
    }

    fn touch(&self) {
        self.inner.last_update.set(unix_now());
    }

    // ------------------------------------------------------------------
    // Counters
    // ------------------------------------------------------------------

    /// Increment the named counter by one, creating it at zero first if needed
    ///
    /// Returns the new value.
    pub fn increment_counter(&self, name: &str) -> i64 {
        self.increment_counter_by(name, 1)
    }

    /// Increment the named counter by a delta, returning the new value
    ///
    /// Deltas are stored as given; sign conventions belong to the facades.
    pub fn increment_counter_by(&self, name: &str, delta: i64) -> i64 {
        let new = self
            .inner
            .counters
            .entry(name.to_string())
            .or_default()
            .add(delta);
        self.touch();
        new
    }

    /// Current value of the named counter, 0 when never written
    #[must_use]
    pub fn get_counter(&self, name: &str) -> i64 {
        self.inner
            .counters
            .get(name)
            .map(|counter| counter.get())
            .unwrap_or(0)
    }

    // ------------------------------------------------------------------
    // Gauges
    // ------------------------------------------------------------------

    /// Overwrite the named gauge, returning the stored value
    pub fn set_gauge(&self, name: &str, value: f64) -> f64 {
        let new = self
            .inner
            .gauges
            .entry(name.to_string())
            .or_default()
            .set(value);
        self.touch();
        new
    }

    /// Add a delta to the named gauge, returning the new value
    pub fn add_gauge(&self, name: &str, delta: f64) -> f64 {
        let new = self
            .inner
            .gauges
            .entry(name.to_string())
            .or_default()
            .add(delta);
        self.touch();
        new
    }

    /// Current value of the named gauge, 0.0 when never written
    #[must_use]
    pub fn get_gauge(&self, name: &str) -> f64 {
        self.inner
            .gauges
            .get(name)
            .map(|gauge| gauge.get())
            .unwrap_or(0.0)
    }

    // ------------------------------------------------------------------
    // Unique-item sets
    // ------------------------------------------------------------------

    /// Insert into the named set, returning true iff the item was new
    pub fn add_to_set(&self, name: &str, item: impl Into<MetricValue>) -> bool {
        let added = self
            .inner
            .sets
            .entry(name.to_string())
            .or_default()
            .insert(item.into());
        self.touch();
        added
    }

    /// Remove from the named set, returning true iff the item was present
    ///
    /// Removing from a set that was never created reports false without
    /// registering the name.
    pub fn remove_from_set(&self, name: &str, item: impl Into<MetricValue>) -> bool {
        let removed = self
            .inner
            .sets
            .get_mut(name)
            .map(|mut set| set.remove(&item.into()))
            .unwrap_or(false);
        self.touch();
        removed
    }

    /// Number of unique items in the named set, 0 when never written
    #[must_use]
    pub fn get_set_size(&self, name: &str) -> usize {
        self.inner.sets.get(name).map(|set| set.len()).unwrap_or(0)
    }

    /// Copy of the named set's items, empty when never written
    #[must_use]
    pub fn get_set_items(&self, name: &str) -> HashSet<MetricValue> {
        self.inner
            .sets
            .get(name)
            .map(|set| set.items())
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Recent-value series
    // ------------------------------------------------------------------

    /// Append a now-stamped sample to the named bounded series
    ///
    /// Evicts the oldest sample once the series is at capacity.
    pub fn add_recent(&self, name: &str, value: impl Into<MetricValue>) {
        self.inner
            .series
            .entry(name.to_string())
            .or_default()
            .push(value.into());
        self.touch();
    }

    /// Most recent samples of the named series, oldest-to-newest, as a copy
    ///
    /// `limit: None` returns the whole buffer; an unknown name is empty.
    #[must_use]
    pub fn get_recent(&self, name: &str, limit: Option<usize>) -> Vec<TimedValue> {
        self.inner
            .series
            .get(name)
            .map(|series| series.recent(limit))
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Composite operations
    // ------------------------------------------------------------------

    /// Assemble a composite snapshot of every registered metric
    ///
    /// Each value is read under its own per-name guard; see the
    /// [`snapshot`](crate::snapshot) module docs for the (deliberate)
    /// consistency caveat.
    #[must_use]
    pub fn snapshot(&self) -> ComponentSnapshot {
        ComponentSnapshot {
            component: self.inner.component.clone(),
            last_update: self.inner.last_update.get(),
            counters: self
                .inner
                .counters
                .iter()
                .map(|entry| (entry.key().clone(), entry.value().get()))
                .collect(),
            gauges: self
                .inner
                .gauges
                .iter()
                .map(|entry| (entry.key().clone(), entry.value().get()))
                .collect(),
            sets: self
                .inner
                .sets
                .iter()
                .map(|entry| (entry.key().clone(), entry.value().len()))
                .collect(),
            recent_series: self
                .inner
                .series
                .iter()
                .map(|entry| (entry.key().clone(), entry.value().len()))
                .collect(),
        }
    }

    /// Zero every counter and gauge and clear every set and series
    ///
    /// Total and irreversible; metric names stay registered so a subsequent
    /// write behaves exactly like a write to a fresh metric.
    pub fn reset_all(&self) {
        for counter in self.inner.counters.iter() {
            counter.value().reset();
        }
        for gauge in self.inner.gauges.iter() {
            gauge.value().set(0.0);
        }
        for mut set in self.inner.sets.iter_mut() {
            set.value_mut().clear();
        }
        for mut series in self.inner.series.iter_mut() {
            series.value_mut().clear();
        }
        self.touch();
        debug!(component = %self.inner.component, "reset all metrics");
    }
}

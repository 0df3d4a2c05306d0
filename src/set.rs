//! Unique-item set metric
//!
//! Tracks distinct items (seen peers, active routes) where only membership
//! and cardinality matter. Mutations report whether they changed the set so
//! producers can count first-sightings without a separate lookup.

use crate::value::MetricValue;
use std::collections::HashSet;

/// A named set of unique metric values
#[derive(Debug, Default)]
pub struct UniqueSet {
    items: HashSet<MetricValue>,
}

impl UniqueSet {
    /// Insert an item, returning true iff it was not already present
    pub fn insert(&mut self, item: MetricValue) -> bool {
        self.items.insert(item)
    }

    /// Remove an item, returning true iff it was present
    pub fn remove(&mut self, item: &MetricValue) -> bool {
        self.items.remove(item)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Copy of the current items
    ///
    /// Callers never observe the live set, so they cannot race with
    /// concurrent mutation after the copy is taken.
    #[must_use]
    pub fn items(&self) -> HashSet<MetricValue> {
        self.items.clone()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

//! Bounded recent-value series
//!
//! A ring buffer of timestamped samples with silent oldest-first eviction.
//! Used for rolling statistics (latency avg/min/max) where only the recent
//! past matters and unbounded growth would be a leak.

use crate::clock::unix_now;
use crate::constants::series::CAPACITY;
use crate::value::MetricValue;
use std::collections::VecDeque;

/// A timestamped sample: `(unix seconds, value)`
pub type TimedValue = (f64, MetricValue);

/// Fixed-capacity ring buffer of timestamped samples
///
/// Holds at most [`CAPACITY`] entries in insertion order. Appending to a
/// full buffer evicts the oldest entry; eviction is overwrite semantics,
/// never an error.
#[derive(Debug)]
pub struct RecentSeries {
    buffer: VecDeque<TimedValue>,
    capacity: usize,
}

impl RecentSeries {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample stamped with the current wall clock
    pub fn push(&mut self, value: MetricValue) {
        self.push_at(unix_now(), value);
    }

    /// Append a sample with an explicit timestamp (testing and backfill)
    pub fn push_at(&mut self, timestamp: f64, value: MetricValue) {
        if self.buffer.len() == self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back((timestamp, value));
    }

    /// The most recent `limit` samples, oldest-to-newest, as a copy
    ///
    /// `None` returns the whole buffer. The copy means callers never hold
    /// a reference into the live buffer.
    #[must_use]
    pub fn recent(&self, limit: Option<usize>) -> Vec<TimedValue> {
        let take = limit.unwrap_or(self.buffer.len()).min(self.buffer.len());
        let skip = self.buffer.len() - take;
        self.buffer.iter().skip(skip).cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for RecentSeries {
    fn default() -> Self {
        Self::new(CAPACITY)
    }
}

//! Atomic scalar metric primitives
//!
//! Counters and gauges are updated from hot paths by many threads at once,
//! so both are lock-free: plain atomics with relaxed ordering. Every
//! individual operation is linearizable on its own value; there is no
//! ordering guarantee between different values (and none is needed).

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

/// Thread-safe 64-bit integer counter
///
/// Monotonic by convention, not by enforcement: negative deltas are stored
/// as given. Validating domain semantics is a facade concern, not a
/// generic-counter concern.
#[derive(Debug, Default)]
pub struct AtomicCounter(AtomicI64);

impl AtomicCounter {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(AtomicI64::new(value))
    }

    /// Increment by one, returning the new value
    #[inline]
    pub fn increment(&self) -> i64 {
        self.add(1)
    }

    /// Add a delta, returning the new value
    #[inline]
    pub fn add(&self, delta: i64) -> i64 {
        self.0.fetch_add(delta, Ordering::Relaxed) + delta
    }

    /// Current value
    #[inline]
    #[must_use]
    pub fn get(&self) -> i64 {
        self.0.load(Ordering::Relaxed)
    }

    /// Overwrite the value
    #[inline]
    pub fn set(&self, value: i64) {
        self.0.store(value, Ordering::Relaxed);
    }

    /// Reset to zero, returning the old value
    #[inline]
    pub fn reset(&self) -> i64 {
        self.0.swap(0, Ordering::Relaxed)
    }
}

/// Thread-safe 64-bit float gauge
///
/// Stores the f64 bit pattern in an `AtomicU64`. `set` is a plain store
/// (last-writer-wins); `add` is a CAS loop so concurrent adds never lose
/// updates.
#[derive(Debug)]
pub struct AtomicGauge(AtomicU64);

impl AtomicGauge {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(AtomicU64::new(value.to_bits()))
    }

    /// Overwrite the value, returning it for call chaining
    #[inline]
    pub fn set(&self, value: f64) -> f64 {
        self.0.store(value.to_bits(), Ordering::Relaxed);
        value
    }

    /// Add a delta, returning the new value
    pub fn add(&self, delta: f64) -> f64 {
        loop {
            let current = self.0.load(Ordering::Relaxed);
            let new = f64::from_bits(current) + delta;
            if self
                .0
                .compare_exchange_weak(current, new.to_bits(), Ordering::Relaxed, Ordering::Relaxed)
                .is_ok()
            {
                return new;
            }
        }
    }

    /// Current value
    #[inline]
    #[must_use]
    pub fn get(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }
}

impl Default for AtomicGauge {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_counter_starts_at_zero() {
        let counter = AtomicCounter::default();
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn test_counter_increment_returns_new_value() {
        let counter = AtomicCounter::default();
        assert_eq!(counter.increment(), 1);
        assert_eq!(counter.increment(), 2);
        assert_eq!(counter.add(5), 7);
        assert_eq!(counter.get(), 7);
    }

    #[test]
    fn test_counter_set() {
        let counter = AtomicCounter::default();
        counter.set(42);
        assert_eq!(counter.get(), 42);
    }

    #[test]
    fn test_counter_reset_returns_old_value() {
        let counter = AtomicCounter::default();
        counter.add(10);
        assert_eq!(counter.reset(), 10);
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn test_counter_negative_delta_stored_as_given() {
        let counter = AtomicCounter::default();
        counter.add(10);
        assert_eq!(counter.add(-3), 7);
    }

    #[test]
    fn test_counter_concurrent_increments() {
        let counter = Arc::new(AtomicCounter::default());
        let handles: Vec<_> = (0..5)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || {
                    for _ in 0..100 {
                        counter.increment();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(counter.get(), 500);
    }

    #[test]
    fn test_gauge_starts_at_zero() {
        let gauge = AtomicGauge::default();
        assert_eq!(gauge.get(), 0.0);
    }

    #[test]
    fn test_gauge_set_returns_value() {
        let gauge = AtomicGauge::default();
        assert_eq!(gauge.set(42.5), 42.5);
        assert_eq!(gauge.get(), 42.5);
    }

    #[test]
    fn test_gauge_add_accumulates() {
        let gauge = AtomicGauge::default();
        assert_eq!(gauge.add(10.5), 10.5);
        assert_eq!(gauge.add(5.25), 15.75);
        assert_eq!(gauge.get(), 15.75);
    }

    #[test]
    fn test_gauge_concurrent_adds_lose_nothing() {
        let gauge = Arc::new(AtomicGauge::default());
        let handles: Vec<_> = (0..5)
            .map(|_| {
                let gauge = Arc::clone(&gauge);
                thread::spawn(move || {
                    for _ in 0..100 {
                        gauge.add(1.0);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(gauge.get(), 500.0);
    }
}

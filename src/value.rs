//! Tagged metric value type
//!
//! Sets and series only ever store a handful of concrete shapes across the
//! whole mesh: plain numbers, string identifiers (peer/node ids), and
//! `(id, measurement)` pairs such as a peer latency sample. `MetricValue`
//! closes over exactly those shapes instead of an open any-type.

use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A value recorded into a unique-item set or a recent-value series
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// Plain integer measurement
    Int(i64),
    /// Plain float measurement
    Float(f64),
    /// Opaque string identifier (peer id, node id, route key)
    Id(String),
    /// Identified measurement, e.g. a latency sample for one peer
    Sample { id: String, value: f64 },
}

impl MetricValue {
    /// Numeric view of this value, if it has one
    ///
    /// `Sample` contributes its measurement; `Id` has no numeric view.
    /// Used by rolling statistics over series.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Id(_) => None,
            Self::Sample { value, .. } => Some(*value),
        }
    }
}

// Equality and hashing treat floats by bit pattern so values can live in a
// HashSet. Two NaNs with the same bits compare equal; that is fine for
// membership semantics (a producer re-inserting the same sample).
impl PartialEq for MetricValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Id(a), Self::Id(b)) => a == b,
            (Self::Sample { id: a, value: av }, Self::Sample { id: b, value: bv }) => {
                a == b && av.to_bits() == bv.to_bits()
            }
            _ => false,
        }
    }
}

impl Eq for MetricValue {}

impl Hash for MetricValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Int(v) => v.hash(state),
            Self::Float(v) => v.to_bits().hash(state),
            Self::Id(v) => v.hash(state),
            Self::Sample { id, value } => {
                id.hash(state);
                value.to_bits().hash(state);
            }
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Id(v) => write!(f, "{}", v),
            Self::Sample { id, value } => write!(f, "{}={}", id, value),
        }
    }
}

impl From<i64> for MetricValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        Self::Id(value.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(value: String) -> Self {
        Self::Id(value)
    }
}

impl From<(&str, f64)> for MetricValue {
    fn from((id, value): (&str, f64)) -> Self {
        Self::Sample {
            id: id.to_string(),
            value,
        }
    }
}

impl From<(String, f64)> for MetricValue {
    fn from((id, value): (String, f64)) -> Self {
        Self::Sample { id, value }
    }
}

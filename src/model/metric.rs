use std::fmt;

use serde::{Serialize, Serializer};

// Undefined means the rate had a zero denominator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Defined(f64),
    Undefined,
}

impl MetricValue {
    pub fn ratio(numerator: u64, denominator: u64) -> Self {
        if denominator == 0 {
            MetricValue::Undefined
        } else {
            MetricValue::Defined(numerator as f64 / denominator as f64)
        }
    }

    pub fn is_defined(self) -> bool {
        matches!(self, MetricValue::Defined(_))
    }

    pub fn value(self) -> Option<f64> {
        match self {
            MetricValue::Defined(v) => Some(v),
            MetricValue::Undefined => None,
        }
    }

    pub fn value_or(self, fallback: f64) -> f64 {
        self.value().unwrap_or(fallback)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Defined(v) => write!(f, "{:.6}", v),
            MetricValue::Undefined => f.write_str("undefined"),
        }
    }
}

impl Serialize for MetricValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MetricValue::Defined(v) => serializer.serialize_f64(*v),
            MetricValue::Undefined => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/metric.rs"]
mod tests;

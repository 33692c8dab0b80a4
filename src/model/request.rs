use clap::ValueEnum;
use serde::Serialize;

use crate::pipeline::MetricsError;

pub const DEFAULT_THRESHOLD: f64 = 0.5;
pub const DEFAULT_SWEEP_STEP: f64 = 0.01;
pub const MIN_SWEEP_STEP: f64 = 1e-6;

// How the prediction vector is derived from the score column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelMode {
    /// Constant negative-class baseline; the threshold is ignored.
    Naive,
    /// `score >= threshold` maps to the positive class.
    Probabilities,
}

impl ModelMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ModelMode::Naive => "naive",
            ModelMode::Probabilities => "probabilities",
        }
    }
}

// Which vector the ROC sweep ranks samples by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RocSource {
    /// The continuous score column.
    Scores,
    /// The derived 0/1 prediction vector (single operating point).
    Predictions,
}

impl RocSource {
    pub fn as_str(self) -> &'static str {
        match self {
            RocSource::Scores => "scores",
            RocSource::Predictions => "predictions",
        }
    }
}

// Immutable parameters of one recomputation pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvalRequest {
    pub mode: ModelMode,
    pub threshold: f64,
    pub roc_source: RocSource,
}

impl EvalRequest {
    pub fn new(
        mode: ModelMode,
        threshold: f64,
        roc_source: RocSource,
    ) -> Result<Self, MetricsError> {
        validate_threshold(threshold)?;
        Ok(Self {
            mode,
            threshold,
            roc_source,
        })
    }
}

impl Default for EvalRequest {
    fn default() -> Self {
        Self {
            mode: ModelMode::Naive,
            threshold: DEFAULT_THRESHOLD,
            roc_source: RocSource::Scores,
        }
    }
}

pub fn validate_threshold(threshold: f64) -> Result<(), MetricsError> {
    if threshold.is_finite() && (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(MetricsError::InvalidThreshold(threshold))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/request.rs"]
mod tests;

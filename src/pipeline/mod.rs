pub mod stage1_predict;
pub mod stage2_confusion;
pub mod stage3_roc;
pub mod stage4_report;

use crate::model::confusion::ConfusionMatrix;
use crate::model::metric::MetricValue;
use crate::model::request::{EvalRequest, ModelMode, RocSource};
use crate::model::roc::RocCurve;
use stage1_predict::{derive_predictions, threshold_grid};
use stage2_confusion::compute_confusion_matrix;
use stage3_roc::{compute_auc, compute_roc};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricsError {
    #[error("shape mismatch: {labels} labels vs {predictions} predictions")]
    ShapeMismatch { labels: usize, predictions: usize },
    #[error("invalid label at index {index}: {value} (expected 0 or 1)")]
    InvalidLabel { index: usize, value: u8 },
    #[error("invalid score at index {index}: {value} (expected a finite number)")]
    InvalidScore { index: usize, value: f64 },
    #[error("invalid threshold {0}: must be within [0, 1]")]
    InvalidThreshold(f64),
    #[error("invalid sweep step {0}: must be within [1e-6, 1]")]
    InvalidStep(f64),
    #[error("insufficient data: {0}")]
    InsufficientData(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RocOutcome {
    Available { curve: RocCurve, auc: f64 },
    Unavailable { reason: String },
}

impl RocOutcome {
    pub fn auc(&self) -> Option<f64> {
        match self {
            RocOutcome::Available { auc, .. } => Some(*auc),
            RocOutcome::Unavailable { .. } => None,
        }
    }

    pub fn curve(&self) -> Option<&RocCurve> {
        match self {
            RocOutcome::Available { curve, .. } => Some(curve),
            RocOutcome::Unavailable { .. } => None,
        }
    }
}

// Result of one full recomputation pass over a data snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub request: EvalRequest,
    pub predictions: Vec<u8>,
    pub confusion: ConfusionMatrix,
    pub precision: MetricValue,
    pub recall: MetricValue,
    pub accuracy: MetricValue,
    pub specificity: MetricValue,
    pub f1: MetricValue,
    pub roc: RocOutcome,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepRow {
    pub threshold: f64,
    pub confusion: ConfusionMatrix,
    pub precision: MetricValue,
    pub recall: MetricValue,
    pub f1: MetricValue,
}

pub fn evaluate(
    labels: &[u8],
    scores: &[f64],
    request: &EvalRequest,
) -> Result<Evaluation, MetricsError> {
    if labels.len() != scores.len() {
        return Err(MetricsError::ShapeMismatch {
            labels: labels.len(),
            predictions: scores.len(),
        });
    }

    let predictions = derive_predictions(request.mode, scores, request.threshold);
    let confusion = compute_confusion_matrix(labels, &predictions)?;
    tracing::debug!(
        mode = request.mode.as_str(),
        threshold = request.threshold,
        tn = confusion.true_negatives(),
        fp = confusion.false_positives(),
        fn_ = confusion.false_negatives(),
        tp = confusion.true_positives(),
        "confusion matrix computed"
    );

    let roc = match request.roc_source {
        RocSource::Scores => roc_outcome(labels, scores)?,
        RocSource::Predictions => {
            let ranked = predictions.iter().map(|&p| f64::from(p)).collect::<Vec<_>>();
            roc_outcome(labels, &ranked)?
        }
    };

    let precision = confusion.precision();
    if request.mode == ModelMode::Naive && !precision.is_defined() {
        tracing::info!("naive model predicts no positives; precision is undefined (0/0)");
    }

    Ok(Evaluation {
        request: *request,
        predictions,
        precision,
        recall: confusion.recall(),
        accuracy: confusion.accuracy(),
        specificity: confusion.specificity(),
        f1: confusion.f1(),
        confusion,
        roc,
    })
}

// Evaluates probabilities mode at every threshold of the slider grid.
pub fn sweep(labels: &[u8], scores: &[f64], step: f64) -> Result<Vec<SweepRow>, MetricsError> {
    if labels.len() != scores.len() {
        return Err(MetricsError::ShapeMismatch {
            labels: labels.len(),
            predictions: scores.len(),
        });
    }
    let grid = threshold_grid(step)?;
    let mut rows = Vec::with_capacity(grid.len());
    for threshold in grid {
        let predictions = derive_predictions(ModelMode::Probabilities, scores, threshold);
        let confusion = compute_confusion_matrix(labels, &predictions)?;
        rows.push(SweepRow {
            threshold,
            precision: confusion.precision(),
            recall: confusion.recall(),
            f1: confusion.f1(),
            confusion,
        });
    }
    Ok(rows)
}

fn roc_outcome(labels: &[u8], scores: &[f64]) -> Result<RocOutcome, MetricsError> {
    match compute_roc(labels, scores) {
        Ok(curve) => {
            let auc = compute_auc(&curve.points)?;
            Ok(RocOutcome::Available { curve, auc })
        }
        Err(MetricsError::InsufficientData(reason)) => {
            tracing::warn!("ROC curve unavailable: {}", reason);
            Ok(RocOutcome::Unavailable { reason })
        }
        Err(other) => Err(other),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/tests.rs"]
mod tests;

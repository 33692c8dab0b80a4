use crate::model::roc::{RocCurve, RocPoint};
use crate::pipeline::MetricsError;
use crate::pipeline::stage2_confusion::check_binary;

// Ties share one point. The lowest threshold admits every sample, so the curve ends on (1, 1).
pub fn compute_roc(labels: &[u8], scores: &[f64]) -> Result<RocCurve, MetricsError> {
    if labels.len() != scores.len() {
        return Err(MetricsError::ShapeMismatch {
            labels: labels.len(),
            predictions: scores.len(),
        });
    }
    check_binary(labels)?;
    if let Some(index) = scores.iter().position(|s| !s.is_finite()) {
        return Err(MetricsError::InvalidScore {
            index,
            value: scores[index],
        });
    }

    let n_positive = labels.iter().filter(|&&l| l == 1).count();
    let n_negative = labels.len() - n_positive;
    if n_positive == 0 || n_negative == 0 {
        return Err(MetricsError::InsufficientData(format!(
            "ROC requires both classes; found {} positive and {} negative labels",
            n_positive, n_negative
        )));
    }

    let mut order = (0..scores.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let pos = n_positive as f64;
    let neg = n_negative as f64;
    let mut points = Vec::with_capacity(order.len() + 1);
    points.push(RocPoint::anchor());

    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut i = 0usize;
    while i < order.len() {
        let threshold = scores[order[i]];
        while i < order.len() && scores[order[i]] == threshold {
            if labels[order[i]] == 1 {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
        }
        points.push(RocPoint {
            threshold: Some(threshold),
            fpr: fp as f64 / neg,
            tpr: tp as f64 / pos,
        });
    }

    Ok(RocCurve {
        n_positive,
        n_negative,
        points,
    })
}

// Trapezoidal area under the curve, ordered by ascending FPR.
pub fn compute_auc(points: &[RocPoint]) -> Result<f64, MetricsError> {
    if points.len() < 2 {
        return Err(MetricsError::InsufficientData(format!(
            "AUC requires at least 2 ROC points, got {}",
            points.len()
        )));
    }
    let mut sorted = points.iter().map(RocPoint::coords).collect::<Vec<_>>();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

    let mut area = 0.0f64;
    for pair in sorted.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        area += (x1 - x0) * (y0 + y1) / 2.0;
    }
    Ok(area.clamp(0.0, 1.0))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_roc.rs"]
mod tests;

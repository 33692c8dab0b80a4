use crate::model::confusion::ConfusionMatrix;
use crate::model::metric::MetricValue;
use crate::pipeline::MetricsError;

pub fn compute_confusion_matrix(
    labels: &[u8],
    predictions: &[u8],
) -> Result<ConfusionMatrix, MetricsError> {
    if labels.len() != predictions.len() {
        return Err(MetricsError::ShapeMismatch {
            labels: labels.len(),
            predictions: predictions.len(),
        });
    }
    check_binary(labels)?;
    check_binary(predictions)?;

    let mut cm = ConfusionMatrix::default();
    for (&truth, &predicted) in labels.iter().zip(predictions) {
        cm.record(truth == 1, predicted == 1);
    }
    Ok(cm)
}

pub fn compute_precision(labels: &[u8], predictions: &[u8]) -> Result<MetricValue, MetricsError> {
    Ok(compute_confusion_matrix(labels, predictions)?.precision())
}

pub fn compute_recall(labels: &[u8], predictions: &[u8]) -> Result<MetricValue, MetricsError> {
    Ok(compute_confusion_matrix(labels, predictions)?.recall())
}

pub fn check_binary(values: &[u8]) -> Result<(), MetricsError> {
    match values.iter().position(|&v| v > 1) {
        Some(index) => Err(MetricsError::InvalidLabel {
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_confusion.rs"]
mod tests;

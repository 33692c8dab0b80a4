use super::*;

#[test]
fn test_record_places_cells_by_truth_then_prediction() {
    let mut cm = ConfusionMatrix::default();
    cm.record(false, false);
    cm.record(false, true);
    cm.record(false, true);
    cm.record(true, false);
    cm.record(true, true);
    cm.record(true, true);
    cm.record(true, true);
    assert_eq!(cm.rows(), [[1, 2], [1, 3]]);
    assert_eq!(cm.true_negatives(), 1);
    assert_eq!(cm.false_positives(), 2);
    assert_eq!(cm.false_negatives(), 1);
    assert_eq!(cm.true_positives(), 3);
    assert_eq!(cm.total(), 7);
}

#[test]
fn test_derived_rates() {
    let cm = ConfusionMatrix::from_rows([[3, 1], [2, 4]]);
    assert_eq!(cm.precision(), MetricValue::Defined(0.8));
    assert_eq!(cm.recall(), MetricValue::Defined(4.0 / 6.0));
    assert_eq!(cm.specificity(), MetricValue::Defined(0.75));
    assert_eq!(cm.accuracy(), MetricValue::Defined(0.7));
    assert_eq!(cm.f1(), MetricValue::Defined(8.0 / 11.0));
}

#[test]
fn test_empty_matrix_is_undefined_everywhere() {
    let cm = ConfusionMatrix::default();
    assert_eq!(cm.total(), 0);
    assert_eq!(cm.precision(), MetricValue::Undefined);
    assert_eq!(cm.recall(), MetricValue::Undefined);
    assert_eq!(cm.specificity(), MetricValue::Undefined);
    assert_eq!(cm.accuracy(), MetricValue::Undefined);
    assert_eq!(cm.f1(), MetricValue::Undefined);
}

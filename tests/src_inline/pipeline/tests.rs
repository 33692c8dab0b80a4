use super::*;

fn probabilities(threshold: f64) -> EvalRequest {
    EvalRequest::new(ModelMode::Probabilities, threshold, RocSource::Scores).unwrap()
}

#[test]
fn test_evaluate_probabilities_mode() {
    let labels = vec![1, 1, 0, 0];
    let scores = vec![0.9, 0.3, 0.2, 0.6];
    let eval = evaluate(&labels, &scores, &probabilities(0.5)).unwrap();
    assert_eq!(eval.predictions, vec![1, 0, 0, 1]);
    assert_eq!(eval.confusion.rows(), [[1, 1], [1, 1]]);
    assert_eq!(eval.precision, MetricValue::Defined(0.5));
    assert_eq!(eval.recall, MetricValue::Defined(0.5));
    assert_eq!(eval.accuracy, MetricValue::Defined(0.5));
    assert_eq!(eval.roc.auc(), Some(0.75));
}

#[test]
fn test_evaluate_naive_mode_surfaces_undefined_precision() {
    let labels = vec![1, 0, 1, 0];
    let scores = vec![0.8, 0.1, 0.7, 0.4];
    let eval = evaluate(&labels, &scores, &EvalRequest::default()).unwrap();
    assert_eq!(eval.predictions, vec![0, 0, 0, 0]);
    assert_eq!(eval.confusion.rows(), [[2, 0], [2, 0]]);
    assert_eq!(eval.precision, MetricValue::Undefined);
    assert_eq!(eval.recall, MetricValue::Defined(0.0));
    assert_eq!(eval.f1, MetricValue::Undefined);
    // Ranked by scores, so the curve is independent of the naive predictions.
    assert_eq!(eval.roc.auc(), Some(1.0));
}

#[test]
fn test_evaluate_roc_over_predictions() {
    let labels = vec![1, 0, 1, 0];
    let scores = vec![0.8, 0.1, 0.7, 0.4];
    let request = EvalRequest::new(ModelMode::Naive, 0.5, RocSource::Predictions).unwrap();
    let eval = evaluate(&labels, &scores, &request).unwrap();
    let curve = eval.roc.curve().unwrap();
    assert_eq!(curve.points.len(), 2);
    assert_eq!(eval.roc.auc(), Some(0.5));
}

#[test]
fn test_evaluate_single_class_keeps_other_metrics() {
    let labels = vec![0, 0, 0];
    let scores = vec![0.9, 0.2, 0.6];
    let eval = evaluate(&labels, &scores, &probabilities(0.5)).unwrap();
    assert_eq!(eval.confusion.rows(), [[1, 2], [0, 0]]);
    assert_eq!(eval.recall, MetricValue::Undefined);
    match &eval.roc {
        RocOutcome::Unavailable { reason } => assert!(reason.contains("both classes")),
        other => panic!("expected unavailable ROC, got {other:?}"),
    }
}

#[test]
fn test_evaluate_empty_input() {
    let eval = evaluate(&[], &[], &probabilities(0.5)).unwrap();
    assert_eq!(eval.confusion.total(), 0);
    assert_eq!(eval.precision, MetricValue::Undefined);
    assert_eq!(eval.recall, MetricValue::Undefined);
    assert!(eval.roc.auc().is_none());
}

#[test]
fn test_evaluate_rejects_misaligned_and_invalid() {
    assert!(matches!(
        evaluate(&[0, 1], &[0.5], &probabilities(0.5)),
        Err(MetricsError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        evaluate(&[0, 5], &[0.5, 0.2], &probabilities(0.5)),
        Err(MetricsError::InvalidLabel { index: 1, value: 5 })
    ));
}

#[test]
fn test_evaluate_is_repeatable() {
    let labels = vec![1, 0, 1, 1, 0];
    let scores = vec![0.3, 0.35, 0.9, 0.5, 0.1];
    let request = probabilities(0.4);
    let first = evaluate(&labels, &scores, &request).unwrap();
    let second = evaluate(&labels, &scores, &request).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_sweep_matches_single_evaluations() {
    let labels = vec![1, 1, 0, 0, 1];
    let scores = vec![0.95, 0.42, 0.42, 0.1, 0.67];
    let rows = sweep(&labels, &scores, 0.01).unwrap();
    assert_eq!(rows.len(), 101);
    assert_eq!(rows[0].threshold, 0.0);
    assert_eq!(rows[100].threshold, 1.0);

    for row in [&rows[0], &rows[42], &rows[50], &rows[100]] {
        let eval = evaluate(&labels, &scores, &probabilities(row.threshold)).unwrap();
        assert_eq!(row.confusion, eval.confusion);
        assert_eq!(row.precision, eval.precision);
        assert_eq!(row.recall, eval.recall);
    }
    assert_eq!(rows[0].recall, MetricValue::Defined(1.0));
    assert_eq!(rows[100].precision, MetricValue::Undefined);
}

#[test]
fn test_sweep_rejects_bad_step() {
    assert!(matches!(
        sweep(&[0, 1], &[0.1, 0.9], 0.0),
        Err(MetricsError::InvalidStep(_))
    ));
    assert_eq!(
        sweep(&[0, 1], &[0.1, 0.9], 1e-10).unwrap_err(),
        MetricsError::InvalidStep(1e-10)
    );
}

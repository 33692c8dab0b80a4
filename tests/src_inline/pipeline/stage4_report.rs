use std::path::PathBuf;

use tempfile::tempdir;

use super::*;
use crate::model::request::{EvalRequest, ModelMode, RocSource};
use crate::pipeline::{evaluate, sweep};

fn bundle(labels: Vec<u8>, scores: Vec<f64>) -> InputBundle {
    let n_positive = labels.iter().filter(|&&l| l == 1).count();
    InputBundle {
        path: PathBuf::from("scores.csv"),
        compressed: false,
        columns: vec!["label".to_string(), "prob".to_string()],
        label_column: "label".to_string(),
        score_column: "prob".to_string(),
        n_negative: labels.len() - n_positive,
        n_positive,
        labels,
        scores,
        scores_out_of_range: 0,
    }
}

#[test]
fn test_build_summary_json_shape() {
    let b = bundle(vec![1, 1, 0, 0], vec![0.9, 0.8, 0.4, 0.3]);
    let request = EvalRequest::new(ModelMode::Probabilities, 0.85, RocSource::Scores).unwrap();
    let eval = evaluate(&b.labels, &b.scores, &request).unwrap();
    let summary = build_summary(&b, &eval);

    let json: serde_json::Value =
        serde_json::from_str(&render_summary_json(&summary).unwrap()).unwrap();
    assert_eq!(json["tool"]["name"], "kira-thresholdqc");
    assert_eq!(json["input"]["n_samples"], 4);
    assert_eq!(json["request"]["mode"], "probabilities");
    assert_eq!(json["confusion_matrix"]["rows"][1][1], 1);
    assert_eq!(json["confusion_matrix"]["fn"], 1);
    assert_eq!(json["metrics"]["precision"], 1.0);
    assert_eq!(json["metrics"]["recall"], 0.5);
    assert_eq!(json["roc"]["available"], true);
    assert_eq!(json["roc"]["auc"], 1.0);
    assert_eq!(json["roc"]["points"].as_array().unwrap().len(), 5);
    assert!(json["roc"]["points"][0]["threshold"].is_null());
}

#[test]
fn test_naive_summary_has_null_precision() {
    let b = bundle(vec![1, 0, 1, 0], vec![0.6, 0.5, 0.4, 0.3]);
    let eval = evaluate(&b.labels, &b.scores, &EvalRequest::default()).unwrap();
    let summary = build_summary(&b, &eval);
    let json = serde_json::to_value(&summary).unwrap();
    assert!(json["metrics"]["precision"].is_null());
    assert_eq!(json["metrics"]["recall"], 0.0);
}

#[test]
fn test_write_reports_creates_all_files() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("nested").join("out");
    let b = bundle(vec![1, 0, 1], vec![0.7, 0.2, 0.4]);
    let request = EvalRequest::new(ModelMode::Probabilities, 0.5, RocSource::Scores).unwrap();
    let eval = evaluate(&b.labels, &b.scores, &request).unwrap();
    let summary = build_summary(&b, &eval);

    let written = write_reports(&b, &eval, &summary, &out).unwrap();
    assert_eq!(written.len(), 4);
    for name in [SUMMARY_FILE, REPORT_FILE, ROC_FILE, PREDICTIONS_FILE] {
        assert!(out.join(name).is_file(), "missing {name}");
    }
    let predictions = std::fs::read_to_string(out.join(PREDICTIONS_FILE)).unwrap();
    assert_eq!(predictions.lines().count(), 4);
    assert!(predictions.contains("3\t1\t0.400000\t0"));
}

#[test]
fn test_write_reports_skips_roc_file_when_unavailable() {
    let dir = tempdir().unwrap();
    let earlier = bundle(vec![1, 0], vec![0.8, 0.3]);
    let earlier_eval = evaluate(&earlier.labels, &earlier.scores, &EvalRequest::default()).unwrap();
    let earlier_summary = build_summary(&earlier, &earlier_eval);
    write_reports(&earlier, &earlier_eval, &earlier_summary, dir.path()).unwrap();
    assert!(dir.path().join(ROC_FILE).exists());

    let b = bundle(vec![0, 0], vec![0.7, 0.2]);
    let eval = evaluate(&b.labels, &b.scores, &EvalRequest::default()).unwrap();
    let summary = build_summary(&b, &eval);

    let written = write_reports(&b, &eval, &summary, dir.path()).unwrap();
    assert_eq!(written.len(), 3);
    assert!(!dir.path().join(ROC_FILE).exists());
    let report = std::fs::read_to_string(dir.path().join(REPORT_FILE)).unwrap();
    assert!(report.contains("ROC unavailable"));
}

#[test]
fn test_write_sweep_file() {
    let dir = tempdir().unwrap();
    let rows = sweep(&[1, 0], &[0.8, 0.3], 0.25).unwrap();
    let path = write_sweep(&rows, dir.path()).unwrap();
    let text = std::fs::read_to_string(path).unwrap();
    assert_eq!(text.lines().count(), 6);
    assert!(text.starts_with("threshold\ttn\tfp\tfn\ttp"));
}

use crate::model::metric::MetricValue;
use crate::model::request::{ModelMode, RocSource};
use crate::report::{SummaryData, format_f64_6};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Threshold Impact Report\n");
    out.push_str("=======================\n\n");

    out.push_str("1. Input and request\n");
    out.push_str(&format!("Input: {}\n", data.input.path));
    out.push_str(&format!(
        "Columns: label={}, score={}\n",
        data.input.label_column, data.input.score_column
    ));
    out.push_str(&format!(
        "Samples: {} (positive: {}, negative: {})\n",
        data.input.n_samples, data.input.n_positive, data.input.n_negative
    ));
    out.push_str(&format!("Model: {}\n", data.request.mode.as_str()));
    match data.request.mode {
        ModelMode::Naive => out.push_str("Threshold: not used\n"),
        ModelMode::Probabilities => out.push_str(&format!(
            "Threshold: {} (prediction = score >= threshold)\n",
            format_f64_6(data.request.threshold)
        )),
    }
    out.push('\n');

    out.push_str("2. Confusion matrix (rows = true label, columns = predicted)\n");
    out.push_str(&render_matrix(data.confusion_matrix.rows));
    out.push('\n');

    out.push_str("3. Precision and recall\n");
    out.push_str(&format!("Precision: {}\n", data.metrics.precision));
    out.push_str(&format!("Recall: {}\n", data.metrics.recall));
    out.push_str(&format!("Accuracy: {}\n", data.metrics.accuracy));
    out.push_str(&format!("Specificity: {}\n", data.metrics.specificity));
    out.push_str(&format!("F1: {}\n\n", data.metrics.f1));

    out.push_str("4. ROC curve\n");
    out.push_str(&format!("Ranked by: {}\n", data.roc.source.as_str()));
    match (data.roc.auc, &data.roc.reason) {
        (Some(auc), _) => {
            out.push_str(&format!("ROC curve (area = {:.2})\n", auc));
            out.push_str(&format!("Points: {}\n", data.roc.points.len()));
            out.push_str(&format!("AUC: {}\n", format_f64_6(auc)));
        }
        (None, Some(reason)) => {
            out.push_str(&format!("ROC unavailable: {}\n", reason));
        }
        (None, None) => out.push_str("ROC unavailable\n"),
    }
    out.push('\n');

    let caveats = caveats(data);
    if !caveats.is_empty() {
        out.push_str("5. Caveats\n");
        for line in caveats {
            out.push_str(&format!("- {}\n", line));
        }
    }

    out
}

fn render_matrix(rows: [[u64; 2]; 2]) -> String {
    let width = rows
        .iter()
        .flatten()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1)
        .max("pred 0".len());
    let mut out = String::new();
    out.push_str(&format!(
        "{:<8} {:>w$} {:>w$}\n",
        "",
        "pred 0",
        "pred 1",
        w = width
    ));
    for (truth, row) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{:<8} {:>w$} {:>w$}\n",
            format!("true {}", truth),
            row[0],
            row[1],
            w = width
        ));
    }
    out
}

fn caveats(data: &SummaryData) -> Vec<String> {
    let mut lines = Vec::new();
    if data.request.mode == ModelMode::Naive {
        lines.push(
            "Naive model predicts the negative class for every sample; the threshold is ignored."
                .to_string(),
        );
    }
    if data.metrics.precision == MetricValue::Undefined {
        lines.push(format!(
            "Precision is undefined: no positive predictions (0/0). Treated as {} under the zero-division convention.",
            format_f64_6(data.metrics.precision.value_or(0.0))
        ));
    }
    if data.metrics.recall == MetricValue::Undefined {
        lines.push("Recall is undefined: the input has no positive labels.".to_string());
    }
    if data.roc.source == RocSource::Predictions {
        lines.push(
            "ROC is ranked by 0/1 predictions and reflects a single operating point.".to_string(),
        );
    }
    if data.input.scores_out_of_range > 0 {
        lines.push(format!(
            "{} scores fall outside [0, 1].",
            data.input.scores_out_of_range
        ));
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::input::InputBundle;
use crate::pipeline::{Evaluation, RocOutcome, SweepRow};
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::tsv::{write_predictions_tsv, write_roc_tsv, write_sweep_tsv};
use crate::report::{
    ConfusionSummary, InputSummary, MetricSummary, ReportError, RocSummary, SummaryData, ToolMeta,
};

pub const SUMMARY_FILE: &str = "summary.json";
pub const REPORT_FILE: &str = "report.txt";
pub const ROC_FILE: &str = "roc_curve.tsv";
pub const PREDICTIONS_FILE: &str = "predictions.tsv";
pub const SWEEP_FILE: &str = "threshold_sweep.tsv";

pub fn build_summary(bundle: &InputBundle, evaluation: &Evaluation) -> SummaryData {
    let cm = &evaluation.confusion;
    let roc = match &evaluation.roc {
        RocOutcome::Available { curve, auc } => RocSummary {
            source: evaluation.request.roc_source,
            available: true,
            auc: Some(*auc),
            reason: None,
            points: curve.points.clone(),
        },
        RocOutcome::Unavailable { reason } => RocSummary {
            source: evaluation.request.roc_source,
            available: false,
            auc: None,
            reason: Some(reason.clone()),
            points: Vec::new(),
        },
    };

    SummaryData {
        tool: ToolMeta {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input: InputSummary {
            path: bundle.path.display().to_string(),
            compressed: bundle.compressed,
            columns: bundle.columns.clone(),
            label_column: bundle.label_column.clone(),
            score_column: bundle.score_column.clone(),
            n_samples: bundle.n_samples(),
            n_positive: bundle.n_positive,
            n_negative: bundle.n_negative,
            scores_out_of_range: bundle.scores_out_of_range,
        },
        request: evaluation.request,
        confusion_matrix: ConfusionSummary {
            rows: cm.rows(),
            tn: cm.true_negatives(),
            fp: cm.false_positives(),
            fn_: cm.false_negatives(),
            tp: cm.true_positives(),
        },
        metrics: MetricSummary {
            precision: evaluation.precision,
            recall: evaluation.recall,
            accuracy: evaluation.accuracy,
            specificity: evaluation.specificity,
            f1: evaluation.f1,
        },
        roc,
    }
}

// Writes every run artifact into `out_dir`, creating it if needed.
pub fn write_reports(
    bundle: &InputBundle,
    evaluation: &Evaluation,
    summary: &SummaryData,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, ReportError> {
    fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();

    let summary_path = out_dir.join(SUMMARY_FILE);
    write_text(&summary_path, &render_summary_json(summary)?)?;
    written.push(summary_path);

    let report_path = out_dir.join(REPORT_FILE);
    write_text(&report_path, &render_report_text(summary))?;
    written.push(report_path);

    let roc_path = out_dir.join(ROC_FILE);
    match evaluation.roc.curve() {
        Some(curve) => {
            let mut w = BufWriter::new(File::create(&roc_path)?);
            write_roc_tsv(&mut w, &curve.points)?;
            w.flush()?;
            written.push(roc_path);
        }
        // Drop a curve left by an earlier run in the same directory.
        None => match fs::remove_file(&roc_path) {
            Ok(()) => tracing::info!("removed stale {}", roc_path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        },
    }

    let predictions_path = out_dir.join(PREDICTIONS_FILE);
    let mut w = BufWriter::new(File::create(&predictions_path)?);
    write_predictions_tsv(&mut w, &bundle.labels, &bundle.scores, &evaluation.predictions)?;
    w.flush()?;
    written.push(predictions_path);

    for path in &written {
        tracing::info!("wrote {}", path.display());
    }
    Ok(written)
}

pub fn write_sweep(rows: &[SweepRow], out_dir: &Path) -> Result<PathBuf, ReportError> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(SWEEP_FILE);
    let mut w = BufWriter::new(File::create(&path)?);
    write_sweep_tsv(&mut w, rows)?;
    w.flush()?;
    tracing::info!("wrote {} ({} thresholds)", path.display(), rows.len());
    Ok(path)
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;

use serde::Serialize;

use crate::model::metric::MetricValue;
use crate::model::request::{EvalRequest, RocSource};
use crate::model::roc::RocPoint;

pub mod json;
pub mod text;
pub mod tsv;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputSummary {
    pub path: String,
    pub compressed: bool,
    pub columns: Vec<String>,
    pub label_column: String,
    pub score_column: String,
    pub n_samples: usize,
    pub n_positive: usize,
    pub n_negative: usize,
    pub scores_out_of_range: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfusionSummary {
    pub rows: [[u64; 2]; 2],
    pub tn: u64,
    pub fp: u64,
    #[serde(rename = "fn")]
    pub fn_: u64,
    pub tp: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricSummary {
    pub precision: MetricValue,
    pub recall: MetricValue,
    pub accuracy: MetricValue,
    pub specificity: MetricValue,
    pub f1: MetricValue,
}

#[derive(Debug, Clone, Serialize)]
pub struct RocSummary {
    pub source: RocSource,
    pub available: bool,
    pub auc: Option<f64>,
    pub reason: Option<String>,
    pub points: Vec<RocPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub input: InputSummary,
    pub request: EvalRequest,
    pub confusion_matrix: ConfusionSummary,
    pub metrics: MetricSummary,
    pub roc: RocSummary,
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn format_metric_tsv(v: MetricValue) -> String {
    match v {
        MetricValue::Defined(x) => format_f64_6(x),
        MetricValue::Undefined => "NA".to_string(),
    }
}

pub fn format_threshold(t: Option<f64>) -> String {
    match t {
        Some(v) => format_f64_6(v),
        None => "inf".to_string(),
    }
}

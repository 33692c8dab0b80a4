use std::path::{Path, PathBuf};

pub mod reader;
pub mod table;

use reader::{is_gzip_path, open_maybe_gz};
use table::read_score_table;

pub const DEFAULT_LABEL_COLUMN: &str = "label";
pub const DEFAULT_SCORE_COLUMN: &str = "prob";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    pub label_column: String,
    pub score_column: String,
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            label_column: DEFAULT_LABEL_COLUMN.to_string(),
            score_column: DEFAULT_SCORE_COLUMN.to_string(),
            delimiter: b',',
        }
    }
}

// Aligned label/score snapshot of one input file.
#[derive(Debug, Clone)]
pub struct InputBundle {
    pub path: PathBuf,
    pub compressed: bool,
    pub columns: Vec<String>,
    pub label_column: String,
    pub score_column: String,
    pub labels: Vec<u8>,
    pub scores: Vec<f64>,
    pub n_positive: usize,
    pub n_negative: usize,
    pub scores_out_of_range: usize,
}

impl InputBundle {
    pub fn n_samples(&self) -> usize {
        self.labels.len()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("schema error: missing column '{missing}' (found: {found})")]
    Schema { missing: String, found: String },
    #[error("invalid label at line {line}: '{value}' (expected 0, 1, true or false)")]
    InvalidLabel { line: u64, value: String },
    #[error("parse error at line {line}: {message}")]
    Parse { line: u64, message: String },
}

pub fn load_input(path: &Path, options: &LoadOptions) -> Result<InputBundle, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(format!(
            "{} does not exist or is not a file",
            path.display()
        )));
    }
    let compressed = is_gzip_path(path);
    tracing::info!(
        "reading scores from {}{}",
        path.display(),
        if compressed { " (gzip)" } else { "" }
    );

    let table = read_score_table(open_maybe_gz(path)?, options)?;

    let n_positive = table.labels.iter().filter(|&&l| l == 1).count();
    let n_negative = table.labels.len() - n_positive;
    let scores_out_of_range = table
        .scores
        .iter()
        .filter(|s| !(0.0..=1.0).contains(*s))
        .count();

    if table.labels.is_empty() {
        tracing::warn!("input has a header but no data rows");
    }
    if scores_out_of_range > 0 {
        tracing::warn!(
            "{} scores fall outside [0, 1]; thresholds are still applied as-is",
            scores_out_of_range
        );
    }
    tracing::info!(
        "loaded {} samples: positive={}, negative={}, label_column={}, score_column={}",
        table.labels.len(),
        n_positive,
        n_negative,
        table.label_column,
        table.score_column
    );

    Ok(InputBundle {
        path: path.to_path_buf(),
        compressed,
        columns: table.columns,
        label_column: table.label_column,
        score_column: table.score_column,
        labels: table.labels,
        scores: table.scores,
        n_positive,
        n_negative,
        scores_out_of_range,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;

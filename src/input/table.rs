use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::input::{InputError, LoadOptions};

const UTF8_BOM: char = '\u{feff}';

#[derive(Debug, Clone)]
pub struct ScoreTable {
    pub columns: Vec<String>,
    pub label_column: String,
    pub score_column: String,
    pub labels: Vec<u8>,
    pub scores: Vec<f64>,
}

pub fn read_score_table<R: Read>(
    reader: R,
    options: &LoadOptions,
) -> Result<ScoreTable, InputError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(options.delimiter)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let columns = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches(UTF8_BOM).trim().to_string())
        .collect::<Vec<_>>();
    let label_idx = resolve_column(&columns, &options.label_column)?;
    let score_idx = resolve_column(&columns, &options.score_column)?;

    let mut labels = Vec::new();
    let mut scores = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        if record.iter().all(str::is_empty) {
            continue;
        }
        if record.len() != columns.len() {
            return Err(InputError::Parse {
                line,
                message: format!(
                    "expected {} fields, found {}",
                    columns.len(),
                    record.len()
                ),
            });
        }
        let label = record.get(label_idx).unwrap_or("");
        let score = record.get(score_idx).unwrap_or("");
        labels.push(parse_label(label, line)?);
        scores.push(parse_score(score, line)?);
    }

    Ok(ScoreTable {
        label_column: columns[label_idx].clone(),
        score_column: columns[score_idx].clone(),
        columns,
        labels,
        scores,
    })
}

pub fn resolve_column(columns: &[String], wanted: &str) -> Result<usize, InputError> {
    let wanted = wanted.trim();
    columns
        .iter()
        .position(|c| c.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| InputError::Schema {
            missing: wanted.to_string(),
            found: columns.join(", "),
        })
}

pub fn parse_label(raw: &str, line: u64) -> Result<u8, InputError> {
    let value = raw.trim();
    if value.eq_ignore_ascii_case("true") {
        return Ok(1);
    }
    if value.eq_ignore_ascii_case("false") {
        return Ok(0);
    }
    match value.parse::<f64>() {
        Ok(v) if v == 0.0 => Ok(0),
        Ok(v) if v == 1.0 => Ok(1),
        _ => Err(InputError::InvalidLabel {
            line,
            value: value.to_string(),
        }),
    }
}

pub fn parse_score(raw: &str, line: u64) -> Result<f64, InputError> {
    let value = raw.trim();
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(InputError::Parse {
            line,
            message: format!("score '{}' is not finite", value),
        }),
        Err(_) => Err(InputError::Parse {
            line,
            message: format!("score '{}' is not a number", value),
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/table.rs"]
mod tests;

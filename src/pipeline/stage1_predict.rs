use crate::model::request::{MIN_SWEEP_STEP, ModelMode};
use crate::pipeline::MetricsError;

const GRID_EPS: f64 = 1e-9;
const GRID_SCALE: f64 = 1e9;

// Naive mode ignores `threshold` and yields the all-negative baseline.
pub fn derive_predictions(mode: ModelMode, scores: &[f64], threshold: f64) -> Vec<u8> {
    match mode {
        ModelMode::Naive => vec![0u8; scores.len()],
        ModelMode::Probabilities => scores
            .iter()
            .map(|&s| u8::from(s >= threshold))
            .collect(),
    }
}

// Thresholds 0, step, 2*step, ... up to and including 1.0.
pub fn threshold_grid(step: f64) -> Result<Vec<f64>, MetricsError> {
    if !step.is_finite() || step < MIN_SWEEP_STEP || step > 1.0 {
        return Err(MetricsError::InvalidStep(step));
    }
    let n_steps = (1.0 / step).ceil() as u64;
    let mut grid = Vec::with_capacity(n_steps as usize + 1);
    for i in 0..n_steps {
        let t = round_grid(i as f64 * step);
        if t >= 1.0 - GRID_EPS {
            break;
        }
        grid.push(t);
    }
    grid.push(1.0);
    Ok(grid)
}

fn round_grid(v: f64) -> f64 {
    (v * GRID_SCALE).round() / GRID_SCALE
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_predict.rs"]
mod tests;

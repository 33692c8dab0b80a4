use serde::Serialize;

// `threshold` is `None` for the (0, 0) anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RocPoint {
    pub threshold: Option<f64>,
    pub fpr: f64,
    pub tpr: f64,
}

impl RocPoint {
    pub fn anchor() -> Self {
        Self {
            threshold: None,
            fpr: 0.0,
            tpr: 0.0,
        }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.fpr, self.tpr)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RocCurve {
    pub n_positive: usize,
    pub n_negative: usize,
    pub points: Vec<RocPoint>,
}

impl RocCurve {
    pub fn fpr(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.fpr).collect()
    }

    pub fn tpr(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.tpr).collect()
    }
}

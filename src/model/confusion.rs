use crate::model::metric::MetricValue;

// 2x2 outcome counts. Rows are the true class, columns the predicted class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfusionMatrix {
    cells: [[u64; 2]; 2],
}

impl ConfusionMatrix {
    pub fn from_rows(cells: [[u64; 2]; 2]) -> Self {
        Self { cells }
    }

    pub fn record(&mut self, truth: bool, predicted: bool) {
        self.cells[usize::from(truth)][usize::from(predicted)] += 1;
    }

    pub fn rows(&self) -> [[u64; 2]; 2] {
        self.cells
    }

    pub fn true_negatives(&self) -> u64 {
        self.cells[0][0]
    }

    pub fn false_positives(&self) -> u64 {
        self.cells[0][1]
    }

    pub fn false_negatives(&self) -> u64 {
        self.cells[1][0]
    }

    pub fn true_positives(&self) -> u64 {
        self.cells[1][1]
    }

    pub fn total(&self) -> u64 {
        self.cells.iter().flatten().sum()
    }

    pub fn actual_positive(&self) -> u64 {
        self.true_positives() + self.false_negatives()
    }

    pub fn actual_negative(&self) -> u64 {
        self.true_negatives() + self.false_positives()
    }

    pub fn predicted_positive(&self) -> u64 {
        self.true_positives() + self.false_positives()
    }

    pub fn precision(&self) -> MetricValue {
        MetricValue::ratio(self.true_positives(), self.predicted_positive())
    }

    pub fn recall(&self) -> MetricValue {
        MetricValue::ratio(self.true_positives(), self.actual_positive())
    }

    pub fn specificity(&self) -> MetricValue {
        MetricValue::ratio(self.true_negatives(), self.actual_negative())
    }

    pub fn accuracy(&self) -> MetricValue {
        MetricValue::ratio(self.true_positives() + self.true_negatives(), self.total())
    }

    pub fn f1(&self) -> MetricValue {
        let tp = self.true_positives();
        MetricValue::ratio(
            2 * tp,
            2 * tp + self.false_positives() + self.false_negatives(),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/confusion.rs"]
mod tests;

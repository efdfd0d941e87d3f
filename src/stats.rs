//! Summary statistics for the scores shown in the current view.

/// Mean, median and range of a series of scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    /// `None` when there are no scores.
    pub min: Option<i64>,
    /// `None` when there are no scores.
    pub max: Option<i64>,
    pub count: usize,
}

impl Summary {
    pub fn from_values(values: &[i64]) -> Self {
        Self {
            mean: mean(values),
            median: median(values),
            min: min(values),
            max: max(values),
            count: values.len(),
        }
    }
}

/// The arithmetic mean of `values`, or 0 if there are none.
pub fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let sum: f64 = values.iter().map(|&value| value as f64).sum();
    sum / values.len() as f64
}

/// The median of `values`, or 0 if there are none.
///
/// For an even number of values this is the mean of the two middle values.
pub fn median(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;

    if sorted.len() % 2 == 1 {
        sorted[mid] as f64
    } else {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    }
}

pub fn min(values: &[i64]) -> Option<i64> {
    values.iter().copied().min()
}

pub fn max(values: &[i64]) -> Option<i64> {
    values.iter().copied().max()
}

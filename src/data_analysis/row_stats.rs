// src/data_analysis/row_stats.rs

use ndarray::Array1;

use crate::constants::MIN_SAMPLES_FOR_DISPERSION;

/// Summary of the non-missing trial values of a single row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowStats {
    pub count: usize,
    pub mean: Option<f64>,
    pub std_dev: Option<f64>, // Sample (n - 1) standard deviation
}

/// Mean and Bessel-corrected standard deviation over the present values of `cells`.
///
/// No values gives neither statistic; a single value gives a mean but no standard
/// deviation, since the n - 1 divisor would be zero.
pub fn row_stats(cells: &[Option<f64>]) -> RowStats {
    let values: Array1<f64> = cells.iter().flatten().copied().collect();
    let count = values.len();
    let mean = values.mean();
    let std_dev = if count >= MIN_SAMPLES_FOR_DISPERSION {
        Some(values.std(1.0))
    } else {
        None
    };
    RowStats {
        count,
        mean,
        std_dev,
    }
}

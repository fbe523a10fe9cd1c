// src/data_analysis/confidence.rs

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::constants::MIN_SAMPLES_FOR_DISPERSION;
use crate::error::{PlotError, PlotResult};

/// Two-sided critical value of Student's t at `level` confidence with `dof` degrees of freedom.
pub fn t_critical(level: f64, dof: f64) -> PlotResult<f64> {
    if !(level > 0.0 && level < 1.0) {
        return Err(PlotError::Statistics(format!(
            "confidence level {level} outside (0, 1)"
        )));
    }
    let dist = StudentsT::new(0.0, 1.0, dof).map_err(|e| PlotError::Statistics(e.to_string()))?;
    Ok(dist.inverse_cdf(1.0 - (1.0 - level) / 2.0))
}

/// Half-width of the t-based confidence interval of a row mean.
///
/// Returns `Ok(None)` when the margin is undefined: fewer than two samples (zero
/// degrees of freedom) or no standard deviation.
pub fn margin_of_error(level: f64, count: usize, std_dev: Option<f64>) -> PlotResult<Option<f64>> {
    let Some(std_dev) = std_dev else {
        return Ok(None);
    };
    if count < MIN_SAMPLES_FOR_DISPERSION {
        return Ok(None);
    }
    let critical = t_critical(level, (count - 1) as f64)?;
    let margin = critical * (std_dev / (count as f64).sqrt());
    Ok(margin.is_finite().then_some(margin))
}

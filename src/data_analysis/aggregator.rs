// src/data_analysis/aggregator.rs

use std::ops::Range;

use crate::config::{ColumnSelector, Dispersion, TrialColumns};
use crate::data_analysis::confidence::margin_of_error;
use crate::data_analysis::row_stats::row_stats;
use crate::data_input::measurement_table::MeasurementTable;
use crate::error::{PlotError, PlotResult};

/// Per-row summary of one table: independent variable, mean of the trials and the
/// spread measure selected by `dispersion`. All three vectors have one entry per
/// table row, in table order.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateSeries {
    pub x: Vec<Option<f64>>,
    pub mean: Vec<Option<f64>>,
    pub dispersion: Vec<Option<f64>>,
    pub dispersion_kind: Dispersion,
}

impl AggregateSeries {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Rows with both an x value and a mean, as `(x, mean, dispersion)`.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, Option<f64>)> + '_ {
        self.x
            .iter()
            .zip(&self.mean)
            .zip(&self.dispersion)
            .filter_map(|((x, mean), spread)| Some(((*x)?, (*mean)?, *spread)))
    }
}

/// Summarizes `table` row by row.
///
/// `x_column` is copied through untouched; `trials` are reduced to a mean and
/// either their sample standard deviation or a t-based confidence margin. Rows are
/// never dropped: a row without usable trials yields missing entries.
pub fn aggregate(
    table: &MeasurementTable,
    x_column: usize,
    trials: Range<usize>,
    dispersion: Dispersion,
) -> PlotResult<AggregateSeries> {
    if x_column >= table.width() || trials.start >= trials.end || trials.end > table.width() {
        return Err(PlotError::ColumnOutOfRange {
            start: trials.start.min(x_column),
            end: trials.end.max(x_column + 1),
            width: table.width(),
            path: table.source().to_path_buf(),
        });
    }

    let x = table.column(x_column);
    let mut mean = Vec::with_capacity(table.row_count());
    let mut spread = Vec::with_capacity(table.row_count());
    let mut degenerate_rows = 0usize;

    for row in table.rows() {
        let stats = row_stats(&row[trials.clone()]);
        mean.push(stats.mean);

        let value = match dispersion {
            Dispersion::SampleStdDev => stats.std_dev,
            Dispersion::ConfidenceMargin { level } => {
                margin_of_error(level, stats.count, stats.std_dev)?
            }
        };
        if value.is_none() && stats.mean.is_some() {
            degenerate_rows += 1;
        }
        spread.push(value);
    }

    if degenerate_rows > 0 {
        log::warn!(
            "{} row(s) in '{}' have fewer than two trials; their error bars are omitted.",
            degenerate_rows,
            table.source().display()
        );
    }
    log::debug!(
        "Aggregated {} rows of '{}' over trial columns {:?} ({:?}).",
        table.row_count(),
        table.source().display(),
        trials,
        dispersion
    );

    Ok(AggregateSeries {
        x,
        mean,
        dispersion: spread,
        dispersion_kind: dispersion,
    })
}

/// Resolves the column selectors against `table` and aggregates it.
pub fn aggregate_selected(
    table: &MeasurementTable,
    x_column: &ColumnSelector,
    trials: &TrialColumns,
    dispersion: Dispersion,
) -> PlotResult<AggregateSeries> {
    let x_index = table.resolve_column(x_column)?;
    let trial_range = table.resolve_trials(trials)?;
    aggregate(table, x_index, trial_range, dispersion)
}


// src/data_analysis/aggregator.rs

// src/data_input/measurement_table.rs

use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::config::{ColumnSelector, TrialColumns};
use crate::error::{PlotError, PlotResult};

/// Numeric table loaded from one CSV file.
/// Cells are `None` where the text could not be coerced to a number.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementTable {
    source: PathBuf,
    headers: Option<Vec<String>>,
    rows: Vec<Vec<Option<f64>>>, // Every row padded to `width`
    width: usize,
}

impl MeasurementTable {
    /// Builds a table, padding short rows with missing cells so every row has the same width.
    pub fn new(source: PathBuf, headers: Option<Vec<String>>, mut rows: Vec<Vec<Option<f64>>>) -> Self {
        let header_width = headers.as_ref().map_or(0, Vec::len);
        let width = rows.iter().map(Vec::len).max().unwrap_or(0).max(header_width);
        for row in &mut rows {
            row.resize(width, None);
        }
        Self {
            source,
            headers,
            rows,
            width,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn headers(&self) -> Option<&[String]> {
        self.headers.as_deref()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> &[Vec<Option<f64>>] {
        &self.rows
    }

    /// Copies out one column in row order.
    pub fn column(&self, index: usize) -> Vec<Option<f64>> {
        self.rows.iter().map(|row| row.get(index).copied().flatten()).collect()
    }

    /// Resolves a selector to a column index within this table.
    pub fn resolve_column(&self, selector: &ColumnSelector) -> PlotResult<usize> {
        match selector {
            ColumnSelector::Index(index) => {
                if *index < self.width {
                    Ok(*index)
                } else {
                    Err(PlotError::ColumnOutOfRange {
                        start: *index,
                        end: index + 1,
                        width: self.width,
                        path: self.source.clone(),
                    })
                }
            }
            ColumnSelector::Name(name) => self
                .headers
                .as_ref()
                .and_then(|headers| headers.iter().position(|h| h.trim() == name.trim()))
                .ok_or_else(|| PlotError::UnknownColumn {
                    name: name.clone(),
                    path: self.source.clone(),
                }),
        }
    }

    /// Resolves the trial range, closing an open-ended range at the last column.
    pub fn resolve_trials(&self, trials: &TrialColumns) -> PlotResult<Range<usize>> {
        let end = trials.end.unwrap_or(self.width);
        if trials.start >= end || end > self.width {
            return Err(PlotError::ColumnOutOfRange {
                start: trials.start,
                end,
                width: self.width,
                path: self.source.clone(),
            });
        }
        Ok(trials.start..end)
    }
}


// src/data_input/measurement_table.rs

// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// Every failure a group can hit between reading its inputs and writing its PDF.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("group has {inputs} input file(s) but {styles} (label, color) pair(s)")]
    CountMismatch { inputs: usize, styles: usize },

    #[error("column '{name}' not found in '{path}'")]
    UnknownColumn { name: String, path: PathBuf },

    #[error("column range {start}..{end} exceeds table width {width} in '{path}'")]
    ColumnOutOfRange {
        start: usize,
        end: usize,
        width: usize,
        path: PathBuf,
    },

    #[error("statistics error: {0}")]
    Statistics(String),

    #[error("rendering failed: {0}")]
    Render(String),

    #[error("cannot export '{path}': {message}")]
    Export { path: PathBuf, message: String },
}

pub type PlotResult<T> = Result<T, PlotError>;

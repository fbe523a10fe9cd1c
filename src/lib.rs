// src/lib.rs - Library interface for the CSV -> statistics -> PDF chart pipeline

pub mod axis_format;
pub mod colors;
pub mod config;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod pdf_export;
pub mod pipeline;
pub mod plot_framework;
pub mod preview;
pub mod style;

pub use error::{PlotError, PlotResult};

pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

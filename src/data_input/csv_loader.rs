// src/data_input/csv_loader.rs

use csv::ReaderBuilder;
use std::fs;
use std::path::Path;

use crate::config::CsvFormat;
use crate::constants::{DECIMAL_COMMA, DECIMAL_POINT};
use crate::data_input::measurement_table::MeasurementTable;
use crate::error::{PlotError, PlotResult};

/// Replaces decimal commas with decimal points. Running it twice changes nothing.
pub fn normalize_decimal(cell: &str) -> String {
    cell.replace(DECIMAL_COMMA, &DECIMAL_POINT.to_string())
}

/// Coerces one cell to a number. Anything unparseable (a placeholder dash, an empty
/// cell, text) becomes a missing value instead of an error.
pub fn parse_cell(cell: &str) -> Option<f64> {
    normalize_decimal(cell.trim())
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Loads a delimited measurement file into a [`MeasurementTable`].
///
/// The first `format.skip_rows` lines are discarded unconditionally. When
/// `format.header_row` is set, the next line names the columns. Every remaining
/// cell goes through [`parse_cell`]; rows of any length are kept.
pub fn load_measurement_table(path: &Path, format: &CsvFormat) -> PlotResult<MeasurementTable> {
    let delimiter = u8::try_from(format.delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| {
            PlotError::Config(format!("delimiter '{}' is not a single ASCII byte", format.delimiter))
        })?;

    let text = fs::read_to_string(path).map_err(|source| PlotError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // Drop the metadata lines before handing the rest to the CSV reader.
    let csv_content: String = text
        .lines()
        .skip(format.skip_rows)
        .collect::<Vec<_>>()
        .join("\n");

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(format.header_row)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_content.as_bytes());

    let csv_error = |source| PlotError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let headers = if format.header_row {
        let record = reader.headers().map_err(csv_error)?;
        Some(record.iter().map(|h| h.trim().to_string()).collect::<Vec<_>>())
    } else {
        None
    };

    let mut rows: Vec<Vec<Option<f64>>> = Vec::new();
    let mut missing_cells = 0usize;
    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        let row: Vec<Option<f64>> = record.iter().map(parse_cell).collect();
        missing_cells += row.iter().filter(|cell| cell.is_none()).count();
        rows.push(row);
    }

    log::info!(
        "Read {} data rows from '{}' ({} missing cells).",
        rows.len(),
        path.display(),
        missing_cells
    );

    Ok(MeasurementTable::new(path.to_path_buf(), headers, rows))
}


// src/data_input/csv_loader.rs

// src/config.rs

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::colors::parse_color;
use crate::constants::{
    CSV_DELIMITER, CSV_SKIP_ROWS, DEFAULT_CONFIDENCE_LEVEL, DEFAULT_SERIES_STYLES,
};
use crate::error::{PlotError, PlotResult};
use crate::preview::PreviewMode;
use crate::style::StyleContext;

/// Selects a single column either by position or by its header name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnSelector {
    Index(usize),
    Name(String),
}

/// Half-open range of trial columns. `end: None` runs through the last column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialColumns {
    pub start: usize,
    #[serde(default)]
    pub end: Option<usize>,
}

/// How the spread of each row is summarized.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Dispersion {
    #[default]
    SampleStdDev,
    ConfidenceMargin { level: f64 },
}

impl fmt::Display for Dispersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dispersion::SampleStdDev => write!(f, "sample std-dev"),
            Dispersion::ConfidenceMargin { level } => {
                write!(f, "{}% confidence margin", level * 100.0)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvFormat {
    pub delimiter: char,
    pub skip_rows: usize,
    pub header_row: bool,
}

impl Default for CsvFormat {
    fn default() -> Self {
        Self {
            delimiter: CSV_DELIMITER,
            skip_rows: CSV_SKIP_ROWS,
            header_row: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub label: String,
    pub color: String,
}

/// One chart: a set of input files drawn together and written to one PDF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupConfig {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    pub inputs: Vec<PathBuf>,
    #[serde(default = "default_series_styles")]
    pub series: Vec<SeriesStyle>,
    pub x_label: String,
    pub y_label: String,
    pub output: PathBuf,
    pub x_column: ColumnSelector,
    pub trial_columns: TrialColumns,
    #[serde(default)]
    pub dispersion: Dispersion,
    #[serde(default)]
    pub csv: CsvFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub style: StyleContext,
    #[serde(default)]
    pub preview: PreviewMode,
    pub groups: Vec<GroupConfig>,
}

pub fn default_series_styles() -> Vec<SeriesStyle> {
    DEFAULT_SERIES_STYLES
        .iter()
        .map(|(label, color)| SeriesStyle {
            label: label.to_string(),
            color: color.to_string(),
        })
        .collect()
}

/// True when `name` is a single, non-empty path component other than `.` or `..`.
pub fn is_plain_file_stem(name: &str) -> bool {
    !name.trim().is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

impl GroupConfig {
    /// Checks everything that can be checked without touching the input files.
    pub fn validate(&self) -> PlotResult<()> {
        if !is_plain_file_stem(&self.name) {
            return Err(PlotError::Config(format!(
                "group name '{}' must be usable as a file name (no path separators)",
                self.name
            )));
        }
        if self.inputs.is_empty() {
            return Err(PlotError::Config(format!("group '{}' has no input files", self.name)));
        }
        if self.inputs.len() != self.series.len() {
            return Err(PlotError::CountMismatch {
                inputs: self.inputs.len(),
                styles: self.series.len(),
            });
        }
        for style in &self.series {
            parse_color(&style.color)?;
        }
        if let Dispersion::ConfidenceMargin { level } = self.dispersion {
            if !(level > 0.0 && level < 1.0) {
                return Err(PlotError::Config(format!(
                    "confidence level must lie strictly between 0 and 1, got {level}"
                )));
            }
        }
        if let Some(end) = self.trial_columns.end {
            if end <= self.trial_columns.start {
                return Err(PlotError::Config(format!(
                    "trial column range {}..{} is empty",
                    self.trial_columns.start, end
                )));
            }
        }
        if let ColumnSelector::Name(_) = self.x_column {
            if !self.csv.header_row {
                return Err(PlotError::Config(
                    "x column selected by name but the CSV format has no header row".to_string(),
                ));
            }
        }
        if self.output.file_name().is_none() {
            return Err(PlotError::Config(format!(
                "output path '{}' has no file name",
                self.output.display()
            )));
        }
        Ok(())
    }
}

impl RunConfig {
    pub fn from_json_file(path: &Path) -> PlotResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| PlotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text)
            .map_err(|e| PlotError::Config(format!("{}: {e}", path.display())))
    }

    /// The two stock charts: foot prototypes (position vs motor load) and hand
    /// prototypes (mass vs load), resolved against the working directory.
    pub fn builtin() -> Self {
        let inputs = |model: &str| -> Vec<PathBuf> {
            (1..=3)
                .map(|n| PathBuf::from(format!("data/{n}_phalanges_model_{model}.csv")))
                .collect()
        };
        Self {
            style: StyleContext::default(),
            preview: PreviewMode::default(),
            groups: vec![
                GroupConfig {
                    name: "foot".to_string(),
                    title: Some("Motor Load vs Position for Different Prototypes".to_string()),
                    inputs: inputs("foot"),
                    series: default_series_styles(),
                    x_label: "Position [mm]".to_string(),
                    y_label: "Motor Load [%]".to_string(),
                    output: PathBuf::from("saved_plots/motor_load_vs_position.pdf"),
                    x_column: ColumnSelector::Name("position [mm]".to_string()),
                    trial_columns: TrialColumns { start: 1, end: None },
                    dispersion: Dispersion::SampleStdDev,
                    csv: CsvFormat::default(),
                },
                GroupConfig {
                    name: "hand".to_string(),
                    title: Some("Load vs Mass for Different Prototypes".to_string()),
                    inputs: inputs("hand"),
                    series: default_series_styles(),
                    x_label: "Mass [kg]".to_string(),
                    y_label: "Load [%]".to_string(),
                    output: PathBuf::from("saved_plots/load_vs_mass.pdf"),
                    x_column: ColumnSelector::Name("mass [kg]".to_string()),
                    trial_columns: TrialColumns { start: 1, end: None },
                    dispersion: Dispersion::ConfidenceMargin {
                        level: DEFAULT_CONFIDENCE_LEVEL,
                    },
                    csv: CsvFormat::default(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group_with_inputs(n: usize) -> GroupConfig {
        let mut group = RunConfig::builtin().groups.remove(0);
        group.inputs = (0..n).map(|i| PathBuf::from(format!("in_{i}.csv"))).collect();
        group
    }

    #[test]
    fn test_builtin_groups_validate() {
        for group in RunConfig::builtin().groups {
            group.validate().unwrap();
        }
    }

    #[test]
    fn test_count_mismatch_rejected() {
        let group = group_with_inputs(2);
        match group.validate() {
            Err(PlotError::CountMismatch { inputs, styles }) => {
                assert_eq!(inputs, 2);
                assert_eq!(styles, 3);
            }
            other => panic!("expected CountMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_confidence_level_bounds() {
        let mut group = group_with_inputs(3);
        for level in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            group.dispersion = Dispersion::ConfidenceMargin { level };
            assert!(group.validate().is_err(), "level {level} should be rejected");
        }
        group.dispersion = Dispersion::ConfidenceMargin { level: 0.95 };
        assert!(group.validate().is_ok());
    }

    #[test]
    fn test_empty_trial_range_rejected() {
        let mut group = group_with_inputs(3);
        group.trial_columns = TrialColumns { start: 3, end: Some(3) };
        assert!(matches!(group.validate(), Err(PlotError::Config(_))));
    }

    #[test]
    fn test_name_selector_requires_header_row() {
        let mut group = group_with_inputs(3);
        group.csv.header_row = false;
        assert!(group.validate().is_err());
        group.x_column = ColumnSelector::Index(0);
        assert!(group.validate().is_ok());
    }

    #[test]
    fn test_group_name_must_be_a_file_stem() {
        let mut group = group_with_inputs(3);
        for name in ["", "..", "../escape", "nested/chart", "C:\\charts\\x"] {
            group.name = name.to_string();
            assert!(
                matches!(group.validate(), Err(PlotError::Config(_))),
                "name {name:?} should be rejected"
            );
        }
        group.name = "motor_load v2".to_string();
        assert!(group.validate().is_ok());
    }

    #[test]
    fn test_dispersion_display() {
        assert_eq!(Dispersion::SampleStdDev.to_string(), "sample std-dev");
        assert_eq!(
            Dispersion::ConfidenceMargin { level: 0.99 }.to_string(),
            "99% confidence margin"
        );
    }

    #[test]
    fn test_json_config_parses_with_defaults() {
        let json = r#"{
            "groups": [{
                "name": "g",
                "inputs": ["a.csv", "b.csv", "c.csv"],
                "x_label": "X",
                "y_label": "Y",
                "output": "out.pdf",
                "x_column": 0,
                "trial_columns": { "start": 1, "end": 6 },
                "dispersion": { "kind": "confidence_margin", "level": 0.95 }
            }]
        }"#;
        let config: RunConfig = serde_json::from_str(json).unwrap();
        let group = &config.groups[0];
        assert_eq!(group.x_column, ColumnSelector::Index(0));
        assert_eq!(group.series.len(), 3);
        assert_eq!(group.csv, CsvFormat::default());
        assert_eq!(group.dispersion, Dispersion::ConfidenceMargin { level: 0.95 });
        assert_eq!(config.preview, PreviewMode::None);
        group.validate().unwrap();
    }

    #[test]
    fn test_example_config_matches_builtin_groups() {
        let config: RunConfig =
            serde_json::from_str(include_str!("../demos/config.example.json")).unwrap();
        let builtin = RunConfig::builtin();
        assert_eq!(config.groups.len(), builtin.groups.len());
        for (example, stock) in config.groups.iter().zip(&builtin.groups) {
            example.validate().unwrap();
            assert_eq!(example.inputs, stock.inputs);
            assert_eq!(example.output, stock.output);
            assert_eq!(example.dispersion, stock.dispersion);
            assert_eq!(example.x_column, stock.x_column);
        }
        assert_eq!(config.style, StyleContext::default());
    }
}

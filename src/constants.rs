// src/constants.rs

// Plot dimensions (10 x 6 inches at 100 dpi).
pub const PLOT_WIDTH: u32 = 1000;
pub const PLOT_HEIGHT: u32 = 600;

// --- CSV Input Format ---
pub const CSV_DELIMITER: char = ';';
pub const CSV_SKIP_ROWS: usize = 2; // Metadata lines before the column header line
pub const DECIMAL_COMMA: char = ',';
pub const DECIMAL_POINT: char = '.';

// --- Aggregation ---
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.99;
pub const MIN_SAMPLES_FOR_DISPERSION: usize = 2; // Bessel correction needs n - 1 > 0

// --- Global Style Defaults ---
pub const DEFAULT_FONT_FAMILY: &str = "Times New Roman";
pub const DEFAULT_LABEL_FONT_SIZE: u32 = 18;
pub const LEGEND_FONT_SIZE_OFFSET: u32 = 2; // Legend text is this much smaller than axis labels
pub const DEFAULT_GRID_ALPHA: f64 = 0.75;
pub const DEFAULT_GRID_STROKE_WIDTH: u32 = 1;

// Requested tick label count per axis.
pub const X_LABEL_COUNT: usize = 10;
pub const Y_LABEL_COUNT: usize = 10;

// Scientific notation kicks in outside this order-of-magnitude window.
pub const SCI_POWER_LIMITS: (i32, i32) = (-1, 1);

// --- Series Drawing ---
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;
pub const MARKER_RADIUS: u32 = 4;
pub const ERROR_BAR_LINE_WIDTH: u32 = 2;
pub const ERROR_BAR_CAP_WIDTH: u32 = 10; // Full cap width in pixels (5 px each side)

// Range padding, mirrors the 15% margin used for every chart.
pub const RANGE_PADDING_RATIO: f64 = 0.15;
pub const RANGE_MIN_PADDING: f64 = 0.5;

/// Default (label, color) pairs, one per input file in a group.
pub const DEFAULT_SERIES_STYLES: [(&str, &str); 3] = [
    ("1 Phalanx", "blue"),
    ("2 Phalanges", "green"),
    ("3 Phalanges", "red"),
];

// src/constants.rs

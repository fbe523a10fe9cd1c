// src/plot_framework.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt;
use plotters::backend::{DrawingBackend, SVGBackend};
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, EmptyElement, ErrorBar, PathElement, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, TRANSPARENT, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;

use crate::axis_format::ScientificFormatter;
use crate::constants::{
    ERROR_BAR_CAP_WIDTH, ERROR_BAR_LINE_WIDTH, LINE_WIDTH_LEGEND, LINE_WIDTH_PLOT, MARKER_RADIUS,
    PLOT_HEIGHT, PLOT_WIDTH, RANGE_MIN_PADDING, RANGE_PADDING_RATIO, X_LABEL_COUNT, Y_LABEL_COUNT,
};
use crate::data_analysis::aggregator::AggregateSeries;
use crate::style::StyleContext;

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 {
        RANGE_MIN_PADDING
    } else {
        range * RANGE_PADDING_RATIO
    };
    (min - padding, max + padding)
}

/// Draw a "Data Unavailable" message in the middle of a plot area.
pub fn draw_unavailable_message<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    style: &StyleContext,
    chart_name: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size
    const LINE_HEIGHT_SPACING: i32 = 4;

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (x_range.end - x_range.start, y_range.end - y_range.start);
    let message = format!("{chart_name} Data Unavailable:\n{reason}");

    let font_size = style.label_font_size as i32;
    let estimated_char_width = (font_size as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_line_height = font_size + LINE_HEIGHT_SPACING;

    let lines: Vec<&str> = message.split('\n').collect();
    let max_line_length = lines.iter().map(|line| line.len()).max().unwrap_or(0) as i32;
    let center_x = width / 2 - max_line_length * estimated_char_width / 2;
    let center_y = height / 2 - lines.len() as i32 * estimated_line_height / 2;

    for (i, line) in lines.iter().enumerate() {
        let text_style = style.label_font().into_font().color(&RED);
        area.draw(&Text::new(
            line.to_string(),
            (center_x, center_y + i as i32 * estimated_line_height),
            text_style,
        ))?;
    }
    Ok(())
}

/// One input file's contribution to a chart.
#[derive(Clone, Debug)]
pub struct ErrorBarSeries {
    pub label: String,
    pub color: RGBColor,
    pub x: Vec<Option<f64>>,
    pub mean: Vec<Option<f64>>,
    pub error: Vec<Option<f64>>, // Half-height of the error bar at each row
}

impl ErrorBarSeries {
    /// Pairs an aggregate with its display label and color. Each series keeps its own
    /// dispersion vector.
    pub fn from_aggregate(aggregate: &AggregateSeries, label: &str, color: RGBColor) -> Self {
        Self {
            label: label.to_string(),
            color,
            x: aggregate.x.clone(),
            mean: aggregate.mean.clone(),
            error: aggregate.dispersion.clone(),
        }
    }

    /// Drawable points as `(x, mean, error)`.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, Option<f64>)> + '_ {
        self.x
            .iter()
            .zip(&self.mean)
            .zip(&self.error)
            .filter_map(|((x, mean), error)| Some(((*x)?, (*mean)?, *error)))
    }

    /// Runs of consecutive drawable points. A row missing its x or mean breaks the line.
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current: Vec<(f64, f64)> = Vec::new();
        for (x, mean) in self.x.iter().zip(&self.mean) {
            match (x, mean) {
                (Some(x), Some(mean)) => current.push((*x, *mean)),
                _ => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

/// Everything needed to draw one chart.
#[derive(Clone, Debug)]
pub struct ChartSpec {
    pub title: Option<String>,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ErrorBarSeries>,
}

/// Axis ranges for one chart. `y_data` is the unpadded extent of the means and
/// error bars; `x` and `y` add the plot margin.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartRanges {
    pub x: Range<f64>,
    pub y: Range<f64>,
    pub y_data: Range<f64>,
}

impl ChartRanges {
    /// Offset exponent follows the data extent, label precision follows the tick
    /// spacing of the padded axis.
    pub fn y_formatter(&self) -> ScientificFormatter {
        ScientificFormatter::for_axis(self.y_data.start, self.y_data.end)
            .with_tick_step((self.y.end - self.y.start) / Y_LABEL_COUNT as f64)
    }
}

/// Ranges covering every point and error bar, or `None` when no series has a
/// drawable point.
pub fn data_ranges(series: &[ErrorBarSeries]) -> Option<ChartRanges> {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for s in series {
        for (x, mean, error) in s.points() {
            let error = error.unwrap_or(0.0);
            xs.push(x);
            ys.push(mean - error);
            ys.push(mean + error);
        }
    }
    let xs: Array1<f64> = xs.into_iter().filter(|v| v.is_finite()).collect();
    let ys: Array1<f64> = ys.into_iter().filter(|v| v.is_finite()).collect();
    if xs.is_empty() || ys.is_empty() {
        return None;
    }

    let (x_min, x_max) = calculate_range(*xs.min_skipnan(), *xs.max_skipnan());
    let (y_data_min, y_data_max) = (*ys.min_skipnan(), *ys.max_skipnan());
    let (y_min, y_max) = calculate_range(y_data_min, y_data_max);
    Some(ChartRanges {
        x: x_min..x_max,
        y: y_min..y_max,
        y_data: y_data_min..y_data_max,
    })
}

/// Draws the error-bar chart for `spec` into `area`.
fn draw_errorbar_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
    style: &StyleContext,
    ranges: &ChartRanges,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let mut builder = ChartBuilder::on(area);
    builder
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(80);
    if let Some(title) = &spec.title {
        builder.caption(title, style.label_font());
    }
    let mut chart = builder.build_cartesian_2d(ranges.x.clone(), ranges.y.clone())?;

    let y_formatter = ranges.y_formatter();
    let y_desc = y_formatter.axis_label(&spec.y_label);
    let format_y = move |y: &f64| y_formatter.format_tick(*y);

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(spec.x_label.as_str())
        .y_desc(y_desc)
        .x_labels(X_LABEL_COUNT)
        .y_labels(Y_LABEL_COUNT)
        .y_label_formatter(&format_y)
        .axis_desc_style(style.label_font())
        .label_style(style.legend_font());
    if style.grid_visible {
        mesh.bold_line_style(style.grid_color().stroke_width(style.grid_stroke_width))
            .light_line_style(TRANSPARENT);
    } else {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    for s in &spec.series {
        let color = s.color;

        for segment in s.segments() {
            chart.draw_series(LineSeries::new(segment, color.stroke_width(LINE_WIDTH_PLOT)))?;
        }

        let bar_style = color.stroke_width(ERROR_BAR_LINE_WIDTH);
        chart.draw_series(s.points().filter_map(|(x, mean, error)| {
            error.map(|e| {
                ErrorBar::new_vertical(x, mean - e, mean, mean + e, bar_style, ERROR_BAR_CAP_WIDTH)
            })
        }))?;

        // Markers carry the legend entry so every series shows up even without a line.
        chart
            .draw_series(
                s.points()
                    .map(|(x, mean, _)| Circle::new((x, mean), MARKER_RADIUS, color.filled())),
            )?
            .label(s.label.as_str())
            .legend(move |(x, y)| {
                EmptyElement::at((x, y))
                    + PathElement::new(
                        vec![(-10, 0), (10, 0)],
                        color.stroke_width(LINE_WIDTH_LEGEND),
                    )
                    + Circle::new((0, 0), MARKER_RADIUS, color.filled())
            });
    }

    if !spec.series.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(style.legend_font())
            .draw()?;
    }

    Ok(())
}

/// Renders `spec` to an SVG document.
///
/// When no series has a drawable point the chart is replaced by a
/// "Data Unavailable" message instead of failing.
pub fn render_svg(spec: &ChartSpec, style: &StyleContext) -> Result<String, Box<dyn Error>> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        match data_ranges(&spec.series) {
            Some(ranges) => {
                draw_errorbar_chart(&root, spec, style, &ranges)?;
            }
            None => {
                let name = spec.title.as_deref().unwrap_or(spec.y_label.as_str());
                log::warn!("  No plottable points for '{name}', drawing placeholder only.");
                draw_unavailable_message(&root, style, name, "No data points")?;
            }
        }
        root.present()?;
    }
    Ok(svg)
}


// src/plot_framework.rs

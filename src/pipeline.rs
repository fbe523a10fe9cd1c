// src/pipeline.rs

// Loader -> Aggregator -> Renderer for one group at a time. Any stage failure aborts
// that group only; `run` carries on with the next one.

use std::path::PathBuf;

use crate::colors::parse_color;
use crate::config::{GroupConfig, RunConfig};
use crate::data_analysis::aggregator::{aggregate_selected, AggregateSeries};
use crate::data_input::csv_loader::load_measurement_table;
use crate::error::{PlotError, PlotResult};
use crate::pdf_export::export_pdf;
use crate::plot_framework::{render_svg, ChartSpec, ErrorBarSeries};
use crate::preview::PreviewSink;
use crate::style::StyleContext;

/// Outcome of a successfully rendered group.
#[derive(Debug, Clone)]
pub struct GroupReport {
    pub name: String,
    pub output: PathBuf,
    pub series: Vec<AggregateSeries>,
}

/// Loads and aggregates every input of `group`, in input order.
pub fn aggregate_group(group: &GroupConfig) -> PlotResult<Vec<AggregateSeries>> {
    group
        .inputs
        .iter()
        .map(|path| -> PlotResult<AggregateSeries> {
            let table = load_measurement_table(path, &group.csv)?;
            let series =
                aggregate_selected(&table, &group.x_column, &group.trial_columns, group.dispersion)?;
            log::info!(
                "  '{}': {} rows, {} drawable, error bars from {}.",
                path.display(),
                series.len(),
                series.points().count(),
                series.dispersion_kind
            );
            Ok(series)
        })
        .collect()
}

/// Assigns labels and colors by position. Counts must match exactly.
pub fn build_chart_spec(group: &GroupConfig, aggregates: &[AggregateSeries]) -> PlotResult<ChartSpec> {
    if aggregates.len() != group.series.len() {
        return Err(PlotError::CountMismatch {
            inputs: aggregates.len(),
            styles: group.series.len(),
        });
    }
    let series = aggregates
        .iter()
        .zip(&group.series)
        .map(|(aggregate, style)| {
            let color = parse_color(&style.color)?;
            Ok(ErrorBarSeries::from_aggregate(aggregate, &style.label, color))
        })
        .collect::<PlotResult<Vec<_>>>()?;

    Ok(ChartSpec {
        title: group.title.clone(),
        x_label: group.x_label.clone(),
        y_label: group.y_label.clone(),
        series,
    })
}

/// Runs the whole pipeline for one group and writes its PDF.
pub fn process_group(
    group: &GroupConfig,
    style: &StyleContext,
    preview: &dyn PreviewSink,
) -> PlotResult<GroupReport> {
    group.validate()?;
    log::info!(
        "--- Processing group '{}' ({} input files) ---",
        group.name,
        group.inputs.len()
    );

    let aggregates = aggregate_group(group)?;
    let spec = build_chart_spec(group, &aggregates)?;
    let svg = render_svg(&spec, style).map_err(|e| PlotError::Render(e.to_string()))?;
    export_pdf(&svg, &group.output)?;

    if let Err(e) = preview.show(&group.name, &svg) {
        log::warn!("  Preview for '{}' failed: {e}", group.name);
    }

    Ok(GroupReport {
        name: group.name.clone(),
        output: group.output.clone(),
        series: aggregates,
    })
}

/// Processes every group in order, collecting each outcome by group name.
pub fn run(config: &RunConfig, style: &StyleContext) -> Vec<(String, PlotResult<GroupReport>)> {
    let preview = config.preview.sink();
    config
        .groups
        .iter()
        .map(|group| {
            let result = process_group(group, style, preview.as_ref());
            if let Err(e) = &result {
                log::error!("Group '{}' failed: {e}", group.name);
            }
            (group.name.clone(), result)
        })
        .collect()
}

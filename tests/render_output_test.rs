// tests/render_output_test.rs

use std::fs;

use plotters::style::IntoFont;
use trial_csv_render::config::{
    default_series_styles, ColumnSelector, CsvFormat, Dispersion, GroupConfig, TrialColumns,
};
use trial_csv_render::pipeline::process_group;
use trial_csv_render::preview::{HeadlessPreview, SvgFilePreview};
use trial_csv_render::style::StyleContext;
use trial_csv_render::PlotError;

const LOAD_CSV: &str = "Prototype;hand model\n\
                        Operator;M\n\
                        mass [kg];t1;t2;t3\n\
                        0,5;10,2;11,0;9,8\n\
                        1,0;20,5;-;21,1\n\
                        1,5;30,0;31,2;29,9\n";

fn group(dir: &std::path::Path, file_count: usize) -> GroupConfig {
    let inputs = (1..=file_count)
        .map(|n| {
            let path = dir.join(format!("{n}_phalanges_model_hand.csv"));
            fs::write(&path, LOAD_CSV).unwrap();
            path
        })
        .collect();
    GroupConfig {
        name: "load_vs_mass".to_string(),
        title: Some("Load vs Mass for Different Prototypes".to_string()),
        inputs,
        series: default_series_styles(),
        x_label: "Mass [kg]".to_string(),
        y_label: "Load [%]".to_string(),
        output: dir.join("load_vs_mass.pdf"),
        x_column: ColumnSelector::Name("mass [kg]".to_string()),
        trial_columns: TrialColumns { start: 1, end: None },
        dispersion: Dispersion::ConfidenceMargin { level: 0.99 },
        csv: CsvFormat::default(),
    }
}

// Text layout needs at least one font that plotters can resolve; hosts without any
// skip the rendering checks instead of failing them.
fn fonts_available() -> bool {
    let available = ("sans-serif", 12.0).into_font().box_size("0").is_ok();
    if !available {
        eprintln!("no usable system font, skipping render check");
    }
    available
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatched_group_draws_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let g = group(dir.path(), 2);
        let result = process_group(&g, &StyleContext::default(), &HeadlessPreview);
        assert!(matches!(result, Err(PlotError::CountMismatch { inputs: 2, styles: 3 })));
        assert!(!g.output.exists());
    }

    #[test]
    fn test_missing_output_directory_surfaces_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut g = group(dir.path(), 3);
        g.output = dir.path().join("saved_plots").join("load_vs_mass.pdf");
        assert!(process_group(&g, &StyleContext::default(), &HeadlessPreview).is_err());
    }

    #[test]
    fn test_pdf_written_and_non_empty() {
        if !fonts_available() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let g = group(dir.path(), 3);
        let preview = SvgFilePreview {
            dir: dir.path().to_path_buf(),
        };
        let style = StyleContext {
            font_family: "sans-serif".to_string(),
            ..StyleContext::default()
        };

        let report = process_group(&g, &style, &preview).unwrap();
        assert_eq!(report.series.len(), 3);
        assert_eq!(report.output, g.output);

        let pdf = fs::read(&g.output).unwrap();
        assert!(!pdf.is_empty());
        assert!(pdf.starts_with(b"%PDF"));

        let svg = fs::read_to_string(dir.path().join("load_vs_mass.svg")).unwrap();
        assert!(svg.contains("3 Phalanges"));
    }

    #[test]
    fn test_all_missing_data_still_exports_placeholder() {
        if !fonts_available() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let mut g = group(dir.path(), 3);
        for path in &g.inputs {
            fs::write(path, "a\nb\nmass [kg];t1;t2\n-;-;-\n").unwrap();
        }
        g.output = dir.path().join("empty.pdf");
        process_group(&g, &StyleContext::default(), &HeadlessPreview).unwrap();
        assert!(fs::metadata(&g.output).unwrap().len() > 0);
    }
}

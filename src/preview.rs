// src/preview.rs

// On-screen display is a side channel: headless runs skip it, otherwise the rendered
// SVG is dropped into a directory where a viewer can pick it up.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::is_plain_file_stem;
use crate::error::{PlotError, PlotResult};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreviewMode {
    #[default]
    None,
    Svg { dir: PathBuf },
}

pub trait PreviewSink {
    fn show(&self, chart_name: &str, svg: &str) -> PlotResult<()>;
}

pub struct HeadlessPreview;

impl PreviewSink for HeadlessPreview {
    fn show(&self, chart_name: &str, _svg: &str) -> PlotResult<()> {
        log::debug!("Headless run, no preview for '{chart_name}'.");
        Ok(())
    }
}

pub struct SvgFilePreview {
    pub dir: PathBuf,
}

impl PreviewSink for SvgFilePreview {
    fn show(&self, chart_name: &str, svg: &str) -> PlotResult<()> {
        if !is_plain_file_stem(chart_name) {
            return Err(PlotError::Config(format!(
                "preview name '{chart_name}' is not a plain file name"
            )));
        }
        let path = self.dir.join(format!("{chart_name}.svg"));
        fs::write(&path, svg).map_err(|source| PlotError::Io {
            path: path.clone(),
            source,
        })?;
        log::info!("  Preview written to '{}'.", path.display());
        Ok(())
    }
}

impl PreviewMode {
    pub fn sink(&self) -> Box<dyn PreviewSink> {
        match self {
            PreviewMode::None => Box::new(HeadlessPreview),
            PreviewMode::Svg { dir } => Box::new(SvgFilePreview { dir: dir.clone() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_preview_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = PreviewMode::Svg {
            dir: dir.path().to_path_buf(),
        }
        .sink();
        sink.show("chart", "<svg/>").unwrap();
        let written = fs::read_to_string(dir.path().join("chart.svg")).unwrap();
        assert_eq!(written, "<svg/>");
    }

    #[test]
    fn test_svg_preview_stays_inside_its_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("previews");
        fs::create_dir(&dir).unwrap();
        let sink = SvgFilePreview { dir: dir.clone() };
        for name in ["../escaped", "sub/chart", ".."] {
            assert!(sink.show(name, "<svg/>").is_err(), "name {name:?} should be rejected");
        }
        assert!(!root.path().join("escaped.svg").exists());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[test]
    fn test_headless_preview_is_noop() {
        assert!(PreviewMode::None.sink().show("chart", "<svg/>").is_ok());
    }
}

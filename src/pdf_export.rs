// src/pdf_export.rs

use std::fs;
use std::path::Path;

use svg2pdf::usvg;
use svg2pdf::{ConversionOptions, PageOptions};

use crate::error::{PlotError, PlotResult};

/// Converts a rendered SVG document into a single-page PDF.
pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>, String> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(svg, &options).map_err(|e| format!("invalid SVG: {e}"))?;
    svg2pdf::to_pdf(&tree, ConversionOptions::default(), PageOptions::default())
        .map_err(|e| format!("PDF conversion failed: {e:?}"))
}

/// Writes `svg` as a PDF at `path`. The parent directory must already exist; the
/// write is not atomic.
pub fn export_pdf(svg: &str, path: &Path) -> PlotResult<()> {
    let pdf = svg_to_pdf(svg).map_err(|message| PlotError::Export {
        path: path.to_path_buf(),
        message,
    })?;
    fs::write(path, &pdf).map_err(|source| PlotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("  Plot saved as '{}' ({} bytes).", path.display(), pdf.len());
    Ok(())
}

// src/style.rs

// Process-wide chart styling. The context is installed once at startup and every
// chart drawn afterwards borrows the same immutable instance.

use std::sync::OnceLock;

use plotters::style::{Color, RGBAColor, RGBColor};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FONT_FAMILY, DEFAULT_GRID_ALPHA, DEFAULT_GRID_STROKE_WIDTH, DEFAULT_LABEL_FONT_SIZE,
    LEGEND_FONT_SIZE_OFFSET,
};

const GRID_BASE_COLOR: RGBColor = RGBColor(176, 176, 176);

static GLOBAL_STYLE: OnceLock<StyleContext> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleContext {
    pub font_family: String,
    pub label_font_size: u32,
    pub grid_visible: bool,
    pub grid_alpha: f64,
    pub grid_stroke_width: u32,
}

impl Default for StyleContext {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            label_font_size: DEFAULT_LABEL_FONT_SIZE,
            grid_visible: true,
            grid_alpha: DEFAULT_GRID_ALPHA,
            grid_stroke_width: DEFAULT_GRID_STROKE_WIDTH,
        }
    }
}

impl StyleContext {
    /// Installs `style` as the process-wide context. A second call keeps the first
    /// context and returns it unchanged.
    pub fn install(style: StyleContext) -> &'static StyleContext {
        let installed = GLOBAL_STYLE.get_or_init(|| style.clone());
        if *installed != style {
            log::warn!("Style context already initialized; ignoring the later configuration.");
        }
        installed
    }

    pub fn legend_font_size(&self) -> u32 {
        self.label_font_size.saturating_sub(LEGEND_FONT_SIZE_OFFSET).max(1)
    }

    pub fn grid_color(&self) -> RGBAColor {
        GRID_BASE_COLOR.mix(self.grid_alpha.clamp(0.0, 1.0))
    }

    // Tuple form accepted by plotters' IntoFont.
    pub fn label_font(&self) -> (&str, f64) {
        (self.font_family.as_str(), f64::from(self.label_font_size))
    }

    pub fn legend_font(&self) -> (&str, f64) {
        (self.font_family.as_str(), f64::from(self.legend_font_size()))
    }
}

// src/colors.rs

use plotters::style::RGBColor;

use crate::error::{PlotError, PlotResult};

// Named colors use the CSS values, so "green" is the dark web green and not pure #00FF00.
const NAMED_COLORS: [(&str, RGBColor); 12] = [
    ("black", RGBColor(0, 0, 0)),
    ("blue", RGBColor(0, 0, 255)),
    ("brown", RGBColor(165, 42, 42)),
    ("cyan", RGBColor(0, 255, 255)),
    ("gray", RGBColor(128, 128, 128)),
    ("green", RGBColor(0, 128, 0)),
    ("magenta", RGBColor(255, 0, 255)),
    ("olive", RGBColor(128, 128, 0)),
    ("orange", RGBColor(255, 165, 0)),
    ("purple", RGBColor(128, 0, 128)),
    ("red", RGBColor(255, 0, 0)),
    ("yellow", RGBColor(255, 255, 0)),
];

/// Parses a color given either by name (`"blue"`) or as `#RRGGBB`.
pub fn parse_color(spec: &str) -> PlotResult<RGBColor> {
    let trimmed = spec.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| PlotError::Config(format!("bad hex color '{spec}'")));
    }
    let lower = trimmed.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, color)| *color)
        .ok_or_else(|| PlotError::Config(format!("unknown color '{spec}'")))
}

fn parse_hex(hex: &str) -> Option<RGBColor> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

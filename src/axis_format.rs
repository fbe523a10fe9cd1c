// src/axis_format.rs

// Y-axis tick formatting with a shared power-of-ten offset, in the manner of a
// scalar formatter with power limits: ticks are divided by 10^n and the axis label
// carries the ×10^n factor whenever the data magnitude leaves the limit window.

use crate::constants::{SCI_POWER_LIMITS, Y_LABEL_COUNT};

const DEFAULT_TICK_DECIMALS: usize = 2;
const MAX_TICK_DECIMALS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScientificFormatter {
    order_of_magnitude: i32,
    decimals: usize,
}

impl ScientificFormatter {
    /// Picks the exponent for an axis spanning `min..max`.
    ///
    /// With limits `(lo, hi)` the exponent is `floor(log10(max |y|))` when it is
    /// `<= lo` or `>= hi`, and zero (plain labels) otherwise. Tick precision assumes
    /// the span is split into `Y_LABEL_COUNT` steps; see [`Self::with_tick_step`].
    pub fn for_range(min: f64, max: f64, limits: (i32, i32)) -> Self {
        let max_abs = min.abs().max(max.abs());
        let order_of_magnitude = if max_abs.is_finite() && max_abs > 0.0 {
            let oom = max_abs.log10().floor() as i32;
            if oom <= limits.0 || oom >= limits.1 {
                oom
            } else {
                0
            }
        } else {
            0
        };
        let formatter = Self {
            order_of_magnitude,
            decimals: DEFAULT_TICK_DECIMALS,
        };
        formatter.with_tick_step((max - min).abs() / Y_LABEL_COUNT as f64)
    }

    /// Sets the label precision from the distance between neighbouring ticks, so that
    /// distinct ticks never share a label. Non-positive steps keep the current precision.
    pub fn with_tick_step(mut self, step: f64) -> Self {
        if step.is_finite() && step > 0.0 {
            let scaled = step / 10f64.powi(self.order_of_magnitude);
            let digits = -scaled.log10().floor();
            self.decimals = if digits > 0.0 {
                (digits as usize).min(MAX_TICK_DECIMALS)
            } else {
                0
            };
        }
        self
    }

    pub fn for_axis(min: f64, max: f64) -> Self {
        Self::for_range(min, max, SCI_POWER_LIMITS)
    }

    pub fn order_of_magnitude(&self) -> i32 {
        self.order_of_magnitude
    }

    pub fn decimals(&self) -> usize {
        self.decimals
    }

    pub fn is_scientific(&self) -> bool {
        self.order_of_magnitude != 0
    }

    pub fn format_tick(&self, y: f64) -> String {
        let scaled = y / 10f64.powi(self.order_of_magnitude);
        let text = format!("{:.*}", self.decimals, scaled);
        let text = if text.contains('.') {
            text.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            text
        };
        if text == "-0" {
            "0".to_string()
        } else {
            text
        }
    }

    /// Axis description with the offset factor appended when scaling is active.
    pub fn axis_label(&self, base: &str) -> String {
        if self.is_scientific() {
            format!("{base} (×10^{})", self.order_of_magnitude)
        } else {
            base.to_string()
        }
    }
}

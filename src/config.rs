//! Rendering configuration for the ruler.
//!
//! Stored as JSON by the GUI and overridable from the command line. Unknown or
//! missing fields fall back to their defaults so older stored configurations
//! keep loading.

use serde::{Deserialize, Serialize};

use crate::measurement::{LabelPlacement, OverlayStyle};
use crate::theme::{with_alpha, ThemeColors};
use crate::ticks::{TickStyle, DEFAULT_OFFSET_ALONG};

/// Visual parameters of the ruler and its overlays.
///
/// Lengths are in density-independent points unless noted otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerConfig {
    /// Major tick length on the main ruler
    pub tick_length: f32,
    /// Major tick length on the calibration dialog's strip
    pub preview_tick_length: f32,
    /// Along-axis offset of the first tick, in pixels
    pub offset_along: f32,
    /// Font size of tick labels
    pub tick_font_size: f32,
    /// Font size of measurement readouts
    pub label_font_size: f32,
    /// Horizontal inset of measurement readouts
    pub label_inset: f32,
    /// Top inset of measurement readouts
    pub label_top: f32,
    /// Opacity of measurement overlays, 0.0 to 1.0
    pub overlay_alpha: f32,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            tick_length: 30.0,
            preview_tick_length: 30.0,
            offset_along: DEFAULT_OFFSET_ALONG,
            tick_font_size: 16.0,
            label_font_size: 14.0,
            label_inset: 20.0,
            label_top: 10.0,
            overlay_alpha: 0.85,
        }
    }
}

impl RulerConfig {
    /// Tick style for the main ruler.
    pub fn tick_style(&self, px_per_dp: f32, colors: &ThemeColors) -> TickStyle {
        self.tick_style_with_length(self.tick_length, px_per_dp, colors)
    }

    /// Tick style for the calibration dialog's strip.
    pub fn preview_tick_style(&self, px_per_dp: f32, colors: &ThemeColors) -> TickStyle {
        self.tick_style_with_length(self.preview_tick_length, px_per_dp, colors)
    }

    fn tick_style_with_length(&self, tick_length: f32, px_per_dp: f32, colors: &ThemeColors) -> TickStyle {
        TickStyle {
            tick_length,
            px_per_dp,
            offset_across: 0.0,
            offset_along: self.offset_along,
            font_size: self.tick_font_size * px_per_dp,
            bar_color: colors.primary,
            tick_color: colors.on_primary,
        }
    }

    /// Overlay colors and readout placement.
    pub fn overlay_style(&self, px_per_dp: f32, colors: &ThemeColors) -> OverlayStyle {
        let alpha = (self.overlay_alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        OverlayStyle {
            placement: LabelPlacement {
                inset: self.label_inset * px_per_dp,
                top: self.label_top * px_per_dp,
            },
            font_size: self.label_font_size * px_per_dp,
            fill: with_alpha(colors.secondary, alpha),
            text_color: colors.primary,
        }
    }
}

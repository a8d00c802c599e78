//! Interactive measurement overlays.
//!
//! Two overlays share the same drag protocol and display conventions:
//! - `MeasurementRectangle`: moves near its center, resizes on either axis
//!   elsewhere, clamped to the canvas on all four edges
//! - `MeasurementLine`: a band along the ruler's primary axis that only resizes
//!
//! All geometry is in canvas pixels.

mod line;
mod rectangle;

pub use line::MeasurementLine;
pub use rectangle::{DragAction, MeasurementRectangle, MOVE_RADIUS_CAP};

use egui::{Align2, Color32, Pos2, Vec2};

use crate::canvas::{Orientation, TextStyle};

/// Smallest overlay extent reachable by dragging, as a fraction of one unit.
pub const MIN_SIZE_UNITS: f32 = 0.1;

/// One incremental pointer-drag step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEvent {
    /// Absolute pointer position after the step
    pub position: Pos2,
    /// Movement since the previous step
    pub delta: Vec2,
}

impl DragEvent {
    pub fn new(position: Pos2, delta: Vec2) -> Self {
        Self { position, delta }
    }
}

/// Where the measurement readout goes relative to the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    /// Horizontal distance from the near edge, in pixels
    pub inset: f32,
    /// Distance from the top edge, in pixels
    pub top: f32,
}

impl LabelPlacement {
    /// Anchor point and alignment of the readout.
    ///
    /// Landscape puts it left-aligned at the top-left corner, portrait
    /// right-aligned at the top-right corner.
    pub fn anchor(&self, canvas_size: Vec2, orientation: Orientation) -> (Pos2, Align2) {
        match orientation {
            Orientation::Landscape => (Pos2::new(self.inset, self.top), Align2::LEFT_TOP),
            Orientation::Portrait => (
                Pos2::new(canvas_size.x - self.inset, self.top),
                Align2::RIGHT_TOP,
            ),
        }
    }
}

/// Colors and readout placement shared by both overlays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub placement: LabelPlacement,
    pub font_size: f32,
    /// Semi-transparent fill of the measured area
    pub fill: Color32,
    pub text_color: Color32,
}

impl OverlayStyle {
    /// Readout anchor and text style with alignment resolved for `orientation`.
    pub fn label_style(&self, canvas_size: Vec2, orientation: Orientation) -> (Pos2, TextStyle) {
        let (anchor, align) = self.placement.anchor(canvas_size, orientation);
        (anchor, TextStyle::new(self.font_size, self.text_color, align))
    }
}

/// Overflow of the span `[center - extent/2, center + extent/2]` past `[0, limit]`.
///
/// Returns `(near, far)`; each is positive when that end is out of bounds.
pub(crate) fn overflow(center: f32, extent: f32, limit: f32) -> (f32, f32) {
    let near = -(center - 0.5 * extent);
    let far = center + 0.5 * extent - limit;
    (near, far)
}

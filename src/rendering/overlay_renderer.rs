//! Measurement overlay rendering

use ruler::{Canvas, OverlayStyle, UnitChoice};

use crate::state::OverlayState;

/// Renders the active overlay, clamping a rectangle to the canvas first.
pub fn render_overlay(
    canvas: &mut (impl Canvas + ?Sized),
    overlay: &mut OverlayState,
    pixels_per_unit: f32,
    unit: UnitChoice,
    style: &OverlayStyle,
) {
    match overlay {
        OverlayState::None => {}
        OverlayState::Line(line) => line.paint(canvas, pixels_per_unit, unit, style),
        OverlayState::Rectangle(rectangle) => rectangle.paint(canvas, pixels_per_unit, unit, style),
    }
}

//! Drag handling for the measurement overlays.
//!
//! Pointer positions and deltas arrive in egui points and are converted to
//! canvas pixels before reaching the overlay geometry.

use eframe::egui;
use ruler::{DragEvent, Orientation};

use crate::rendering::egui_canvas::EguiCanvas;
use crate::state::OverlayState;

/// Feeds a canvas drag to the active overlay.
///
/// # Arguments
/// * `canvas_response` - Response of the full-window canvas
/// * `pixels_per_point` - Physical pixels per egui point
/// * `pixels_per_unit` - Live calibration scale, sets the resize floor
/// * `overlay` - Active overlay (mutable)
///
/// # Returns
/// True if the overlay geometry changed
pub fn handle_overlay_input(
    canvas_response: &egui::Response,
    pixels_per_point: f32,
    pixels_per_unit: f32,
    overlay: &mut OverlayState,
) -> bool {
    if !canvas_response.dragged() {
        return false;
    }
    let Some(pointer) = canvas_response.interact_pointer_pos() else {
        return false;
    };

    let canvas_rect = canvas_response.rect;
    let event = DragEvent::new(
        EguiCanvas::to_canvas(canvas_rect, pixels_per_point, pointer),
        canvas_response.drag_delta() * pixels_per_point,
    );
    apply_drag(overlay, event, canvas_rect.size() * pixels_per_point, pixels_per_unit)
}

/// Applies one drag step in canvas pixels.
///
/// The resize floor is re-derived from `pixels_per_unit` first, so it stays a
/// tenth of the current unit after a unit or factor change.
pub fn apply_drag(
    overlay: &mut OverlayState,
    event: DragEvent,
    canvas_size: egui::Vec2,
    pixels_per_unit: f32,
) -> bool {
    match overlay {
        OverlayState::None => false,
        OverlayState::Rectangle(rectangle) => {
            rectangle.rescale_floor(pixels_per_unit);
            let action = rectangle.apply_drag(event);
            rectangle.clamp_to(canvas_size);
            log::debug!("rectangle drag at {:?}: {action:?}", event.position);
            true
        }
        OverlayState::Line(line) => {
            line.rescale_floor(pixels_per_unit);
            line.apply_drag(event, Orientation::from_size(canvas_size), canvas_size)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruler::{MeasurementLine, MeasurementRectangle};

    const CANVAS: egui::Vec2 = egui::vec2(400.0, 800.0);

    #[test]
    fn test_no_overlay_ignores_drag() {
        let mut overlay = OverlayState::None;
        let event = DragEvent::new(egui::pos2(10.0, 10.0), egui::vec2(5.0, 5.0));
        assert!(!apply_drag(&mut overlay, event, CANVAS, 100.0));
    }

    #[test]
    fn test_rectangle_drag_is_clamped() {
        let rectangle = MeasurementRectangle::new(egui::pos2(350.0, 400.0), egui::vec2(80.0, 80.0), 10.0);
        let mut overlay = OverlayState::Rectangle(rectangle);

        // near the center: move right by 40, past the right edge
        let event = DragEvent::new(egui::pos2(355.0, 400.0), egui::vec2(40.0, 0.0));
        assert!(apply_drag(&mut overlay, event, CANVAS, 100.0));

        match overlay {
            OverlayState::Rectangle(rectangle) => assert!(rectangle.rect().max.x <= CANVAS.x + 1e-3),
            other => panic!("expected rectangle, got {other:?}"),
        }
    }

    #[test]
    fn test_floor_tracks_live_scale() {
        // created at 100 px per unit, now drawn at 400 px per unit
        let mut overlay = OverlayState::Line(MeasurementLine::initial(100.0, ruler::UnitChoice::Centimeter, 10.0));
        let event = DragEvent::new(egui::pos2(100.0, 400.0), egui::vec2(0.0, -170.0));
        assert!(!apply_drag(&mut overlay, event, CANVAS, 400.0));

        match overlay {
            OverlayState::Line(line) => assert_eq!(line.extent(), 200.0),
            other => panic!("expected line, got {other:?}"),
        }
    }

    #[test]
    fn test_line_drag_extends() {
        let mut overlay = OverlayState::Line(MeasurementLine::new(300.0, 200.0, 10.0));
        let event = DragEvent::new(egui::pos2(100.0, 390.0), egui::vec2(0.0, 20.0));
        assert!(apply_drag(&mut overlay, event, CANVAS, 100.0));

        match overlay {
            OverlayState::Line(line) => assert_eq!(line.extent(), 220.0),
            other => panic!("expected line, got {other:?}"),
        }
    }
}

use egui::{Pos2, Rect, Vec2};

use super::{overflow, DragEvent, OverlayStyle, MIN_SIZE_UNITS};
use crate::canvas::{Canvas, Orientation};
use crate::units::UnitChoice;

/// A band across the canvas measuring one length along the ruler axis.
///
/// The primary axis is y in portrait and x in landscape; the band spans the
/// whole canvas on the other axis.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementLine {
    center: f32,
    extent: f32,
    /// Exclusive lower bound for the extent
    min_extent: f32,
}

impl MeasurementLine {
    pub fn new(center: f32, extent: f32, min_extent: f32) -> Self {
        Self {
            center,
            extent,
            min_extent,
        }
    }

    /// Creates the initial band: 2 cm or 1 inch long, centered 1.5 lengths
    /// (plus the ruler's along offset) from the origin.
    pub fn initial(pixels_per_unit: f32, unit: UnitChoice, offset_along: f32) -> Self {
        let extent = pixels_per_unit * unit.initial_overlay_units();
        Self::new(1.5 * extent + offset_along, extent, MIN_SIZE_UNITS * pixels_per_unit)
    }

    pub fn center(&self) -> f32 {
        self.center
    }

    pub fn extent(&self) -> f32 {
        self.extent
    }

    /// Sets the extent floor to a tenth of the current unit.
    pub fn rescale_floor(&mut self, pixels_per_unit: f32) {
        self.min_extent = MIN_SIZE_UNITS * pixels_per_unit;
    }

    /// Resizes along the primary axis, growing toward the side the pointer
    /// is on, then trims both ends to `[0, axis_limit]`.
    ///
    /// Returns false (and changes nothing) when the step would shrink the
    /// band to the minimum extent or below.
    pub fn apply_drag(&mut self, event: DragEvent, orientation: Orientation, canvas_size: Vec2) -> bool {
        let (position, delta) = match orientation {
            Orientation::Landscape => (event.position.x, event.delta.x),
            Orientation::Portrait => (event.position.y, event.delta.y),
        };

        let sign = if position < self.center { -1.0 } else { 1.0 };
        let extent = self.extent + sign * delta;
        if extent <= self.min_extent {
            return false;
        }

        let (center, extent) = trim(self.center + 0.5 * delta, extent, axis_limit(orientation, canvas_size));
        self.center = center;
        self.extent = extent;
        true
    }

    /// Pulls both ends of the band back onto the canvas.
    ///
    /// A band lying wholly past an edge keeps its extent (capped at the axis
    /// length) and is moved back inside instead.
    pub fn clamp_to(&mut self, orientation: Orientation, canvas_size: Vec2) {
        let limit = axis_limit(orientation, canvas_size);
        let (center, extent) = trim(self.center, self.extent, limit);
        if extent > 0.0 {
            self.center = center;
            self.extent = extent;
        } else {
            self.extent = self.extent.min(limit);
            self.center = self.center.clamp(0.5 * self.extent, limit - 0.5 * self.extent);
        }
    }

    /// Screen rectangle of the band.
    pub fn rect(&self, orientation: Orientation, canvas_size: Vec2) -> Rect {
        let start = self.center - 0.5 * self.extent;
        match orientation {
            Orientation::Landscape => Rect::from_min_size(
                Pos2::new(start, 0.0),
                Vec2::new(self.extent, canvas_size.y),
            ),
            Orientation::Portrait => Rect::from_min_size(
                Pos2::new(0.0, start),
                Vec2::new(canvas_size.x, self.extent),
            ),
        }
    }

    /// Readout: `"L unit"`.
    pub fn label(&self, pixels_per_unit: f32, unit: UnitChoice) -> String {
        format!("{:.2} {unit}", self.extent / pixels_per_unit)
    }

    /// Clamps to the canvas, then draws the readout and the band.
    pub fn paint(
        &mut self,
        canvas: &mut (impl Canvas + ?Sized),
        pixels_per_unit: f32,
        unit: UnitChoice,
        style: &OverlayStyle,
    ) {
        let canvas_size = canvas.size();
        let orientation = Orientation::from_size(canvas_size);
        self.clamp_to(orientation, canvas_size);

        let (anchor, text_style) = style.label_style(canvas_size, orientation);
        canvas.draw_text(anchor, &self.label(pixels_per_unit, unit), &text_style);
        canvas.draw_rect(self.rect(orientation, canvas_size), style.fill);
    }
}

fn axis_limit(orientation: Orientation, canvas_size: Vec2) -> f32 {
    match orientation {
        Orientation::Landscape => canvas_size.x,
        Orientation::Portrait => canvas_size.y,
    }
}

/// Trims the span `(center, extent)` to `[0, limit]`, moving the center
/// inward by half of each overflow.
fn trim(mut center: f32, mut extent: f32, limit: f32) -> (f32, f32) {
    let (near, far) = overflow(center, extent, limit);
    if near > 0.0 {
        extent -= near;
        center += 0.5 * near;
    }
    if far > 0.0 {
        extent -= far;
        center -= 0.5 * far;
    }
    (center, extent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;
    use crate::measurement::LabelPlacement;
    use egui::Color32;

    fn style() -> OverlayStyle {
        OverlayStyle {
            placement: LabelPlacement { inset: 20.0, top: 10.0 },
            font_size: 14.0,
            fill: Color32::from_rgba_unmultiplied(0, 0, 255, 200),
            text_color: Color32::WHITE,
        }
    }

    const CANVAS: Vec2 = Vec2::new(400.0, 800.0);

    fn drag(y: f32, dy: f32) -> DragEvent {
        DragEvent::new(Pos2::new(100.0, y), Vec2::new(0.0, dy))
    }

    #[test]
    fn test_initial_geometry() {
        let line = MeasurementLine::initial(100.0, UnitChoice::Centimeter, 10.0);
        assert_eq!(line.extent(), 200.0);
        assert_eq!(line.center(), 310.0);
    }

    #[test]
    fn test_drag_below_center_extends_downwards() {
        let mut line = MeasurementLine::new(300.0, 200.0, 10.0);
        assert!(line.apply_drag(drag(390.0, 20.0), Orientation::Portrait, CANVAS));
        assert_eq!(line.extent(), 220.0);
        assert_eq!(line.center(), 310.0);
        // top end stays put
        assert_eq!(line.center() - 0.5 * line.extent(), 200.0);
    }

    #[test]
    fn test_drag_above_center_extends_upwards() {
        let mut line = MeasurementLine::new(300.0, 200.0, 10.0);
        assert!(line.apply_drag(drag(210.0, -20.0), Orientation::Portrait, CANVAS));
        assert_eq!(line.extent(), 220.0);
        assert_eq!(line.center() + 0.5 * line.extent(), 400.0);
    }

    #[test]
    fn test_drag_below_minimum_is_ignored() {
        let mut line = MeasurementLine::new(300.0, 20.0, 10.0);
        assert!(!line.apply_drag(drag(305.0, -15.0), Orientation::Portrait, CANVAS));
        assert_eq!(line, MeasurementLine::new(300.0, 20.0, 10.0));
    }

    #[test]
    fn test_far_edge_is_trimmed() {
        let mut line = MeasurementLine::new(750.0, 80.0, 10.0);
        assert!(line.apply_drag(drag(790.0, 30.0), Orientation::Portrait, CANVAS));
        assert_eq!(line.center() + 0.5 * line.extent(), 800.0);
        assert_eq!(line.extent(), 90.0);
    }

    #[test]
    fn test_near_edge_is_trimmed() {
        let mut line = MeasurementLine::new(30.0, 50.0, 10.0);
        assert!(line.apply_drag(drag(10.0, -20.0), Orientation::Portrait, CANVAS));
        assert_eq!(line.center() - 0.5 * line.extent(), 0.0);
        assert_eq!(line.extent(), 55.0);
    }

    #[test]
    fn test_landscape_uses_x_axis() {
        let canvas = Vec2::new(800.0, 400.0);
        let mut line = MeasurementLine::new(300.0, 200.0, 10.0);
        let event = DragEvent::new(Pos2::new(390.0, 50.0), Vec2::new(10.0, 300.0));
        assert!(line.apply_drag(event, Orientation::Landscape, canvas));
        assert_eq!(line.extent(), 210.0);

        let rect = line.rect(Orientation::Landscape, canvas);
        assert_eq!(rect.height(), 400.0);
        assert_eq!(rect.width(), 210.0);
    }

    #[test]
    fn test_initial_line_fits_small_canvas() {
        let ppu = 420.0 / 2.54;
        let mut line = MeasurementLine::initial(ppu, UnitChoice::Centimeter, 10.0);
        let mut canvas = RecordingCanvas::new(400.0, 500.0);
        line.paint(&mut canvas, ppu, UnitChoice::Centimeter, &style());

        let (rect, _) = canvas.rects().next().unwrap();
        assert!((rect.max.y - 500.0).abs() < 1e-3);
        assert!((rect.min.y - (ppu * 2.0 + 10.0)).abs() < 1e-3);

        let (_, text, _) = canvas.texts().next().unwrap();
        assert_eq!(text, format!("{:.2} cm", line.extent() / ppu));
        assert_ne!(text, "2.00 cm");
    }

    #[test]
    fn test_clamp_after_canvas_shrinks() {
        let mut line = MeasurementLine::new(300.0, 200.0, 10.0);
        line.clamp_to(Orientation::Portrait, Vec2::new(400.0, 250.0));
        assert_eq!(line.extent(), 50.0);
        assert_eq!(line.center(), 225.0);

        // in bounds: unchanged
        let before = line.clone();
        line.clamp_to(Orientation::Portrait, Vec2::new(400.0, 250.0));
        assert_eq!(line, before);
    }

    #[test]
    fn test_clamp_band_wholly_past_edge() {
        let mut line = MeasurementLine::new(600.0, 100.0, 10.0);
        line.clamp_to(Orientation::Portrait, Vec2::new(400.0, 300.0));
        assert_eq!(line.extent(), 100.0);
        assert_eq!(line.center(), 250.0);
    }

    #[test]
    fn test_rescaled_floor_blocks_shrinking() {
        let mut line = MeasurementLine::initial(100.0, UnitChoice::Centimeter, 10.0);
        line.rescale_floor(1000.0);
        // floor is now 100 px: shrinking 200 -> 90 is ignored
        assert!(!line.apply_drag(drag(400.0, -110.0), Orientation::Portrait, CANVAS));
        assert_eq!(line.extent(), 200.0);
    }

    #[test]
    fn test_label_format() {
        let line = MeasurementLine::new(300.0, 254.0, 10.0);
        assert_eq!(line.label(100.0, UnitChoice::Inch), "2.54 inch");
    }
}

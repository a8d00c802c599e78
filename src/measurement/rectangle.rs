use egui::{Pos2, Rect, Vec2};

use super::{overflow, DragEvent, OverlayStyle, MIN_SIZE_UNITS};
use crate::canvas::{Canvas, Orientation};
use crate::units::UnitChoice;

/// Upper bound of the move-threshold radius around the center, in pixels.
pub const MOVE_RADIUS_CAP: f32 = 100.0;

/// How a drag step was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragAction {
    Move,
    ResizeWidth,
    ResizeHeight,
}

/// A draggable rectangle measuring width, height and area.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRectangle {
    center: Pos2,
    size: Vec2,
    /// Width and height floor for resizing
    min_size: f32,
}

impl MeasurementRectangle {
    /// Creates a rectangle of explicit geometry.
    pub fn new(center: Pos2, size: Vec2, min_size: f32) -> Self {
        Self {
            center,
            size,
            min_size,
        }
    }

    /// Creates the initial square: 2 cm or 1 inch per side, placed one side
    /// length away from the top-left corner (plus the ruler's along offset).
    pub fn initial(pixels_per_unit: f32, unit: UnitChoice, offset_along: f32) -> Self {
        let side = pixels_per_unit * unit.initial_overlay_units();
        let center = Pos2::new(side + 0.5 * side, side + offset_along + 0.5 * side);
        Self::new(center, Vec2::splat(side), MIN_SIZE_UNITS * pixels_per_unit)
    }

    pub fn center(&self) -> Pos2 {
        self.center
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.center, self.size)
    }

    /// Sets the width and height floor to a tenth of the current unit.
    pub fn rescale_floor(&mut self, pixels_per_unit: f32) {
        self.min_size = MIN_SIZE_UNITS * pixels_per_unit;
    }

    /// Radius around the center inside which a drag moves the rectangle.
    pub fn move_radius(&self) -> f32 {
        MOVE_RADIUS_CAP.min(0.5 * (self.size.x + self.size.y))
    }

    /// Applies one drag step: move near the center, otherwise resize along
    /// the dominant drag direction keeping the opposite edge in place.
    pub fn apply_drag(&mut self, event: DragEvent) -> DragAction {
        let DragEvent { position, delta } = event;
        let distance = self.center.distance(position);

        if distance < self.move_radius() {
            self.center += delta;
            DragAction::Move
        } else if delta.x.abs() > delta.y.abs() {
            let sign = if position.x > self.center.x { 1.0 } else { -1.0 };
            self.center.x += 0.5 * delta.x;
            self.size.x = self.min_size.max(self.size.x + sign * delta.x);
            DragAction::ResizeWidth
        } else {
            let sign = if position.y < self.center.y { -1.0 } else { 1.0 };
            self.center.y += 0.5 * delta.y;
            self.size.y = self.min_size.max(self.size.y + sign * delta.y);
            DragAction::ResizeHeight
        }
    }

    /// Pulls every edge that lies outside `bounds` back onto it.
    ///
    /// Each overflowing edge shrinks its dimension by the overflow and moves
    /// the center inward by half of it. All four overflows are measured
    /// before any adjustment.
    pub fn clamp_to(&mut self, bounds: Vec2) {
        let (left, right) = overflow(self.center.x, self.size.x, bounds.x);
        let (top, bottom) = overflow(self.center.y, self.size.y, bounds.y);

        if right > 0.0 {
            self.center.x -= 0.5 * right;
            self.size.x -= right;
        }
        if left > 0.0 {
            self.center.x += 0.5 * left;
            self.size.x -= left;
        }
        if top > 0.0 {
            self.center.y += 0.5 * top;
            self.size.y -= top;
        }
        if bottom > 0.0 {
            self.center.y -= 0.5 * bottom;
            self.size.y -= bottom;
        }
    }

    /// Width and height converted to units.
    pub fn dimensions(&self, pixels_per_unit: f32) -> (f32, f32) {
        (self.size.x / pixels_per_unit, self.size.y / pixels_per_unit)
    }

    /// Two-line readout: `"W x H unit"` then `"A unit²"`.
    pub fn label(&self, pixels_per_unit: f32, unit: UnitChoice) -> String {
        let (w, h) = self.dimensions(pixels_per_unit);
        format!("{w:.2} x {h:.2} {unit}\n{:.2} {unit}\u{00B2}", w * h)
    }

    /// Clamps to the canvas, then draws the readout and the rectangle.
    pub fn paint(
        &mut self,
        canvas: &mut (impl Canvas + ?Sized),
        pixels_per_unit: f32,
        unit: UnitChoice,
        style: &OverlayStyle,
    ) {
        let canvas_size = canvas.size();
        self.clamp_to(canvas_size);

        let orientation = Orientation::from_size(canvas_size);
        let (anchor, text_style) = style.label_style(canvas_size, orientation);
        canvas.draw_text(anchor, &self.label(pixels_per_unit, unit), &text_style);
        canvas.draw_rect(self.rect(), style.fill);
    }
}

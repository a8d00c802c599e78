//! Canvas adapter over an egui painter.
//!
//! The ruler draws in physical pixels with the origin at the top-left corner
//! of the canvas rect. egui paints in points, so every coordinate is divided
//! by the pixels-per-point ratio and offset by the rect origin.

use eframe::egui;
use egui::emath::Rot2;
use egui::epaint::TextShape;
use ruler::{Canvas, TextStyle};

/// Draws `Canvas` primitives into a rect of an egui painter.
pub struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
    /// Canvas area in points
    rect: egui::Rect,
    pixels_per_point: f32,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect, pixels_per_point: f32) -> Self {
        Self {
            painter,
            rect,
            pixels_per_point,
        }
    }

    /// Converts a screen position (points) into canvas pixels.
    pub fn to_canvas(rect: egui::Rect, pixels_per_point: f32, screen: egui::Pos2) -> egui::Pos2 {
        ((screen - rect.min) * pixels_per_point).to_pos2()
    }

    fn to_screen(&self, p: egui::Pos2) -> egui::Pos2 {
        self.rect.min + p.to_vec2() / self.pixels_per_point
    }
}

impl Canvas for EguiCanvas<'_> {
    fn size(&self) -> egui::Vec2 {
        self.rect.size() * self.pixels_per_point
    }

    fn draw_line(&mut self, from: egui::Pos2, to: egui::Pos2, stroke: egui::Stroke) {
        let stroke = egui::Stroke::new(stroke.width / self.pixels_per_point, stroke.color);
        self.painter
            .line_segment([self.to_screen(from), self.to_screen(to)], stroke);
    }

    fn draw_rect(&mut self, rect: egui::Rect, fill: egui::Color32) {
        let screen = egui::Rect::from_two_pos(self.to_screen(rect.min), self.to_screen(rect.max));
        self.painter.rect_filled(screen, 0.0, fill);
    }

    fn draw_text(&mut self, anchor: egui::Pos2, text: &str, style: &TextStyle) {
        let font_id = egui::FontId::proportional(style.font_size / self.pixels_per_point);
        let galley = self
            .painter
            .layout_no_wrap(text.to_string(), font_id, style.color);
        let anchor = self.to_screen(anchor);

        if style.angle == 0.0 {
            let text_rect = style.align.anchor_size(anchor, galley.size());
            self.painter.galley(text_rect.min, galley, style.color);
            return;
        }

        // TextShape rotates around its top-left corner; place that corner so
        // the aligned point of the rotated text lands on the anchor.
        let corner = style.align.anchor_size(egui::Pos2::ZERO, galley.size()).min.to_vec2();
        let pos = anchor + Rot2::from_angle(style.angle) * corner;
        self.painter
            .add(TextShape::new(pos, galley, style.color).with_angle(style.angle));
    }
}

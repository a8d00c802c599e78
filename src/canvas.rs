//! Drawing surface abstraction.
//!
//! The ruler core never talks to a GUI toolkit directly. It draws through the
//! `Canvas` trait in a pixel coordinate space whose origin is the top-left
//! corner of the surface. Implementations:
//! - the egui painter adapter in the GUI binary
//! - `RecordingCanvas`, which stores primitives for inspection
//! - `LandscapeFrame`, which rotates another canvas by -90 degrees

use egui::{Align2, Color32, Pos2, Rect, Stroke, Vec2};

/// Text appearance for `Canvas::draw_text`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f32,
    pub color: Color32,
    /// Which point of the text's bounding box sits on the anchor
    pub align: Align2,
    /// Clockwise rotation in radians around the anchor
    pub angle: f32,
}

impl TextStyle {
    pub fn new(font_size: f32, color: Color32, align: Align2) -> Self {
        Self {
            font_size,
            color,
            align,
            angle: 0.0,
        }
    }

    pub fn rotated(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }
}

/// A 2D pixel surface that can draw lines, filled rectangles and text.
pub trait Canvas {
    /// Width and height of the surface in pixels.
    fn size(&self) -> Vec2;

    fn draw_line(&mut self, from: Pos2, to: Pos2, stroke: Stroke);

    fn draw_rect(&mut self, rect: Rect, fill: Color32);

    fn draw_text(&mut self, anchor: Pos2, text: &str, style: &TextStyle);
}

/// Screen orientation, derived from the surface's aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Landscape when the surface is strictly wider than tall.
    pub fn from_size(size: Vec2) -> Self {
        if size.x > size.y {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    pub fn is_landscape(self) -> bool {
        self == Orientation::Landscape
    }
}

/// A primitive captured by `RecordingCanvas`.
#[derive(Debug, Clone, PartialEq)]
enum DrawCommand {
    Line { from: Pos2, to: Pos2, stroke: Stroke },
    Rect { rect: Rect, fill: Color32 },
    Text { anchor: Pos2, text: String, style: TextStyle },
}

/// Canvas that records every primitive instead of rasterizing it.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    size: Vec2,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            commands: Vec::new(),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = (Pos2, Pos2, Stroke)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Line { from, to, stroke } => Some((*from, *to, *stroke)),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (Rect, Color32)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Rect { rect, fill } => Some((*rect, *fill)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (Pos2, &str, &TextStyle)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { anchor, text, style } => Some((*anchor, text.as_str(), style)),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn draw_line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn draw_rect(&mut self, rect: Rect, fill: Color32) {
        self.commands.push(DrawCommand::Rect { rect, fill });
    }

    fn draw_text(&mut self, anchor: Pos2, text: &str, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            anchor,
            text: text.to_string(),
            style: *style,
        });
    }
}

/// Draws onto an inner canvas translated down by its height and rotated -90 degrees.
///
/// A point `(x, y)` in the frame lands on `(y, height - x)` of the inner
/// canvas, so a vertical ruler drawn in the frame runs along the bottom edge.
/// The frame reports the inner size with width and height swapped.
pub struct LandscapeFrame<'a, C: Canvas + ?Sized> {
    inner: &'a mut C,
}

impl<'a, C: Canvas + ?Sized> LandscapeFrame<'a, C> {
    pub fn new(inner: &'a mut C) -> Self {
        Self { inner }
    }

    fn map(&self, p: Pos2) -> Pos2 {
        Pos2::new(p.y, self.inner.size().y - p.x)
    }
}

impl<C: Canvas + ?Sized> Canvas for LandscapeFrame<'_, C> {
    fn size(&self) -> Vec2 {
        let inner = self.inner.size();
        Vec2::new(inner.y, inner.x)
    }

    fn draw_line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        let (from, to) = (self.map(from), self.map(to));
        self.inner.draw_line(from, to, stroke);
    }

    fn draw_rect(&mut self, rect: Rect, fill: Color32) {
        let mapped = Rect::from_two_pos(self.map(rect.min), self.map(rect.max));
        self.inner.draw_rect(mapped, fill);
    }

    fn draw_text(&mut self, anchor: Pos2, text: &str, style: &TextStyle) {
        let anchor = self.map(anchor);
        let style = style.rotated(style.angle - std::f32::consts::FRAC_PI_2);
        self.inner.draw_text(anchor, text, &style);
    }
}

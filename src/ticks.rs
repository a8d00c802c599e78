//! Ruler tick layout and rendering.
//!
//! Handles the ruler body: a background bar spanning the axis, one tick per
//! tenth of a unit in three tiers, and whole-unit labels next to major ticks.
//! Layout is computed in ruler-local coordinates where the axis runs along y
//! (vertical) or x (horizontal); horizontal ticks are the vertical ones with
//! their coordinates transposed.

use egui::{Align2, Color32, Pos2, Rect, Stroke, Vec2};

use crate::canvas::{Canvas, TextStyle};

/// Along-axis offset of the first tick, in pixels.
pub const DEFAULT_OFFSET_ALONG: f32 = 10.0;

/// Size class of a tick mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickTier {
    /// Every whole unit (every 10th tick); labeled
    Major,
    /// Every half unit
    Medium,
    Minor,
}

impl TickTier {
    pub fn for_index(index: u32) -> Self {
        if index % 10 == 0 {
            TickTier::Major
        } else if index % 5 == 0 {
            TickTier::Medium
        } else {
            TickTier::Minor
        }
    }

    /// Tick length relative to the major tick.
    pub fn length_ratio(self) -> f32 {
        match self {
            TickTier::Major => 1.0,
            TickTier::Medium => 0.8,
            TickTier::Minor => 0.7,
        }
    }
}

/// A single tick in ruler-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Tenth-unit count from the ruler origin
    pub index: u32,
    pub tier: TickTier,
    /// Position along the axis in pixels
    pub along: f32,
    /// Length across the axis in pixels
    pub length: f32,
    /// Whole-unit label, present on major ticks only
    pub label: Option<String>,
}

/// Number of whole tenth-unit steps that fit in `axis_length`.
///
/// `spacing` must be positive.
pub fn tick_count(axis_length: f32, spacing: f32) -> u32 {
    debug_assert!(spacing > 0.0, "tick spacing must be positive");
    if axis_length <= 0.0 {
        return 0;
    }
    (axis_length / spacing).floor() as u32
}

/// Lays out ticks `0..=tick_count(axis_length, spacing)`.
///
/// # Arguments
/// * `axis_length` - Length of the ruler axis in pixels
/// * `spacing` - Pixels per tenth of a unit
/// * `tick_length` - Major tick length in pixels
/// * `offset_along` - Position of tick zero along the axis
pub fn layout_ticks(axis_length: f32, spacing: f32, tick_length: f32, offset_along: f32) -> Vec<Tick> {
    let count = tick_count(axis_length, spacing);
    (0..=count)
        .map(|index| {
            let tier = TickTier::for_index(index);
            Tick {
                index,
                tier,
                along: spacing * index as f32 + offset_along,
                length: tick_length * tier.length_ratio(),
                label: (tier == TickTier::Major).then(|| (index / 10).to_string()),
            }
        })
        .collect()
}

/// Visual parameters of the ruler body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickStyle {
    /// Major tick length in density-independent points
    pub tick_length: f32,
    /// Pixels per density-independent point
    pub px_per_dp: f32,
    /// Across-axis offset of the ruler body, in pixels
    pub offset_across: f32,
    /// Along-axis offset of tick zero, in pixels
    pub offset_along: f32,
    pub font_size: f32,
    pub bar_color: Color32,
    pub tick_color: Color32,
}

impl TickStyle {
    fn tick_length_px(&self) -> f32 {
        self.tick_length * self.px_per_dp
    }

    /// Thickness of the background bar across the axis.
    pub fn bar_thickness(&self) -> f32 {
        2.5 * self.tick_length_px()
    }

    /// Stroke width of major ticks: `tick_length / 20` whole points.
    pub fn major_stroke(&self) -> f32 {
        (self.tick_length / 20.0).floor().max(1.0) * self.px_per_dp
    }

    /// Stroke width of medium and minor ticks: `tick_length / 30` whole points.
    pub fn minor_stroke(&self) -> f32 {
        (self.tick_length / 30.0).floor().max(1.0) * self.px_per_dp
    }

    /// Across-axis distance from the bar edge to the center of a label.
    pub fn label_offset(&self) -> f32 {
        1.5 * self.tick_length_px()
    }
}

/// Paints a ruler onto a canvas.
pub struct TickRenderer {
    pub style: TickStyle,
    /// True for a ruler whose axis runs top to bottom
    pub vertical: bool,
}

impl TickRenderer {
    pub fn new(style: TickStyle, vertical: bool) -> Self {
        Self { style, vertical }
    }

    /// Length of the ruler axis on `canvas`.
    pub fn axis_length(&self, canvas: &(impl Canvas + ?Sized)) -> f32 {
        let size = canvas.size();
        if self.vertical {
            size.y
        } else {
            size.x
        }
    }

    /// Draws the background bar, ticks and labels with ticks `spacing` pixels apart.
    pub fn paint(&self, canvas: &mut (impl Canvas + ?Sized), spacing: f32) {
        let style = &self.style;
        let axis_length = self.axis_length(canvas);

        let bar_size = Vec2::new(style.bar_thickness(), axis_length);
        let bar = Rect::from_min_size(Pos2::new(style.offset_across, 0.0), bar_size);
        canvas.draw_rect(self.orient_rect(bar), style.bar_color);

        let ticks = layout_ticks(axis_length, spacing, style.tick_length_px(), style.offset_along);
        for tick in &ticks {
            let start = Pos2::new(style.offset_across, tick.along);
            let end = Pos2::new(style.offset_across + tick.length, tick.along);
            let width = match tick.tier {
                TickTier::Major => style.major_stroke(),
                TickTier::Medium | TickTier::Minor => style.minor_stroke(),
            };
            canvas.draw_line(
                self.orient(start),
                self.orient(end),
                Stroke::new(width, style.tick_color),
            );

            if let Some(label) = &tick.label {
                let anchor = Pos2::new(style.offset_across + style.label_offset(), tick.along);
                let mut text_style = TextStyle::new(style.font_size, style.tick_color, Align2::CENTER_CENTER);
                if self.vertical {
                    text_style = text_style.rotated(std::f32::consts::FRAC_PI_2);
                }
                canvas.draw_text(self.orient(anchor), label, &text_style);
            }
        }
    }

    /// Maps a ruler-local point (x across, y along) onto the canvas.
    fn orient(&self, p: Pos2) -> Pos2 {
        if self.vertical {
            p
        } else {
            Pos2::new(p.y, p.x)
        }
    }

    fn orient_rect(&self, rect: Rect) -> Rect {
        if self.vertical {
            rect
        } else {
            Rect::from_min_max(self.orient(rect.min), self.orient(rect.max))
        }
    }
}

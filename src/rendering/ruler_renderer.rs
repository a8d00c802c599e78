//! Ruler body rendering
//!
//! The ruler always measures along the long side: down the left edge in
//! portrait, along the bottom edge in landscape.

use ruler::{Canvas, LandscapeFrame, Orientation, TickRenderer, TickStyle};

/// Renders the ruler with ticks `spacing` pixels apart.
///
/// # Arguments
/// * `canvas` - Full-window drawing surface
/// * `style` - Tick lengths, strokes and colors
/// * `spacing` - Tick spacing in pixels (a tenth of a unit)
pub fn render_ruler(canvas: &mut (impl Canvas + ?Sized), style: TickStyle, spacing: f32) {
    let renderer = TickRenderer::new(style, true);
    if Orientation::from_size(canvas.size()).is_landscape() {
        let mut frame = LandscapeFrame::new(canvas);
        renderer.paint(&mut frame, spacing);
    } else {
        renderer.paint(canvas, spacing);
    }
}

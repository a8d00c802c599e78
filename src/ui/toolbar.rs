//! Floating toolbar with the overlay toggles, the settings button and the
//! theme switch.
//!
//! Sits in the top-right corner in landscape and stacks vertically in the
//! bottom-right corner in portrait, so it never covers the ruler body.

use eframe::egui;
use ruler::{Orientation, ThemeColors};

use crate::app::AppState;

const BUTTON_SIZE: f32 = 60.0;
const ICON_SIZE: f32 = 26.0;
const MARGIN: f32 = 16.0;

/// Result of toolbar interactions
pub enum ToolbarInteraction {
    LineMeasure,
    RectangleMeasure,
    Settings,
    Theme,
}

/// Renders the toolbar over the canvas.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState, colors: &ThemeColors) -> Option<ToolbarInteraction> {
    let landscape = Orientation::from_size(ctx.content_rect().size()).is_landscape();
    let (anchor, offset) = if landscape {
        (egui::Align2::RIGHT_TOP, egui::vec2(-MARGIN, MARGIN))
    } else {
        (egui::Align2::RIGHT_BOTTOM, egui::vec2(-MARGIN, -MARGIN))
    };

    let theme_icon = if state.theme.theme_manager().theme_or_default(state.theme.current_theme_name()).is_dark() {
        "☀"
    } else {
        "🌙"
    };

    let mut interaction = None;
    egui::Area::new(egui::Id::new("toolbar"))
        .anchor(anchor, offset)
        .show(ctx, |ui| {
            let buttons = |ui: &mut egui::Ui| {
                if tool_button(ui, "📏", state.overlay.is_line_active(), colors)
                    .on_hover_text("Measure length")
                    .clicked()
                {
                    interaction = Some(ToolbarInteraction::LineMeasure);
                }
                if tool_button(ui, "⬜", state.overlay.is_rectangle_active(), colors)
                    .on_hover_text("Measure area")
                    .clicked()
                {
                    interaction = Some(ToolbarInteraction::RectangleMeasure);
                }
                if tool_button(ui, "⚙", state.calibration.is_dialog_open(), colors)
                    .on_hover_text("Calibrate")
                    .clicked()
                {
                    interaction = Some(ToolbarInteraction::Settings);
                }
                if tool_button(ui, theme_icon, false, colors)
                    .on_hover_text("Switch theme")
                    .clicked()
                {
                    interaction = Some(ToolbarInteraction::Theme);
                }
            };

            if landscape {
                ui.horizontal(buttons);
            } else {
                ui.vertical(buttons);
            }
        });

    interaction
}

/// Round icon button; filled with the secondary color while its mode is on.
fn tool_button(ui: &mut egui::Ui, icon: &str, selected: bool, colors: &ThemeColors) -> egui::Response {
    let (fill, text) = if selected {
        (colors.secondary, colors.on_primary)
    } else {
        (colors.primary, colors.on_primary)
    };
    ui.add(
        egui::Button::new(egui::RichText::new(icon).size(ICON_SIZE).color(text))
            .fill(fill)
            .min_size(egui::vec2(BUTTON_SIZE, BUTTON_SIZE))
            .corner_radius(BUTTON_SIZE / 2.0),
    )
}

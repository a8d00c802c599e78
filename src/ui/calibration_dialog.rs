//! Calibration dialog.
//!
//! Edits apply live: the preview strip and the ruler behind the dialog are
//! redrawn with the slider value every frame. Cancel (or dismissing the
//! dialog) restores the values it was opened with; Save keeps and stores them
//! and is only enabled once something changed.

use eframe::egui;
use ruler::{CalibrationFactor, RulerConfig, ThemeColors, TickRenderer, UnitChoice};

use crate::app::AppState;
use crate::rendering::egui_canvas::EguiCanvas;

const DIALOG_WIDTH: f32 = 320.0;

/// Result of calibration dialog interactions
pub enum CalibrationDialogInteraction {
    Cancelled,
    Saved,
}

/// Renders the modal calibration dialog.
///
/// # Arguments
/// * `ctx` - The egui context
/// * `state` - Application state; factor and unit are edited in place
/// * `config` - Effective rendering config (preview tick length)
/// * `colors` - Current theme palette
pub fn render_calibration_dialog(
    ctx: &egui::Context,
    state: &mut AppState,
    config: &RulerConfig,
    colors: &ThemeColors,
) -> Option<CalibrationDialogInteraction> {
    let pixels_per_point = ctx.pixels_per_point();
    let mut interaction = None;

    let modal = egui::Modal::new(egui::Id::new("calibration_dialog")).show(ctx, |ui| {
        ui.set_width(DIALOG_WIDTH);
        ui.heading("Calibration");
        ui.add_space(8.0);

        // Preview strip: a horizontal ruler as tall as its bar
        let strip_height = 2.5 * config.preview_tick_length;
        let (response, painter) = ui.allocate_painter(
            egui::vec2(ui.available_width(), strip_height),
            egui::Sense::hover(),
        );
        let mut canvas = EguiCanvas::new(&painter, response.rect, pixels_per_point);
        TickRenderer::new(config.preview_tick_style(pixels_per_point, colors), false)
            .paint(&mut canvas, state.tick_spacing());

        ui.add_space(8.0);

        let mut factor = state.calibration.current().factor.value();
        ui.label(format!("Calibration Factor: {factor:.2}"));
        ui.horizontal(|ui| {
            let slider = egui::Slider::new(&mut factor, CalibrationFactor::range()).show_value(false);
            if ui.add(slider).changed() {
                state.calibration.set_factor(factor);
            }
            if ui.button("Reset").clicked() {
                state.calibration.reset_factor();
            }
        });

        let mut unit = state.calibration.unit();
        ui.horizontal(|ui| {
            ui.label(format!("Unit: {unit}"));
            ui.selectable_value(&mut unit, UnitChoice::Centimeter, UnitChoice::Centimeter.label());
            ui.selectable_value(&mut unit, UnitChoice::Inch, UnitChoice::Inch.label());
        });
        if unit != state.calibration.unit() {
            state.calibration.set_unit(unit);
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Cancel").clicked() {
                interaction = Some(CalibrationDialogInteraction::Cancelled);
            }
            let save = ui.add_enabled(state.calibration.is_modified(), egui::Button::new("Save"));
            if save.clicked() {
                interaction = Some(CalibrationDialogInteraction::Saved);
            }
        });
    });

    if interaction.is_none() && modal.should_close() {
        interaction = Some(CalibrationDialogInteraction::Cancelled);
    }
    interaction
}

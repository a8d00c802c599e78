//! Panel orchestration and layout management.
//!
//! Coordinates the full-window ruler canvas, the floating toolbar and the
//! calibration dialog, and turns their interactions into one result for the
//! application to handle.

use eframe::egui;

use crate::app::AppState;
use crate::rendering::egui_canvas::EguiCanvas;
use crate::rendering::{overlay_renderer, ruler_renderer};
use crate::ui::calibration_dialog::{self, CalibrationDialogInteraction};
use crate::ui::input::overlay_input_handler;
use crate::ui::toolbar::{self, ToolbarInteraction};

/// Result of panel interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelInteraction {
    /// Line measure button pressed
    ToggleLineMeasure,
    /// Rectangle measure button pressed
    ToggleRectangleMeasure,
    /// Settings button pressed
    OpenCalibration,
    /// Calibration dialog cancelled or dismissed
    CalibrationCancelled,
    /// Calibration dialog saved
    CalibrationSaved,
    /// Theme button pressed
    CycleTheme,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders the whole window.
    ///
    /// Called from the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction = None;

        let colors = state.theme.colors().clone();
        let config = state.effective_config();
        let pixels_per_point = ctx.pixels_per_point();

        let canvas_frame = egui::Frame::NONE.fill(colors.background);
        egui::CentralPanel::default()
            .frame(canvas_frame)
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());

                let pixels_per_unit = state.pixels_per_unit();
                let unit = state.calibration.unit();

                // The dialog is modal; the canvas only takes drags while it is closed
                if !state.calibration.is_dialog_open() {
                    overlay_input_handler::handle_overlay_input(
                        &response,
                        pixels_per_point,
                        pixels_per_unit,
                        &mut state.overlay,
                    );
                }

                let mut canvas = EguiCanvas::new(&painter, response.rect, pixels_per_point);
                ruler_renderer::render_ruler(
                    &mut canvas,
                    config.tick_style(pixels_per_point, &colors),
                    state.tick_spacing(),
                );
                overlay_renderer::render_overlay(
                    &mut canvas,
                    &mut state.overlay,
                    pixels_per_unit,
                    unit,
                    &config.overlay_style(pixels_per_point, &colors),
                );
            });

        if let Some(toolbar_interaction) = toolbar::render_toolbar(ctx, state, &colors) {
            interaction = Some(match toolbar_interaction {
                ToolbarInteraction::LineMeasure => PanelInteraction::ToggleLineMeasure,
                ToolbarInteraction::RectangleMeasure => PanelInteraction::ToggleRectangleMeasure,
                ToolbarInteraction::Settings => PanelInteraction::OpenCalibration,
                ToolbarInteraction::Theme => PanelInteraction::CycleTheme,
            });
        }

        if state.calibration.is_dialog_open() {
            if let Some(dialog_interaction) =
                calibration_dialog::render_calibration_dialog(ctx, state, &config, &colors)
            {
                interaction = Some(match dialog_interaction {
                    CalibrationDialogInteraction::Cancelled => PanelInteraction::CalibrationCancelled,
                    CalibrationDialogInteraction::Saved => PanelInteraction::CalibrationSaved,
                });
            }
        }

        interaction
    }
}

//! Application-level coordination and workflow management.
//!
//! Handles the operations triggered from the toolbar and the calibration
//! dialog, keeping the overlay and calibration state consistent.

use ruler::PreferenceStore;

use crate::app::AppState;

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Toggling the measurement overlays
/// - Driving the calibration dialog lifecycle
/// - Switching themes
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Turns the line overlay on (replacing any rectangle) or off.
    pub fn toggle_line_measure(state: &mut AppState) {
        let ppu = state.pixels_per_unit();
        let unit = state.calibration.unit();
        let offset_along = state.config.offset_along;
        state.overlay.toggle_line(ppu, unit, offset_along);
        log::info!("line measure {}", if state.overlay.is_line_active() { "on" } else { "off" });
    }

    /// Turns the rectangle overlay on (replacing any line) or off.
    pub fn toggle_rectangle_measure(state: &mut AppState) {
        let ppu = state.pixels_per_unit();
        let unit = state.calibration.unit();
        let offset_along = state.config.offset_along;
        state.overlay.toggle_rectangle(ppu, unit, offset_along);
        log::info!(
            "rectangle measure {}",
            if state.overlay.is_rectangle_active() { "on" } else { "off" }
        );
    }

    pub fn open_calibration(state: &mut AppState) {
        state.calibration.open_dialog();
    }

    /// Restores the values the dialog was opened with.
    pub fn cancel_calibration(state: &mut AppState) {
        state.calibration.cancel_dialog();
        log::debug!("calibration cancelled");
    }

    /// Keeps the live values and writes them to storage when available.
    pub fn save_calibration<S: PreferenceStore + ?Sized>(state: &mut AppState, storage: Option<&mut S>) {
        if state.calibration.save_dialog(storage) {
            let current = state.calibration.current();
            log::info!("calibration saved: factor {} unit {}", current.factor, current.unit);
        }
    }

    pub fn cycle_theme(state: &mut AppState) {
        state.theme.cycle_theme();
    }
}

//! Centralized application state for the ruler.
//!
//! Composes focused state components, each owning one aspect of the app:
//! calibration, the active overlay and the theme. The rendering config and
//! the resolved device density sit beside them.

use ruler::{DeviceDensity, RulerConfig};

use crate::state::{CalibrationState, OverlayState, ThemeState};

/// Main application state composed of focused state components.
#[derive(Debug)]
pub struct AppState {
    // ===== Focused State Components =====
    /// Calibration factor, unit and dialog session
    pub calibration: CalibrationState,

    /// Active measurement overlay
    pub overlay: OverlayState,

    /// Theme and styling state
    pub theme: ThemeState,

    // ===== Top-Level State =====
    /// Rendering configuration as stored (without command-line overrides)
    pub config: RulerConfig,

    /// Tick length given on the command line, if any
    pub tick_length_override: Option<f32>,

    /// Screen density the ruler is drawn for
    pub density: DeviceDensity,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            calibration: CalibrationState::default(),
            overlay: OverlayState::new(),
            theme: ThemeState::new(),
            config: RulerConfig::default(),
            tick_length_override: None,
            density: DeviceDensity::default(),
        }
    }

    /// Config with command-line overrides applied; this is what gets drawn.
    pub fn effective_config(&self) -> RulerConfig {
        let mut config = self.config.clone();
        if let Some(tick_length) = self.tick_length_override {
            config.tick_length = tick_length;
        }
        config
    }

    /// Pixels per unit for the live calibration.
    pub fn pixels_per_unit(&self) -> f32 {
        self.calibration.pixels_per_unit(self.density)
    }

    /// Distance between ticks for the live calibration.
    pub fn tick_spacing(&self) -> f32 {
        self.calibration.current().tick_spacing(self.density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_does_not_touch_stored_config() {
        let mut state = AppState::new();
        state.tick_length_override = Some(45.0);

        assert_eq!(state.effective_config().tick_length, 45.0);
        assert_eq!(state.config.tick_length, RulerConfig::default().tick_length);
    }

    #[test]
    fn test_spacing_is_tenth_of_unit() {
        let mut state = AppState::new();
        state.density = DeviceDensity::new(254).unwrap();
        assert!((state.pixels_per_unit() - 100.0).abs() < 1e-3);
        assert!((state.tick_spacing() - 10.0).abs() < 1e-3);
    }
}

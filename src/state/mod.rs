//! State management modules for the ruler.
//!
//! This module contains state-only logic (no UI concerns):
//! - Calibration state (live factor and unit, dialog session)
//! - Overlay state (active measurement rectangle or line)
//! - Theme state (theme manager, current theme)

mod calibration_state;
mod overlay_state;
mod theme_state;

pub use calibration_state::CalibrationState;
pub use overlay_state::OverlayState;
pub use theme_state::ThemeState;

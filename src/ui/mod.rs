//! UI panel rendering subsystem
//!
//! This module contains all UI rendering logic for the ruler:
//! - Toolbar (overlay toggles, settings, theme)
//! - Calibration dialog (factor slider, unit choice, preview strip)
//! - Panel manager (canvas, toolbar and dialog orchestration)
//! - Input handling (dragging overlays)

pub mod toolbar;
pub mod calibration_dialog;
pub mod panel_manager;
pub mod input;

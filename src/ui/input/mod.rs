//! Input handling subsystem for UI interactions.
//!
//! - Overlay input handling (dragging the measurement rectangle or line)

pub mod overlay_input_handler;

//! Rendering subsystem for drawing the ruler
//!
//! This module contains the egui side of drawing:
//! - Canvas adapter (ruler pixel space onto an egui painter)
//! - Ruler body rendering (portrait and landscape)
//! - Measurement overlay rendering

pub mod egui_canvas;
pub mod ruler_renderer;
pub mod overlay_renderer;

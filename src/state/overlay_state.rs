//! Measurement overlay state.
//!
//! At most one overlay is active. Turning one on turns the other off, and an
//! overlay always starts from its initial geometry when turned on.

use ruler::{MeasurementLine, MeasurementRectangle, UnitChoice};

/// The currently active measurement overlay.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum OverlayState {
    #[default]
    None,
    Line(MeasurementLine),
    Rectangle(MeasurementRectangle),
}

impl OverlayState {
    pub fn new() -> Self {
        Self::None
    }

    // ===== Overlay Queries =====

    pub fn is_line_active(&self) -> bool {
        matches!(self, OverlayState::Line(_))
    }

    pub fn is_rectangle_active(&self) -> bool {
        matches!(self, OverlayState::Rectangle(_))
    }

    // ===== Overlay Mutations =====

    /// Toggles the line overlay; a fresh line replaces any rectangle.
    pub fn toggle_line(&mut self, pixels_per_unit: f32, unit: UnitChoice, offset_along: f32) {
        *self = if self.is_line_active() {
            OverlayState::None
        } else {
            OverlayState::Line(MeasurementLine::initial(pixels_per_unit, unit, offset_along))
        };
    }

    /// Toggles the rectangle overlay; a fresh rectangle replaces any line.
    pub fn toggle_rectangle(&mut self, pixels_per_unit: f32, unit: UnitChoice, offset_along: f32) {
        *self = if self.is_rectangle_active() {
            OverlayState::None
        } else {
            OverlayState::Rectangle(MeasurementRectangle::initial(pixels_per_unit, unit, offset_along))
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles_are_mutually_exclusive() {
        let mut state = OverlayState::new();

        state.toggle_line(100.0, UnitChoice::Centimeter, 10.0);
        assert!(state.is_line_active());

        state.toggle_rectangle(100.0, UnitChoice::Centimeter, 10.0);
        assert!(state.is_rectangle_active());
        assert!(!state.is_line_active());

        state.toggle_rectangle(100.0, UnitChoice::Centimeter, 10.0);
        assert_eq!(state, OverlayState::None);
    }

    #[test]
    fn test_toggle_on_recreates_initial_geometry() {
        let mut state = OverlayState::new();
        state.toggle_line(100.0, UnitChoice::Centimeter, 10.0);
        state.toggle_line(100.0, UnitChoice::Centimeter, 10.0);
        state.toggle_line(50.0, UnitChoice::Inch, 10.0);

        match state {
            OverlayState::Line(line) => assert_eq!(line.extent(), 50.0),
            other => panic!("expected line overlay, got {other:?}"),
        }
    }
}

//! Calibration and unit state.
//!
//! This module owns the live calibration shared by the ruler, the overlays
//! and the calibration dialog, together with the dialog's open session.

use ruler::{Calibration, CalibrationSession, DeviceDensity, PreferenceStore, UnitChoice};

/// Live calibration plus the calibration dialog's session, if open.
///
/// Responsibilities:
/// - Holding the factor and unit every frame is drawn with
/// - Opening, cancelling and saving the dialog session
#[derive(Debug, Clone, Default)]
pub struct CalibrationState {
    /// Values the ruler is currently drawn with
    current: Calibration,
    /// Open dialog session (snapshot taken at open)
    session: Option<CalibrationSession>,
}

impl CalibrationState {
    /// Creates state from the persisted calibration.
    pub fn new(current: Calibration) -> Self {
        Self {
            current,
            session: None,
        }
    }

    // ===== Calibration Queries =====

    pub fn current(&self) -> &Calibration {
        &self.current
    }

    pub fn unit(&self) -> UnitChoice {
        self.current.unit
    }

    pub fn pixels_per_unit(&self, density: DeviceDensity) -> f32 {
        self.current.pixels_per_unit(density)
    }

    pub fn is_dialog_open(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the live values differ from those the dialog opened with.
    pub fn is_modified(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.is_modified(&self.current))
    }

    // ===== Live Edits (dialog controls) =====

    pub fn set_factor(&mut self, value: f32) {
        self.current.set_factor(value);
    }

    pub fn reset_factor(&mut self) {
        self.current.reset_factor();
    }

    pub fn set_unit(&mut self, unit: UnitChoice) {
        self.current.set_unit(unit);
    }

    // ===== Dialog Session =====

    /// Opens the dialog, snapshotting the current values. No-op when already open.
    pub fn open_dialog(&mut self) {
        if self.session.is_none() {
            self.session = Some(CalibrationSession::open(&self.current));
        }
    }

    /// Closes the dialog and restores the values captured at open.
    pub fn cancel_dialog(&mut self) {
        if let Some(session) = self.session.take() {
            session.cancel(&mut self.current);
        }
    }

    /// Closes the dialog, persisting the current values when storage is available.
    ///
    /// Returns true if the values were written.
    pub fn save_dialog<S: PreferenceStore + ?Sized>(&mut self, storage: Option<&mut S>) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        match storage {
            Some(storage) => {
                session.save(&self.current, storage);
                true
            }
            None => {
                log::warn!("no persistent storage available; calibration kept for this session only");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruler::CalibrationFactor;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_cancel_reverts_live_edits() {
        let mut state = CalibrationState::new(Calibration::new(
            CalibrationFactor::new(1.1),
            UnitChoice::Inch,
        ));
        state.open_dialog();
        state.set_factor(0.7);
        state.set_unit(UnitChoice::Centimeter);

        state.cancel_dialog();

        assert!(!state.is_dialog_open());
        assert_eq!(state.current().factor.value(), 1.1);
        assert_eq!(state.unit(), UnitChoice::Inch);
    }

    #[test]
    fn test_modified_tracks_live_edits() {
        let mut state = CalibrationState::default();
        assert!(!state.is_modified());

        state.open_dialog();
        assert!(!state.is_modified());

        state.set_unit(UnitChoice::Inch);
        assert!(state.is_modified());

        state.set_unit(UnitChoice::Centimeter);
        assert!(!state.is_modified());
    }

    #[test]
    fn test_reopen_does_not_overwrite_snapshot() {
        let mut state = CalibrationState::default();
        state.open_dialog();
        state.set_factor(1.3);
        state.open_dialog();
        state.cancel_dialog();
        assert_eq!(state.current().factor.value(), 1.0);
    }

    #[test]
    fn test_save_writes_storage() {
        let mut storage = MockStorage::default();
        let mut state = CalibrationState::default();
        state.open_dialog();
        state.set_factor(0.95);

        assert!(state.save_dialog(Some(&mut storage as &mut dyn eframe::Storage)));
        assert!(!state.is_dialog_open());
        assert_eq!(storage.data.get(ruler::CORRECTION_FACTOR_KEY).map(String::as_str), Some("0.95"));
        assert_eq!(storage.data.get(ruler::UNIT_KEY).map(String::as_str), Some("cm"));
    }

    #[test]
    fn test_save_without_storage_keeps_values() {
        let mut state = CalibrationState::default();
        state.open_dialog();
        state.set_factor(1.2);
        assert!(!state.save_dialog::<ruler::MemoryPreferences>(None));
        assert_eq!(state.current().factor.value(), 1.2);
    }
}

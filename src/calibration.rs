//! Calibration dialog session.
//!
//! While the dialog is open the live `Calibration` is edited in place so the
//! ruler behind the dialog redraws immediately. The session only remembers
//! what the values were when it opened:
//! - `cancel` (and implicit dismiss) restores that snapshot
//! - `save` persists the live values and keeps them

use crate::preferences::{save_calibration, PreferenceStore};
use crate::units::Calibration;

/// An open calibration dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationSession {
    snapshot: Calibration,
}

impl CalibrationSession {
    /// Opens a session, capturing `current` by value.
    pub fn open(current: &Calibration) -> Self {
        Self { snapshot: *current }
    }

    /// Whether `current` differs from the values at open.
    pub fn is_modified(&self, current: &Calibration) -> bool {
        self.snapshot != *current
    }

    /// Closes the session, restoring the values captured at open.
    pub fn cancel(self, current: &mut Calibration) {
        *current = self.snapshot;
    }

    /// Closes the session, persisting `current` to `store`.
    pub fn save<S: PreferenceStore + ?Sized>(self, current: &Calibration, store: &mut S) {
        save_calibration(store, current);
    }
}

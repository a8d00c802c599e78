//! Persistence of the calibration factor and unit preference.
//!
//! Both values are stored as plain strings in a key-value store. Loading never
//! fails: a value that cannot be parsed is logged and replaced by its default.

use std::collections::HashMap;

use crate::units::{Calibration, CalibrationFactor, UnitChoice};

/// Key of the string-encoded calibration factor.
pub const CORRECTION_FACTOR_KEY: &str = "correction_factor";

/// Key of the unit label ("cm" or "inch").
pub const UNIT_KEY: &str = "unit";

/// Stored value used when no factor has been saved yet.
pub const DEFAULT_CALIBRATION_VALUE: &str = "1.0";

/// A string key-value store.
pub trait PreferenceStore {
    fn get_string(&self, key: &str) -> Option<String>;

    fn set_string(&mut self, key: &str, value: String);

    /// Writes pending changes to durable storage, if the store has any.
    fn flush(&mut self) {}

    /// Returns the stored value or `default` when the key is absent.
    fn get(&self, key: &str, default: &str) -> String {
        self.get_string(key).unwrap_or_else(|| default.to_string())
    }
}

impl PreferenceStore for dyn eframe::Storage + '_ {
    fn get_string(&self, key: &str) -> Option<String> {
        eframe::Storage::get_string(self, key)
    }

    fn set_string(&mut self, key: &str, value: String) {
        eframe::Storage::set_string(self, key, value);
    }

    fn flush(&mut self) {
        eframe::Storage::flush(self);
    }
}

/// In-memory store, used headless and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    data: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get_string(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.data.insert(key.to_string(), value);
    }
}

/// Loads the persisted calibration, falling back to defaults per value.
pub fn load_calibration<S: PreferenceStore + ?Sized>(store: &S) -> Calibration {
    let raw_factor = store.get(CORRECTION_FACTOR_KEY, DEFAULT_CALIBRATION_VALUE);
    let factor = raw_factor.parse::<CalibrationFactor>().unwrap_or_else(|err| {
        log::warn!("ignoring stored calibration factor: {err}");
        CalibrationFactor::default()
    });

    let raw_unit = store.get(UNIT_KEY, UnitChoice::default().label());
    let unit = raw_unit.parse::<UnitChoice>().unwrap_or_else(|err| {
        log::warn!("ignoring stored unit: {err}");
        UnitChoice::default()
    });

    Calibration::new(factor, unit)
}

/// Loads the calibration when a store is available, else returns defaults.
pub fn load_calibration_or_default(store: Option<&dyn eframe::Storage>) -> Calibration {
    match store {
        Some(store) => load_calibration(store),
        None => Calibration::default(),
    }
}

/// Persists both calibration values and flushes the store.
pub fn save_calibration<S: PreferenceStore + ?Sized>(store: &mut S, calibration: &Calibration) {
    store.set_string(CORRECTION_FACTOR_KEY, calibration.factor.to_string());
    store.set_string(UNIT_KEY, calibration.unit.label().to_string());
    store.flush();
}

//! Generic settings persistence coordination.
//!
//! Settings are stored as JSON strings in eframe's persistent storage. A
//! missing or unreadable value falls back to the caller's default.

use serde::{Deserialize, Serialize};

/// Storage key of the serialized `RulerConfig`.
pub const RULER_CONFIG_KEY: &str = "ruler_config";

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a custom default.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    /// * `default` - The value to use if loading fails
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        let Some(json_str) = storage.and_then(|storage| storage.get_string(key)) else {
            return default;
        };
        match serde_json::from_str(&json_str) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("ignoring unreadable setting {key:?}: {e}");
                default
            }
        }
    }

    /// Loads a setting, falling back to `T::default()`.
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        Self::load_setting_or(storage, key, T::default())
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(e) => log::warn!("failed to serialize setting {key:?}: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruler::RulerConfig;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
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
    fn test_config_round_trip() {
        let mut storage = MockStorage::new();
        let config = RulerConfig {
            tick_length: 42.0,
            overlay_alpha: 0.5,
            ..RulerConfig::default()
        };

        SettingsCoordinator::save_setting(&mut storage, RULER_CONFIG_KEY, &config);

        let loaded: RulerConfig = SettingsCoordinator::load_setting(Some(&storage), RULER_CONFIG_KEY);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_key_uses_default() {
        let storage = MockStorage::new();
        let loaded: RulerConfig = SettingsCoordinator::load_setting(Some(&storage), RULER_CONFIG_KEY);
        assert_eq!(loaded, RulerConfig::default());
    }

    #[test]
    fn test_corrupt_value_uses_given_default() {
        let mut storage = MockStorage::new();
        storage.data.insert("count".to_string(), "not json".to_string());

        let loaded: i32 = SettingsCoordinator::load_setting_or(Some(&storage), "count", 7);
        assert_eq!(loaded, 7);
    }

    #[test]
    fn test_no_storage_uses_default() {
        let loaded: f32 = SettingsCoordinator::load_setting_or(None, "anything", 1.5);
        assert_eq!(loaded, 1.5);
    }
}

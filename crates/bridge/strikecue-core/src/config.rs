//! Bridge configuration.
//!
//! A typed config object built once by the host and handed to the Bridge at
//! construction. Reading through a settings store that may not be registered
//! yet is the host's problem, not a runtime state the core carries around:
//! `from_settings` simply falls back to defaults for any missing key.

use serde::{Deserialize, Serialize};

use strikecue_api::SettingsStore;

/// World-scoped toggle: whether the integration runs at all.
pub const SETTING_ENABLED: &str = "enabled";
/// Client-scoped toggle: verbose per-event trace logging.
pub const SETTING_DEBUG: &str = "debug-mode";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BridgeConfig {
    pub enabled: bool,
    pub debug: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            debug: false,
        }
    }
}

impl BridgeConfig {
    /// Load both toggles from a settings store, defaulting any missing key.
    pub fn from_settings(store: &dyn SettingsStore) -> Self {
        let defaults = Self::default();
        Self {
            enabled: store.get_bool(SETTING_ENABLED).unwrap_or(defaults.enabled),
            debug: store.get_bool(SETTING_DEBUG).unwrap_or(defaults.debug),
        }
    }

    /// Write both toggles back, e.g. when the host registers settings with
    /// these as initial values.
    pub fn store(&self, store: &mut dyn SettingsStore) {
        store.set_bool(SETTING_ENABLED, self.enabled);
        store.set_bool(SETTING_DEBUG, self.debug);
    }
}

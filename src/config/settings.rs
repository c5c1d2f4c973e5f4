//! User settings for budget-pace
//!
//! Holds the display currency and the calculator's tunable thresholds.

use serde::{Deserialize, Serialize};

use super::paths::PacePaths;
use crate::error::PaceError;
use crate::services::CalculatorConfig;
use crate::storage::file_io::{read_json, write_json_atomic, JsonFile};

/// User settings for budget-pace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Rounding and status thresholds
    #[serde(default)]
    pub calculator: CalculatorConfig,
}

fn default_currency() -> String {
    "£".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            calculator: CalculatorConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    ///
    /// Defaults are not written back; the caller decides when to persist.
    pub fn load_or_create(paths: &PacePaths) -> Result<Self, PaceError> {
        read_json(JsonFile::Settings, paths.settings_file())
            .map(Option::unwrap_or_default)
            .map_err(|e| PaceError::Configuration(e.to_string()))
    }

    /// Save settings to disk, replacing whatever is there
    pub fn save(&self, paths: &PacePaths) -> Result<(), PaceError> {
        paths.ensure_directories()?;
        write_json_atomic(JsonFile::Settings, paths.settings_file(), self)
    }
}

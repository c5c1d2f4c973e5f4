//! Path management for budget-pace
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_PACE_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/budget-pace` on Linux,
//!    `%APPDATA%\budget-pace\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::PaceError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "BUDGET_PACE_DATA_DIR";

/// Manages all paths used by budget-pace
#[derive(Debug, Clone)]
pub struct PacePaths {
    base_dir: PathBuf,
}

impl PacePaths {
    /// Resolve the base directory from the environment or platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, PaceError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create PacePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the persisted inputs
    pub fn state_file(&self) -> PathBuf {
        self.base_dir.join("state.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), PaceError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PaceError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, PaceError> {
    ProjectDirs::from("", "", "budget-pace")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PaceError::Configuration("Could not determine a home directory".into()))
}

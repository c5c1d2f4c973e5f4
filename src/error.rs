//! Custom error types for budget-pace
//!
//! This module defines the error hierarchy for the library using thiserror.
//! The calculator itself only ever produces `Configuration` and
//! `DivisionByZero`; the remaining variants belong to persistence and the CLI.

use thiserror::Error;

/// The main error type for budget-pace operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaceError {
    /// Invalid static configuration, such as an anchor day outside 1-28
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A rate was requested against a zero budget
    #[error("Division by zero: the budget is 0, so no rates can be derived")]
    DivisionByZero,

    /// Invalid user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PaceError {
    /// Create a configuration error for an out-of-range anchor day
    pub fn invalid_anchor_day(day: u32) -> Self {
        Self::Configuration(format!(
            "anchor day must be between 1 and 28, got {}",
            day
        ))
    }

    /// Check if this is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Check if this error was caused by a zero budget
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }
}

impl From<std::io::Error> for PaceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PaceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget-pace operations
pub type PaceResult<T> = Result<T, PaceError>;

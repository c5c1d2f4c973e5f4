//! Configuration module for budget-pace
//!
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PacePaths;
pub use settings::Settings;

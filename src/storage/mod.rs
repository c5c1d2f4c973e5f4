//! Storage layer for budget-pace
//!
//! JSON file storage with atomic writes, a sticky key-value store on top of
//! it, and the typed view of the persisted budget inputs.

pub mod file_io;
pub mod state;
pub mod sticky;

pub use file_io::{read_json, set_aside_corrupt, write_json_atomic, JsonFile};
pub use state::{BudgetState, StateField};
pub use sticky::StickyStore;

use crate::config::paths::PacePaths;
use crate::error::PaceError;

/// Open the sticky store at its configured location
pub fn open_store(paths: &PacePaths) -> Result<StickyStore, PaceError> {
    paths.ensure_directories()?;
    StickyStore::open(paths.state_file())
}

//! JSON files behind the state and settings stores
//!
//! Reads tell a missing file apart from an unreadable one and from one that
//! no longer parses, so each store can pick its own recovery. Writes go
//! through a sibling temp file and a rename.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::PaceError;

/// Which store a JSON file belongs to, used to name it in errors and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonFile {
    State,
    Settings,
}

impl JsonFile {
    pub fn label(self) -> &'static str {
        match self {
            Self::State => "state file",
            Self::Settings => "settings file",
        }
    }
}

/// Read a store file; `Ok(None)` means it has not been written yet
///
/// An unreadable file is a `Storage` error, a file that doesn't parse as `T`
/// is a `Json` error.
pub fn read_json<T, P>(kind: JsonFile, path: P) -> Result<Option<T>, PaceError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path).map_err(|e| {
        PaceError::Storage(format!(
            "Cannot open {} {}: {}",
            kind.label(),
            path.display(),
            e
        ))
    })?;

    serde_json::from_reader(BufReader::new(file))
        .map(Some)
        .map_err(|e| {
            PaceError::Json(format!(
                "{} {} is not valid: {}",
                kind.label(),
                path.display(),
                e
            ))
        })
}

/// Move an unparseable store file aside as `<name>.json.corrupt`
///
/// Returns where it went so the caller can tell the user.
pub fn set_aside_corrupt(kind: JsonFile, path: &Path) -> Result<PathBuf, PaceError> {
    let backup = path.with_extension("json.corrupt");
    fs::rename(path, &backup).map_err(|e| {
        PaceError::Storage(format!(
            "Cannot move corrupt {} {} aside: {}",
            kind.label(),
            path.display(),
            e
        ))
    })?;
    tracing::warn!(file = kind.label(), backup = %backup.display(), "moved corrupt file aside");
    Ok(backup)
}

/// Replace a store file with `data` in one rename
pub fn write_json_atomic<T, P>(kind: JsonFile, path: P, data: &T) -> Result<(), PaceError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let fail = |step: &str, e: &dyn std::fmt::Display| {
        PaceError::Storage(format!(
            "Cannot write {} {} ({}): {}",
            kind.label(),
            path.display(),
            step,
            e
        ))
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| fail("create directory", &e))?;
    }

    // Same directory as the target, or the rename is not atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| fail("create temp file", &e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data).map_err(|e| fail("serialize", &e))?;
    writer.flush().map_err(|e| fail("flush", &e))?;
    writer.get_ref().sync_all().map_err(|e| fail("sync", &e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        fail("rename", &e)
    })?;

    tracing::debug!(file = kind.label(), path = %path.display(), "saved");

    Ok(())
}

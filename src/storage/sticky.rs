//! Sticky key-value store
//!
//! Values are JSON encoded and kept in a single file. Storing `None` (or a
//! JSON null) removes the key instead of persisting a null marker.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::file_io::{read_json, set_aside_corrupt, write_json_atomic, JsonFile};
use crate::error::{PaceError, PaceResult};

/// File-backed map from string keys to JSON values
#[derive(Debug)]
pub struct StickyStore {
    path: PathBuf,
    values: BTreeMap<String, Value>,
}

impl StickyStore {
    /// Open the store at `path`, starting empty if the file doesn't exist
    ///
    /// A file that no longer parses is moved aside and the store starts
    /// empty, the same way `get` falls back on a single undecodable value.
    pub fn open(path: PathBuf) -> PaceResult<Self> {
        let values = match read_json(JsonFile::State, &path) {
            Ok(values) => values.unwrap_or_default(),
            Err(PaceError::Json(reason)) => {
                tracing::warn!(%reason, "starting with an empty store");
                set_aside_corrupt(JsonFile::State, &path)?;
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        Ok(Self { path, values })
    }

    /// Get the stored value for `key`, or `default` when absent
    ///
    /// A stored value that no longer decodes as `T` also yields `default`.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.values.get(key) {
            None => default,
            Some(value) => match serde_json::from_value(value.clone()) {
                Ok(decoded) => decoded,
                Err(e) => {
                    tracing::warn!(key, error = %e, "ignoring undecodable stored value");
                    default
                }
            },
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Store `value` under `key` and persist; `None` removes the key
    pub fn set<T: Serialize>(&mut self, key: &str, value: Option<T>) -> PaceResult<()> {
        let value = match value {
            Some(v) => serde_json::to_value(v)?,
            None => Value::Null,
        };

        if value.is_null() {
            self.values.remove(key);
        } else {
            self.values.insert(key.to_string(), value);
        }

        self.save()
    }

    /// Remove `key` and persist; returns whether it was present
    pub fn remove(&mut self, key: &str) -> PaceResult<bool> {
        let existed = self.values.remove(key).is_some();
        if existed {
            self.save()?;
        }
        Ok(existed)
    }

    /// Remove every key and persist
    pub fn clear(&mut self) -> PaceResult<()> {
        self.values.clear();
        self.save()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    fn save(&self) -> PaceResult<()> {
        write_json_atomic(JsonFile::State, &self.path, &self.values)
    }
}

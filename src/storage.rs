//! Key-value store backends.
//!
//! Two implementations of the [`KeyValueStore`] port:
//! - [`MemoryStore`] keeps values in a plain map. Used by tests and as a
//!   session-only fallback when no preference file location exists.
//! - [`FileStore`] persists values in a single JSON object file. Every
//!   operation re-reads the file and mutations rewrite it, so independent
//!   store instances sharing one path never clobber each other's keys.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::traits::{KeyValueStore, StorageError};

/// In-memory key-value store with no persistence.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.values.remove(key);
        Ok(())
    }
}

/// File-backed key-value store.
///
/// The backing file holds a single JSON object whose entries are the
/// stored string values. A missing file reads as an empty store; a file
/// that exists but does not parse as a JSON object surfaces as
/// [`StorageError::Corrupt`] so callers can fall back to their defaults.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file and its parent directory are created lazily on the first
    /// write; construction itself never touches the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Map<String, Value>, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(err.into()),
        };

        let value: Value = serde_json::from_str(&text)
            .map_err(|err| StorageError::Corrupt(err.to_string()))?;

        match value {
            Value::Object(entries) => Ok(entries),
            other => Err(StorageError::Corrupt(format!(
                "expected a JSON object, found {}",
                json_type_name(&other)
            ))),
        }
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&Value::Object(entries.clone()))
            .map_err(|err| StorageError::Corrupt(err.to_string()))?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.read_entries()?;
        match entries.get(key) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(other) => Err(StorageError::Corrupt(format!(
                "entry {:?} holds {}, expected a string",
                key,
                json_type_name(other)
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), Value::String(value.to_string()));
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

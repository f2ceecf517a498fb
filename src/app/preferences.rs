//! Preference storage bootstrap.
//!
//! Clubdesk keeps its small persistent state (theme, schedule filters,
//! language, last content directory) in one JSON preference file under the
//! platform config directory. When no config directory exists the state
//! falls back to a session-only in-memory store; the app stays fully
//! usable, the preferences just do not survive a restart.

use std::path::PathBuf;

use tracing::{info, warn};

use clubdesk::{FileStore, KeyValueStore, MemoryStore, StorageError};

/// Storage backend for user preferences.
///
/// Either file-backed (the normal case) or in-memory (fallback when no
/// config directory is available). Cloned instances share the same
/// backing file in the file-backed case; in-memory clones diverge, which
/// is acceptable for a session-only fallback.
#[derive(Debug, Clone)]
pub enum PrefStore {
    File(FileStore),
    Memory(MemoryStore),
}

impl KeyValueStore for PrefStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            PrefStore::File(store) => store.get(key),
            PrefStore::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            PrefStore::File(store) => store.set(key, value),
            PrefStore::Memory(store) => store.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match self {
            PrefStore::File(store) => store.remove(key),
            PrefStore::Memory(store) => store.remove(key),
        }
    }
}

/// Opens the preference store for this platform.
pub fn open_preference_store() -> PrefStore {
    match preference_file_path() {
        Some(path) => {
            info!("using preference file {}", path.display());
            PrefStore::File(FileStore::new(path))
        }
        None => {
            warn!("no config directory available, preferences are session-only");
            PrefStore::Memory(MemoryStore::new())
        }
    }
}

/// Path of the preference file, `<config_dir>/clubdesk/preferences.json`.
fn preference_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("clubdesk").join("preferences.json"))
}

//! Typed settings persistence over a key-value store.
//!
//! Small helpers for storing serializable values as JSON strings in any
//! [`KeyValueStore`]. The stores use these for their versioned state; the
//! GUI uses them for incidental preferences (language, last content
//! directory).

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::traits::{KeyValueStore, StorageError};

/// Serializes `value` as JSON and stores it under `key`.
pub fn save_json<S, T>(store: &mut S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let json = serde_json::to_string(value)
        .map_err(|err| StorageError::Corrupt(err.to_string()))?;
    store.set(key, &json)
}

/// Loads a setting, falling back to `T::default()` when the key is
/// missing, unreadable, or does not deserialize.
pub fn load_json<S, T>(store: &S, key: &str) -> T
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned + Default,
{
    try_load_json(store, key).unwrap_or_default()
}

/// Attempts to load a setting, returning `None` when the key is missing,
/// unreadable, or does not deserialize.
pub fn try_load_json<S, T>(store: &S, key: &str) -> Option<T>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let raw = store.get(key).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

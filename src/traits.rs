//! Core trait definitions for the clubdesk library.
//!
//! The stores and sorting helpers are written against these traits so the
//! same code runs against the on-disk preference file in the GUI, an
//! in-memory map in tests, and whatever collation policy the caller wants.

use std::cmp::Ordering;
use thiserror::Error;

/// Errors surfaced by a key-value store backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file or directory could not be read or written.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing data exists but is not in the expected format.
    #[error("storage data is corrupt: {0}")]
    Corrupt(String),

    /// No usable storage location exists in this environment.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// String key-value persistence with explicit error reporting.
///
/// Modeled on browser local storage: small string payloads, one logical
/// writer, last write wins. Callers decide per key whether a failed write
/// blocks the corresponding in-memory mutation.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes the value stored under `key`.
    ///
    /// Removing a key that is not present succeeds.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Locale-aware string comparison.
///
/// The comparison policy is injected wherever labels or names are ordered,
/// so the German dictionary rules can be swapped or tested independently
/// of the data being sorted.
pub trait Collator {
    /// Compares two strings under this collator's locale rules.
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

//! Key/value persistence mediums.
//!
//! DESIGN
//! ======
//! `Storage` is the seam between the typed store and wherever string
//! values actually live. It mirrors the browser `localStorage` surface
//! (`get_item`, `set_item`, `remove_item`) so the layers above stay small.
//! `MemoryStorage` lives for the process; `FileStorage` keeps one JSON
//! document on disk and survives restarts.
//!
//! TRADE-OFFS
//! ==========
//! Both mediums enforce an optional byte quota over keys plus values and
//! fail with `QuotaExceeded` the way a full browser store does. The quota
//! is approximate: it counts UTF-8 bytes, not the UTF-16 units browsers use.

pub mod file;
pub mod memory;

use std::collections::BTreeMap;
use std::fmt;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Default quota, matching the common 5 MiB browser limit.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by a persistence medium.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Writing `key` would grow the medium beyond its quota.
    #[error("quota exceeded writing {key}: {required} bytes needed, limit {limit}")]
    QuotaExceeded { key: String, required: usize, limit: usize },

    /// The backing file could not be read or written.
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing document exists but is not a JSON object of strings.
    #[error("storage document corrupt: {0}")]
    Corrupt(String),
}

// =============================================================================
// TRAIT
// =============================================================================

/// A string key/value medium.
pub trait Storage: fmt::Debug + Send + Sync {
    /// Return the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the quota would be exceeded or the write fails.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// List every stored key in lexical order.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium cannot be read.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}

// =============================================================================
// QUOTA
// =============================================================================

/// Bytes used by `entries`, counting both keys and values.
fn used_bytes(entries: &BTreeMap<String, String>) -> usize {
    entries.iter().map(|(k, v)| k.len() + v.len()).sum()
}

/// Check that replacing `key` with `value` keeps `entries` within `limit`.
fn check_quota(
    entries: &BTreeMap<String, String>,
    key: &str,
    value: &str,
    limit: Option<usize>,
) -> Result<(), StorageError> {
    let Some(limit) = limit else {
        return Ok(());
    };
    let previous = entries.get(key).map_or(0, |v| key.len() + v.len());
    let required = used_bytes(entries) - previous + key.len() + value.len();
    if required > limit {
        return Err(StorageError::QuotaExceeded { key: key.to_owned(), required, limit });
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

//! Typed JSON values over a `Storage` medium.
//!
//! SYSTEM CONTEXT
//! ==============
//! `PersistedStore` is the injected handle every persisted feature reads and
//! writes through. `Persisted<T>` is one entry plus its in-memory mirror:
//! reads come from the mirror, writes update the mirror and then the medium.
//!
//! ERROR HANDLING
//! ==============
//! `read` and `write` never fail from the caller's point of view. Missing,
//! blank or malformed values read back as the caller's default; failed writes
//! are logged and dropped. `try_write` exists for callers that need to know.
//! A failed write still leaves `Persisted<T>` holding the attempted value, so
//! the mirror can run ahead of the medium until the next successful write.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{error, warn};

use crate::storage::{MemoryStorage, Storage, StorageError};

/// Errors from the fallible write path.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The value could not be encoded as JSON.
    #[error("serialize failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The medium rejected the write.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

// =============================================================================
// STORE
// =============================================================================

/// Shared handle to a persistence medium. Cloning shares the medium.
#[derive(Clone, Debug)]
pub struct PersistedStore {
    medium: Arc<dyn Storage>,
}

impl PersistedStore {
    #[must_use]
    pub fn new(medium: Arc<dyn Storage>) -> Self {
        Self { medium }
    }

    /// Store backed by a fresh `MemoryStorage`.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// The underlying medium.
    #[must_use]
    pub fn medium(&self) -> &dyn Storage {
        self.medium.as_ref()
    }

    /// Load the JSON value under `key`, or `default` if it is absent or unreadable.
    ///
    /// Never touches the medium on failure.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.medium.get_item(key) {
            Ok(Some(raw)) if !raw.is_empty() => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    warn!(key, error = %e, "stored value unreadable; using default");
                    default
                }
            },
            Ok(_) => default,
            Err(e) => {
                error!(key, error = %e, "storage read failed; using default");
                default
            }
        }
    }

    /// Serialize `value` and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the medium rejects the write.
    pub fn try_write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.medium.set_item(key, &raw)?;
        Ok(())
    }

    /// Like [`PersistedStore::try_write`], but failures are logged and dropped.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_write(key, value) {
            error!(key, error = %e, "storage write failed");
        }
    }

    /// Delete `key`. Failures are logged and dropped.
    pub fn remove(&self, key: &str) {
        if let Err(e) = self.medium.remove_item(key) {
            error!(key, error = %e, "storage remove failed");
        }
    }

    /// Open a mirrored entry, seeding the mirror with [`PersistedStore::read`].
    pub fn entry<T>(&self, key: impl Into<String>, default: T) -> Persisted<T>
    where
        T: Serialize + DeserializeOwned,
    {
        let key = key.into();
        let value = self.read(&key, default);
        Persisted { store: self.clone(), key, value }
    }
}

// =============================================================================
// ENTRY
// =============================================================================

/// One persisted value and its in-memory mirror.
#[derive(Debug)]
pub struct Persisted<T> {
    store: PersistedStore,
    key: String,
    value: T,
}

impl<T> Persisted<T>
where
    T: Serialize + DeserializeOwned,
{
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current mirror value.
    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value. The mirror changes even if persisting fails.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.store.write(&self.key, &self.value);
    }

    /// Replace the value with `f(current)`.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.value);
        self.set(next);
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

//! Process-local storage medium.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{Storage, StorageError, check_quota};

/// In-memory `Storage`. Contents are lost when the value is dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<BTreeMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    /// Create an empty medium with no quota.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty medium that rejects writes beyond `limit` bytes.
    #[must_use]
    pub fn with_quota(limit: usize) -> Self {
        Self { entries: Mutex::new(BTreeMap::new()), quota: Some(limit) }
    }

    /// Store a raw value without any quota check. Handy for seeding
    /// fixtures, including deliberately malformed JSON.
    pub fn seed(&self, key: &str, raw: &str) {
        self.lock().insert(key.to_owned(), raw.to_owned());
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.lock();
        check_quota(&entries, key, value, self.quota)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.lock().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.lock().keys().cloned().collect())
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;

use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard},
};

use groceries_domain as domain;

use crate::{Key, KeyValueStorage};

/// Keeps all values in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<BTreeMap<Key, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<MutexGuard<'_, BTreeMap<Key, String>>, domain::StorageError> {
        self.entries
            .lock()
            .map_err(|_| domain::StorageError::Unavailable("lock poisoned".to_string()))
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: Key) -> Result<Option<String>, domain::StorageError> {
        Ok(self.entries()?.get(&key).cloned())
    }

    fn set(&self, key: Key, value: &str) -> Result<(), domain::StorageError> {
        self.entries()?.insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: Key) -> Result<(), domain::StorageError> {
        self.entries()?.remove(&key);
        Ok(())
    }
}

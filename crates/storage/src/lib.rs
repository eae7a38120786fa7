#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::sync::Arc;

use groceries_domain as domain;
use strum::AsRefStr;

pub mod file;
pub mod items;
#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod log;
pub mod memory;


/// A durable slot holding one text value per key.
pub trait KeyValueStorage {
    fn get(&self, key: Key) -> Result<Option<String>, domain::StorageError>;
    fn set(&self, key: Key, value: &str) -> Result<(), domain::StorageError>;
    fn remove(&self, key: Key) -> Result<(), domain::StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get(&self, key: Key) -> Result<Option<String>, domain::StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: Key, value: &str) -> Result<(), domain::StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: Key) -> Result<(), domain::StorageError> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Arc<S> {
    fn get(&self, key: Key) -> Result<Option<String>, domain::StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: Key, value: &str) -> Result<(), domain::StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: Key) -> Result<(), domain::StorageError> {
        (**self).remove(key)
    }
}

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Key {
    #[strum(serialize = "shopping_items")]
    Items,
    #[strum(serialize = "log")]
    Log,
}

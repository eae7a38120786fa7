use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use groceries_domain as domain;

use crate::{Key, KeyValueStorage};

/// Stores each key in its own file inside a directory.
///
/// Values are written to a temporary file first and then renamed over the previous value, so a
/// reader never observes a partially written value.
#[derive(Debug)]
pub struct FileStorage {
    directory: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path(&self, key: Key) -> PathBuf {
        self.directory.join(key.as_ref())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: Key) -> Result<Option<String>, domain::StorageError> {
        match fs::read_to_string(self.path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(err)),
        }
    }

    fn set(&self, key: Key, value: &str) -> Result<(), domain::StorageError> {
        let _guard = self.lock.lock().map_err(|_| lock_error())?;

        fs::create_dir_all(&self.directory).map_err(io_error)?;

        let path = self.path(key);
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value).map_err(io_error)?;
        fs::rename(&temp_path, &path).map_err(io_error)
    }

    fn remove(&self, key: Key) -> Result<(), domain::StorageError> {
        let _guard = self.lock.lock().map_err(|_| lock_error())?;

        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(err)),
        }
    }
}

fn io_error(err: io::Error) -> domain::StorageError {
    domain::StorageError::Other(Box::new(err))
}

fn lock_error() -> domain::StorageError {
    domain::StorageError::Unavailable("lock poisoned".to_string())
}

use std::collections::VecDeque;

use groceries_domain::log;

use crate::{Key, KeyValueStorage};

/// Number of most recent log entries that are kept.
pub const LOG_CAPACITY: usize = 100;

pub struct Log<S> {
    storage: S,
}

impl<S: KeyValueStorage> Log<S> {
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: KeyValueStorage + Send + Sync + 'static> log::Repository for Log<S> {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match self.storage.get(Key::Log) {
            Ok(Some(value)) => {
                serde_json::from_str(&value).map_err(|err| log::Error::Unknown(err.to_string()))
            }
            Ok(None) => Ok(VecDeque::new()),
            Err(err) => Err(log::Error::Unknown(err.to_string())),
        }
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(LOG_CAPACITY);
        let value =
            serde_json::to_string(&entries).map_err(|err| log::Error::Unknown(err.to_string()))?;
        self.storage
            .set(Key::Log, &value)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}

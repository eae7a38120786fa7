use std::collections::BTreeSet;

use groceries_domain as domain;
use log::debug;

use crate::{Key, KeyValueStorage};

/// Stores the item collection as a JSON array under a single key.
#[derive(Debug, Clone)]
pub struct ItemStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> ItemStore<S> {
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: KeyValueStorage> domain::ItemRepository for ItemStore<S> {
    fn read_items(&self) -> Result<Vec<domain::Item>, domain::ReadError> {
        let Some(value) = self.storage.get(Key::Items)? else {
            debug!("no stored items");
            return Ok(vec![]);
        };

        if value.trim().is_empty() {
            return Ok(vec![]);
        }

        let items: Vec<Item> = serde_json::from_str(&value)
            .map_err(|err| domain::ReadError::CorruptData(err.to_string()))?;

        let mut ids = BTreeSet::new();
        items
            .into_iter()
            .map(|item| {
                if ids.insert(item.id) {
                    Ok(item.into())
                } else {
                    Err(domain::ReadError::CorruptData(format!(
                        "duplicate item ID {}",
                        item.id
                    )))
                }
            })
            .collect()
    }

    fn write_items(&self, items: &[domain::Item]) -> Result<(), domain::WriteError> {
        let value = serde_json::to_string(&items.iter().map(Item::from).collect::<Vec<_>>())
            .map_err(|err| domain::WriteError::Other(err.into()))?;
        self.storage.set(Key::Items, &value)?;
        debug!("saved {} items", items.len());
        Ok(())
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub quantity: String,
    pub is_editing: bool,
}

impl From<domain::Item> for Item {
    fn from(value: domain::Item) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::Item> for Item {
    fn from(value: &domain::Item) -> Self {
        Self {
            id: *value.id,
            name: value.name.clone(),
            quantity: value.quantity.clone(),
            is_editing: value.is_editing,
        }
    }
}

impl From<Item> for domain::Item {
    fn from(value: Item) -> Self {
        Self {
            id: value.id.into(),
            name: value.name,
            quantity: value.quantity,
            is_editing: value.is_editing,
        }
    }
}

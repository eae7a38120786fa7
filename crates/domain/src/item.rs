use derive_more::{Deref, Display};

use crate::{ReadError, WriteError};

/// Persistence boundary for the whole item collection.
///
/// Every write replaces the stored collection entirely.
pub trait ItemRepository {
    fn read_items(&self) -> Result<Vec<Item>, ReadError>;
    fn write_items(&self, items: &[Item]) -> Result<(), WriteError>;
}

impl<R: ItemRepository + ?Sized> ItemRepository for &R {
    fn read_items(&self) -> Result<Vec<Item>, ReadError> {
        (**self).read_items()
    }

    fn write_items(&self, items: &[Item]) -> Result<(), WriteError> {
        (**self).write_items(items)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemID,
    pub name: String,
    pub quantity: String,
    pub is_editing: bool,
}

impl Item {
    #[must_use]
    pub fn new(id: ItemID, name: &str, quantity: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            quantity: quantity.to_string(),
            is_editing: false,
        }
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemID(u32);

impl ItemID {
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<u32> for ItemID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Returns the ID following the largest ID in `items`, or 1 for an empty collection.
///
/// IDs of deleted items may be handed out again once no larger ID remains.
#[must_use]
pub fn next_id(items: &[Item]) -> Option<ItemID> {
    items
        .iter()
        .map(|item| item.id)
        .max()
        .unwrap_or_default()
        .next()
}

use log::{debug, error, warn};

use crate::{CreateError, Item, ItemID, ItemRepository, ReadError, WriteError, next_id};

/// In-memory authority over the item collection.
///
/// Each mutating method writes the complete resulting collection to the repository before it
/// replaces the in-memory state. A failed write leaves the collection as it was.
pub struct ShoppingList<R> {
    repository: R,
    items: Vec<Item>,
    // The stored collection differs from `items`.
    dirty: bool,
}

impl<R: ItemRepository> ShoppingList<R> {
    /// Reads the stored collection and fails if it cannot be read.
    pub fn open(repository: R) -> Result<Self, ReadError> {
        let items = repository.read_items()?;
        Ok(Self::with_items(repository, items))
    }

    /// Reads the stored collection, starting with an empty list if it cannot be read.
    ///
    /// Unreadable stored data is kept until the next mutation replaces it.
    pub fn load(repository: R) -> Self {
        match repository.read_items() {
            Ok(items) => Self::with_items(repository, items),
            Err(err) => {
                warn!("failed to load items, starting with an empty list: {err}");
                Self {
                    repository,
                    items: vec![],
                    dirty: true,
                }
            }
        }
    }

    fn with_items(repository: R, mut items: Vec<Item>) -> Self {
        let mut editing = false;
        let mut dirty = false;
        for item in &mut items {
            if item.is_editing {
                if editing {
                    debug!("leaving edit mode of item {}", item.id);
                    item.is_editing = false;
                    dirty = true;
                } else {
                    editing = true;
                }
            }
        }
        Self {
            repository,
            items,
            dirty,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn item(&self, id: ItemID) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn editing_item(&self) -> Option<&Item> {
        self.items.iter().find(|item| item.is_editing)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Appends a new item unless `name` is blank, in which case `Ok(None)` is returned.
    pub fn add_item(&mut self, name: &str, quantity: &str) -> Result<Option<Item>, CreateError> {
        if name.trim().is_empty() {
            debug!("rejected item with blank name");
            return Ok(None);
        }

        let id = next_id(&self.items).ok_or(CreateError::IDExhausted)?;
        let item = Item::new(id, name, quantity);
        let mut items = self.items.clone();
        items.push(item.clone());
        self.commit(items)?;

        Ok(Some(item))
    }

    /// Puts the item into edit mode and takes every other item out of it.
    ///
    /// Returns `false` if no item has the given ID.
    pub fn begin_edit(&mut self, id: ItemID) -> Result<bool, WriteError> {
        if self.item(id).is_none() {
            debug!("cannot edit item {id}: not found");
            return Ok(false);
        }

        let items = self
            .items
            .iter()
            .map(|item| Item {
                is_editing: item.id == id,
                ..item.clone()
            })
            .collect();
        self.commit(items)?;

        Ok(true)
    }

    /// Replaces name and quantity of the item and leaves edit mode for all items.
    ///
    /// The new values are taken as they are, a blank name is accepted here.
    /// Returns `false` if no item has the given ID.
    pub fn complete_edit(
        &mut self,
        id: ItemID,
        name: &str,
        quantity: &str,
    ) -> Result<bool, WriteError> {
        if self.item(id).is_none() {
            debug!("cannot complete edit of item {id}: not found");
            return Ok(false);
        }

        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    Item::new(id, name, quantity)
                } else {
                    Item {
                        is_editing: false,
                        ..item.clone()
                    }
                }
            })
            .collect();
        self.commit(items)?;

        Ok(true)
    }

    /// Removes the item and returns it, or `Ok(None)` if no item has the given ID.
    pub fn delete_item(&mut self, id: ItemID) -> Result<Option<Item>, WriteError> {
        let Some(position) = self.items.iter().position(|item| item.id == id) else {
            debug!("cannot delete item {id}: not found");
            return Ok(None);
        };

        let mut items = self.items.clone();
        let item = items.remove(position);
        self.commit(items)?;

        Ok(Some(item))
    }

    fn commit(&mut self, items: Vec<Item>) -> Result<(), WriteError> {
        if items == self.items && !self.dirty {
            return Ok(());
        }

        if let Err(err) = self.repository.write_items(&items) {
            error!("failed to save items: {err}");
            return Err(err);
        }

        self.items = items;
        self.dirty = false;
        Ok(())
    }
}

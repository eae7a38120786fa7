use std::fmt::Debug;

use gloo_storage::Storage as GlooStorage;
use groceries_domain as domain;

use crate::{Key, KeyValueStorage};

/// The browser's local storage, persisted by the platform across restarts.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: Key) -> Result<Option<String>, domain::StorageError> {
        gloo_storage::LocalStorage::raw()
            .get_item(key.as_ref())
            .map_err(js_error)
    }

    fn set(&self, key: Key, value: &str) -> Result<(), domain::StorageError> {
        gloo_storage::LocalStorage::raw()
            .set_item(key.as_ref(), value)
            .map_err(js_error)
    }

    fn remove(&self, key: Key) -> Result<(), domain::StorageError> {
        gloo_storage::LocalStorage::raw()
            .remove_item(key.as_ref())
            .map_err(js_error)
    }
}

fn js_error(err: impl Debug) -> domain::StorageError {
    domain::StorageError::Unavailable(format!("{err:?}"))
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod tests {
    use groceries_domain::{ItemRepository, ShoppingList};
    use pretty_assertions::assert_eq;
    use wasm_bindgen_test::wasm_bindgen_test;

    use crate::items::ItemStore;

    use super::*;

    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    fn reset() {
        LocalStorage.remove(Key::Items).unwrap();
        LocalStorage.remove(Key::Log).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_local_storage() {
        reset();

        assert_eq!(LocalStorage.get(Key::Items).unwrap(), None);

        LocalStorage.set(Key::Items, "[]").unwrap();
        assert_eq!(LocalStorage.get(Key::Items).unwrap(), Some("[]".to_string()));

        LocalStorage.remove(Key::Items).unwrap();
        assert_eq!(LocalStorage.get(Key::Items).unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_shopping_list() {
        reset();

        let mut list = ShoppingList::load(ItemStore::new(LocalStorage));
        list.add_item("Milk", "2").unwrap();
        list.add_item("Bread", "1").unwrap();

        assert_eq!(
            ItemStore::new(LocalStorage).read_items().unwrap(),
            list.items()
        );
    }
}

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod item;
pub mod log;
mod shopping_list;

pub use error::{CreateError, ReadError, StorageError, WriteError};
pub use item::{Item, ItemID, ItemRepository, next_id};
pub use shopping_list::ShoppingList;

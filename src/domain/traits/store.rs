//! Inventory storage abstractions

use crate::application::errors::StorageError;
use crate::domain::entities::Item;

/// Inventory storage handle.
///
/// One handle serves one request; it is dropped when the request finishes.
pub trait InventoryStore: Send {
    /// All items ordered by category, then name
    fn list_items(&mut self) -> Result<Vec<Item>, StorageError>;

    /// The item in `category` currently held by `holder`, if any
    fn find_held(&mut self, category: &str, holder: &str) -> Result<Option<Item>, StorageError>;

    /// Any unheld item in `category`; which one is up to the store
    fn find_available(&mut self, category: &str) -> Result<Option<Item>, StorageError>;

    /// Set or clear the holder of one item and commit
    fn set_holder(&mut self, item_id: i64, holder: Option<&str>) -> Result<(), StorageError>;

    /// Provision an item. Existing names are left alone; returns whether a row was added.
    fn insert_item(&mut self, category: &str, name: &str) -> Result<bool, StorageError>;
}

/// Opens per-request store handles
pub trait StoreFactory: Send + Sync {
    fn open(&self) -> Result<Box<dyn InventoryStore>, StorageError>;
}

//! In-memory inventory store

use std::sync::{Arc, Mutex, MutexGuard};

use crate::application::errors::StorageError;
use crate::domain::entities::Item;
use crate::domain::traits::{InventoryStore, StoreFactory};

#[derive(Debug, Default)]
struct Inventory {
    items: Vec<Item>,
    next_id: i64,
}

/// Process-local store; clones share the same inventory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inventory>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inventory>, StorageError> {
        self.inner
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))
    }

    /// Copy of every item, ordered like `list_items`
    pub fn snapshot(&self) -> Vec<Item> {
        let items = match self.inner.lock() {
            Ok(inventory) => inventory.items.clone(),
            Err(poisoned) => poisoned.into_inner().items.clone(),
        };
        sorted(items)
    }
}

fn sorted(mut items: Vec<Item>) -> Vec<Item> {
    items.sort_by(|a, b| (&a.category, &a.name).cmp(&(&b.category, &b.name)));
    items
}

impl InventoryStore for MemoryStore {
    fn list_items(&mut self) -> Result<Vec<Item>, StorageError> {
        let items = self.lock()?.items.clone();
        Ok(sorted(items))
    }

    fn find_held(&mut self, category: &str, holder: &str) -> Result<Option<Item>, StorageError> {
        let inventory = self.lock()?;
        Ok(inventory
            .items
            .iter()
            .find(|item| item.category == category && item.is_held_by(holder))
            .cloned())
    }

    fn find_available(&mut self, category: &str) -> Result<Option<Item>, StorageError> {
        let inventory = self.lock()?;
        Ok(inventory
            .items
            .iter()
            .find(|item| item.category == category && item.is_available())
            .cloned())
    }

    fn set_holder(&mut self, item_id: i64, holder: Option<&str>) -> Result<(), StorageError> {
        let mut inventory = self.lock()?;
        let item = inventory
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or(StorageError::NotFound(item_id))?;
        item.holder = holder.map(str::to_string);
        Ok(())
    }

    fn insert_item(&mut self, category: &str, name: &str) -> Result<bool, StorageError> {
        let mut inventory = self.lock()?;
        if inventory.items.iter().any(|item| item.name == name) {
            return Ok(false);
        }
        inventory.next_id += 1;
        let id = inventory.next_id;
        inventory.items.push(Item::new(id, category, name));
        Ok(true)
    }
}

impl StoreFactory for MemoryStore {
    fn open(&self) -> Result<Box<dyn InventoryStore>, StorageError> {
        Ok(Box::new(self.clone()))
    }
}

//! SQLite inventory storage

use rusqlite::{Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};

use crate::application::errors::StorageError;
use crate::domain::entities::{Category, Item};
use crate::domain::traits::{InventoryStore, StoreFactory};
use crate::infrastructure::config::SeedItem;

/// SQLite-backed inventory, one connection per handle
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init_tables()?;
        Ok(store)
    }

    fn init_tables(&self) -> Result<(), StorageError> {
        // Rows are normally provisioned by `seed`; this only guarantees the table exists
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS inventory (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                category TEXT NOT NULL,
                name TEXT NOT NULL UNIQUE,
                holder TEXT
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_inventory_category_holder ON inventory(category, holder)",
            [],
        )?;

        Ok(())
    }

    fn item_from_row(row: &Row<'_>) -> rusqlite::Result<Item> {
        Ok(Item {
            id: row.get(0)?,
            category: row.get(1)?,
            name: row.get(2)?,
            holder: row.get(3)?,
        })
    }
}

impl InventoryStore for SqliteStore {
    fn list_items(&mut self) -> Result<Vec<Item>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, category, name, holder FROM inventory ORDER BY category, name"
        )?;

        let rows = stmt.query_map([], Self::item_from_row)?;

        let mut items = Vec::new();
        for item in rows {
            items.push(item?);
        }
        Ok(items)
    }

    fn find_held(&mut self, category: &str, holder: &str) -> Result<Option<Item>, StorageError> {
        let item = self
            .conn
            .query_row(
                "SELECT id, category, name, holder FROM inventory
                 WHERE category = ?1 AND holder = ?2 LIMIT 1",
                [category, holder],
                Self::item_from_row,
            )
            .optional()?;
        Ok(item)
    }

    fn find_available(&mut self, category: &str) -> Result<Option<Item>, StorageError> {
        let item = self
            .conn
            .query_row(
                "SELECT id, category, name, holder FROM inventory
                 WHERE category = ?1 AND holder IS NULL LIMIT 1",
                [category],
                Self::item_from_row,
            )
            .optional()?;
        Ok(item)
    }

    fn set_holder(&mut self, item_id: i64, holder: Option<&str>) -> Result<(), StorageError> {
        let rows = self.conn.execute(
            "UPDATE inventory SET holder = ?1 WHERE id = ?2",
            rusqlite::params![holder, item_id],
        )?;
        if rows == 0 {
            return Err(StorageError::NotFound(item_id));
        }
        Ok(())
    }

    fn insert_item(&mut self, category: &str, name: &str) -> Result<bool, StorageError> {
        let rows = self.conn.execute(
            "INSERT OR IGNORE INTO inventory (category, name) VALUES (?1, ?2)",
            [category, name],
        )?;
        Ok(rows > 0)
    }
}

/// Opens a fresh SQLite connection for every request
#[derive(Debug, Clone)]
pub struct SqliteStoreFactory {
    path: PathBuf,
}

impl SqliteStoreFactory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StoreFactory for SqliteStoreFactory {
    fn open(&self) -> Result<Box<dyn InventoryStore>, StorageError> {
        Ok(Box::new(SqliteStore::open(&self.path)?))
    }
}

/// Provision seed items, skipping names that already exist. Returns how many were added.
pub fn seed_items(store: &mut dyn InventoryStore, items: &[SeedItem]) -> Result<usize, StorageError> {
    let mut added = 0;
    for item in items {
        if Category::from_code(&item.category).is_none() {
            tracing::warn!("Seeding '{}' with unrecognized category code '{}'", item.name, item.category);
        }
        if store.insert_item(&item.category, &item.name)? {
            tracing::info!("Seeded {} ({})", item.name, item.category);
            added += 1;
        } else {
            tracing::debug!("{} already provisioned", item.name);
        }
    }
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_store() -> SqliteStore {
        SqliteStore::open(":memory:").expect("in-memory sqlite")
    }

    #[test]
    fn list_orders_by_category_then_name() {
        let mut store = memory_store();
        store.insert_item("umbrella", "U2").unwrap();
        store.insert_item("umbrella", "U1").unwrap();
        store.insert_item("charger_c", "C1").unwrap();

        let names: Vec<String> = store.list_items().unwrap().into_iter().map(|i| i.name).collect();
        assert_eq!(names, ["C1", "U1", "U2"]);
    }

    #[test]
    fn insert_ignores_duplicate_names() {
        let mut store = memory_store();
        assert!(store.insert_item("umbrella", "U1").unwrap());
        assert!(!store.insert_item("umbrella", "U1").unwrap());
        assert_eq!(store.list_items().unwrap().len(), 1);
    }

    #[test]
    fn holder_assignment_is_visible_to_queries() {
        let mut store = memory_store();
        store.insert_item("umbrella", "U1").unwrap();

        let free = store.find_available("umbrella").unwrap().unwrap();
        store.set_holder(free.id, Some("alice")).unwrap();

        assert!(store.find_available("umbrella").unwrap().is_none());
        let held = store.find_held("umbrella", "alice").unwrap().unwrap();
        assert_eq!(held.name, "U1");
        assert!(store.find_held("charger_c", "alice").unwrap().is_none());

        store.set_holder(held.id, None).unwrap();
        assert!(store.find_held("umbrella", "alice").unwrap().is_none());
    }

    #[test]
    fn set_holder_on_missing_row_is_an_error() {
        let mut store = memory_store();
        assert!(matches!(store.set_holder(7, Some("x")), Err(StorageError::NotFound(7))));
    }

    #[test]
    fn seeding_twice_adds_nothing_new() {
        let mut store = memory_store();
        let items = vec![SeedItem::new("umbrella", "U1"), SeedItem::new("charger_c", "C1")];
        assert_eq!(seed_items(&mut store, &items).unwrap(), 2);
        assert_eq!(seed_items(&mut store, &items).unwrap(), 0);
        assert_eq!(store.list_items().unwrap().len(), 2);
    }
}

//! Inventory service - Rent, return and transfer rules

use crate::application::errors::StorageError;
use crate::domain::entities::{Category, Outcome};
use crate::domain::traits::InventoryStore;

/// Lending rules over an inventory store.
///
/// A person holds at most one item per category. Return and transfer only
/// ever look at the item the named person holds, so nobody can move an
/// item they don't have.
pub struct InventoryService<'a> {
    store: &'a mut dyn InventoryStore,
}

impl<'a> InventoryService<'a> {
    pub fn new(store: &'a mut dyn InventoryStore) -> Self {
        Self { store }
    }

    pub fn status(&mut self) -> Result<Outcome, StorageError> {
        Ok(Outcome::Status(self.store.list_items()?))
    }

    pub fn rent(&mut self, requester: &str, category: Category) -> Result<Outcome, StorageError> {
        if let Some(item) = self.store.find_held(category.code(), requester)? {
            return Ok(Outcome::AlreadyHolding {
                category,
                holder: requester.to_string(),
                item,
            });
        }

        let Some(mut item) = self.store.find_available(category.code())? else {
            return Ok(Outcome::NoneAvailable { category });
        };

        self.store.set_holder(item.id, Some(requester))?;
        item.holder = Some(requester.to_string());
        tracing::info!(item = %item.name, holder = requester, "Item rented");

        Ok(Outcome::Rented {
            item,
            holder: requester.to_string(),
        })
    }

    pub fn return_item(&mut self, requester: &str, category: Category) -> Result<Outcome, StorageError> {
        let Some(mut item) = self.store.find_held(category.code(), requester)? else {
            return Ok(Outcome::NothingToReturn {
                category,
                holder: requester.to_string(),
            });
        };

        self.store.set_holder(item.id, None)?;
        item.holder = None;
        tracing::info!(item = %item.name, holder = requester, "Item returned");

        Ok(Outcome::Returned {
            item,
            holder: requester.to_string(),
        })
    }

    pub fn transfer(&mut self, from: &str, to: &str, category: Category) -> Result<Outcome, StorageError> {
        let Some(mut item) = self.store.find_held(category.code(), from)? else {
            return Ok(Outcome::NothingToTransfer {
                category,
                from: from.to_string(),
            });
        };

        if let Some(conflict) = self.store.find_held(category.code(), to)? {
            return Ok(Outcome::RecipientHolding {
                category,
                to: to.to_string(),
                item: conflict,
            });
        }

        // Straight reassignment; the item is never persisted as unheld in between
        self.store.set_holder(item.id, Some(to))?;
        item.holder = Some(to.to_string());
        tracing::info!(item = %item.name, from, to, "Item transferred");

        Ok(Outcome::Transferred {
            item,
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Item;
    use crate::infrastructure::storage::MemoryStore;

    fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        let mut handle = store.clone();
        handle.insert_item("umbrella", "U1").unwrap();
        handle.insert_item("umbrella", "U2").unwrap();
        handle.insert_item("charger_c", "C1").unwrap();
        store
    }

    fn holder_of(store: &MemoryStore, name: &str) -> Option<String> {
        store
            .snapshot()
            .into_iter()
            .find(|item| item.name == name)
            .and_then(|item| item.holder)
    }

    #[test]
    fn rent_assigns_an_unheld_item() {
        let mut store = seeded();
        let outcome = InventoryService::new(&mut store).rent("alice", Category::Umbrella).unwrap();

        let Outcome::Rented { item, holder } = outcome else {
            panic!("expected Rented, got {outcome:?}");
        };
        assert_eq!(holder, "alice");
        assert_eq!(item.category, "umbrella");
        assert_eq!(holder_of(&store, &item.name).as_deref(), Some("alice"));
    }

    #[test]
    fn second_rent_in_same_category_is_refused_without_changes() {
        let mut store = seeded();
        InventoryService::new(&mut store).rent("alice", Category::Umbrella).unwrap();
        let before = store.snapshot();

        let outcome = InventoryService::new(&mut store).rent("alice", Category::Umbrella).unwrap();

        assert!(matches!(outcome, Outcome::AlreadyHolding { ref holder, .. } if holder == "alice"));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn one_item_per_category_not_per_person() {
        let mut store = seeded();
        let mut service = InventoryService::new(&mut store);
        assert!(service.rent("alice", Category::Umbrella).unwrap().is_mutation());
        assert!(service.rent("alice", Category::ChargerC).unwrap().is_mutation());
    }

    #[test]
    fn rent_reports_none_available_when_category_exhausted() {
        let mut store = seeded();
        let mut service = InventoryService::new(&mut store);
        service.rent("alice", Category::ChargerC).unwrap();

        let outcome = service.rent("bob", Category::ChargerC).unwrap();
        assert_eq!(outcome, Outcome::NoneAvailable { category: Category::ChargerC });
    }

    #[test]
    fn return_frees_the_item_and_second_return_is_refused() {
        let mut store = seeded();
        let mut service = InventoryService::new(&mut store);
        service.rent("alice", Category::ChargerC).unwrap();

        let outcome = service.return_item("alice", Category::ChargerC).unwrap();
        assert!(matches!(outcome, Outcome::Returned { ref item, .. } if item.name == "C1" && item.is_available()));

        let outcome = service.return_item("alice", Category::ChargerC).unwrap();
        assert!(matches!(outcome, Outcome::NothingToReturn { .. }));
        assert_eq!(holder_of(&store, "C1"), None);
    }

    #[test]
    fn only_the_holder_can_return() {
        let mut store = seeded();
        let mut service = InventoryService::new(&mut store);
        service.rent("alice", Category::ChargerC).unwrap();

        let outcome = service.return_item("mallory", Category::ChargerC).unwrap();
        assert!(matches!(outcome, Outcome::NothingToReturn { ref holder, .. } if holder == "mallory"));
        assert_eq!(holder_of(&store, "C1").as_deref(), Some("alice"));
    }

    #[test]
    fn transfer_moves_the_same_item() {
        let mut store = seeded();
        let mut service = InventoryService::new(&mut store);
        service.rent("alice", Category::ChargerC).unwrap();

        let outcome = service.transfer("alice", "bob", Category::ChargerC).unwrap();
        assert!(matches!(outcome, Outcome::Transferred { ref item, .. } if item.name == "C1"));
        assert_eq!(holder_of(&store, "C1").as_deref(), Some("bob"));

        let outcome = InventoryService::new(&mut store).return_item("alice", Category::ChargerC).unwrap();
        assert!(matches!(outcome, Outcome::NothingToReturn { .. }));
    }

    #[test]
    fn transfer_to_someone_already_holding_is_refused() {
        let mut store = seeded();
        let mut service = InventoryService::new(&mut store);
        service.rent("alice", Category::Umbrella).unwrap();
        service.rent("bob", Category::Umbrella).unwrap();
        let before = store.snapshot();

        let outcome = InventoryService::new(&mut store).transfer("alice", "bob", Category::Umbrella).unwrap();
        assert!(matches!(outcome, Outcome::RecipientHolding { ref to, .. } if to == "bob"));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn transfer_without_holding_is_refused() {
        let mut store = seeded();
        let outcome = InventoryService::new(&mut store).transfer("alice", "bob", Category::Umbrella).unwrap();
        assert!(matches!(outcome, Outcome::NothingToTransfer { ref from, .. } if from == "alice"));
    }

    #[test]
    fn status_lists_items_by_category_then_name() {
        let mut store = seeded();
        let Outcome::Status(items) = InventoryService::new(&mut store).status().unwrap() else {
            panic!("expected Status");
        };
        let names: Vec<&str> = items.iter().map(|i: &Item| i.name.as_str()).collect();
        assert_eq!(names, ["C1", "U1", "U2"]);
    }
}

//! Integration tests for the inventory domain service
//!
//! These tests drive the full service contract against an in-memory
//! repository, covering the business invariants end to end without a
//! database: upc uniqueness, existence-before-update, forced status on
//! creation, and store-side id assignment.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use inventory_api::domain::errors::{DomainError, RepositoryError};
use inventory_api::domain::inventory::{InventoryItem, InventoryService, STATUS_ACTIVE};
use inventory_api::domain::repositories::InventoryRepository;

/// In-memory repository with store-side id assignment and a unique index
/// on upc, mirroring the MySQL schema
#[derive(Clone, Default)]
struct InMemoryRepository {
    items: Arc<Mutex<Vec<InventoryItem>>>,
}

#[async_trait]
impl InventoryRepository for InMemoryRepository {
    async fn get_all(&self) -> Result<Vec<InventoryItem>, RepositoryError> {
        Ok(self.items.lock().unwrap().clone())
    }

    async fn get_by_upc(&self, upc: &str) -> Result<Option<InventoryItem>, RepositoryError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|item| item.upc == upc)
            .cloned())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<InventoryItem>, RepositoryError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|item| item.id == id)
            .cloned())
    }

    async fn create(&self, item: &InventoryItem) -> Result<(), RepositoryError> {
        let mut items = self.items.lock().unwrap();
        if items.iter().any(|existing| existing.upc == item.upc) {
            return Err(RepositoryError::UniqueViolation(item.upc.clone()));
        }

        let mut stored = item.clone();
        stored.id = items.iter().map(|existing| existing.id).max().unwrap_or(0) + 1;
        items.push(stored);
        Ok(())
    }

    async fn update(&self, item: &InventoryItem) -> Result<(), RepositoryError> {
        let mut items = self.items.lock().unwrap();
        if let Some(stored) = items.iter_mut().find(|stored| stored.upc == item.upc) {
            stored.name = item.name.clone();
            stored.description = item.description.clone();
            stored.manufacturer = item.manufacturer.clone();
            stored.quantity = item.quantity;
            stored.status = item.status.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.items.lock().unwrap().retain(|item| item.id != id);
        Ok(())
    }
}

fn setup_service() -> (
    InventoryService<InMemoryRepository>,
    InMemoryRepository,
) {
    let repo = InMemoryRepository::default();
    (InventoryService::new(repo.clone()), repo)
}

fn item(upc: &str, name: &str, quantity: i64) -> InventoryItem {
    InventoryItem {
        id: 0,
        upc: upc.to_string(),
        name: Some(name.to_string()),
        description: None,
        manufacturer: None,
        quantity,
        status: String::new(),
    }
}

#[tokio::test]
async fn added_item_equals_the_repository_row() {
    let (service, repo) = setup_service();

    let stored = service.add_item(item("11223344", "Widget", 3)).await.unwrap();

    let row = repo.get_by_upc("11223344").await.unwrap().unwrap();
    assert_eq!(stored, row);
    assert_eq!(stored.status, STATUS_ACTIVE);
    assert!(stored.id > 0);
}

#[tokio::test]
async fn adding_the_same_upc_twice_conflicts() {
    let (service, _repo) = setup_service();

    service.add_item(item("11223344", "Widget", 3)).await.unwrap();
    let second = service.add_item(item("11223344", "Widget", 3)).await;

    assert!(matches!(second, Err(DomainError::Conflict { .. })));
}

#[tokio::test]
async fn full_lifecycle_add_get_update_delete() {
    let (service, _repo) = setup_service();

    let stored = service
        .add_item(item("17273747", "Gadget", 7))
        .await
        .unwrap();

    // Lookup by id and by upc both resolve to the same row
    let by_id = service
        .get_single_item(Some(stored.id), None)
        .await
        .unwrap()
        .unwrap();
    let by_upc = service
        .get_single_item(None, Some("17273747"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_id, by_upc);

    // Update the quantity and confirm the round-trip
    let mut changed = stored.clone();
    changed.quantity = 12;
    let updated = service.update_item(changed).await.unwrap();
    assert_eq!(updated.quantity, 12);
    assert_eq!(updated.id, stored.id);

    // Delete and confirm the item is gone
    service.delete_item(stored.id).await.unwrap();
    let gone = service
        .get_single_item(Some(stored.id), None)
        .await
        .unwrap();
    assert!(gone.is_none());
}

#[tokio::test]
async fn update_preserves_unmentioned_rows() {
    let (service, _repo) = setup_service();

    service.add_item(item("12223242", "One", 1)).await.unwrap();
    service.add_item(item("13233343", "Two", 2)).await.unwrap();

    let mut changed = item("12223242", "One", 5);
    changed.status = STATUS_ACTIVE.to_string();
    service.update_item(changed).await.unwrap();

    let untouched = service
        .get_single_item(None, Some("13233343"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(untouched.quantity, 2);
}

#[tokio::test]
async fn listing_reflects_writes_and_is_stable_between_them() {
    let (service, _repo) = setup_service();

    service.add_item(item("12223242", "One", 1)).await.unwrap();
    service.add_item(item("13233343", "Two", 2)).await.unwrap();

    let first = service.get_all_items().await.unwrap();
    let second = service.get_all_items().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);

    service.delete_item(first[0].id).await.unwrap();
    let after_delete = service.get_all_items().await.unwrap();
    assert_eq!(after_delete.len(), 1);
}

#[tokio::test]
async fn update_on_missing_upc_does_not_create_a_row() {
    let (service, _repo) = setup_service();

    let result = service.update_item(item("16263646", "Ghost", 1)).await;

    assert!(matches!(result, Err(DomainError::NotFound { .. })));
    assert!(service.get_all_items().await.unwrap().is_empty());
}

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::inventory::InventoryItem;

/// Repository trait for inventory persistence
///
/// Defines the contract the domain service depends on.
/// Implementations should handle database-specific details.
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// All items, in the store's natural order
    async fn get_all(&self) -> Result<Vec<InventoryItem>, RepositoryError>;

    /// Find an item by its upc
    async fn get_by_upc(&self, upc: &str) -> Result<Option<InventoryItem>, RepositoryError>;

    /// Find an item by its id
    async fn get_by_id(&self, id: i64) -> Result<Option<InventoryItem>, RepositoryError>;

    /// Insert a new item; the store assigns the id
    async fn create(&self, item: &InventoryItem) -> Result<(), RepositoryError>;

    /// Overwrite the stored row keyed by the item's upc
    async fn update(&self, item: &InventoryItem) -> Result<(), RepositoryError>;

    /// Delete an item by id; absent ids are a no-op
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

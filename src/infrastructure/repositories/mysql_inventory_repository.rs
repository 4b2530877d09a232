use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::domain::errors::RepositoryError;
use crate::domain::inventory::InventoryItem;
use crate::domain::repositories::InventoryRepository;

/// MySQL implementation of InventoryRepository
///
/// One short-lived query per call against the shared pool; connection
/// lifecycle is the pool's concern. Failures are recorded here and
/// re-raised unchanged.
pub struct MySqlInventoryRepository {
    pool: MySqlPool,
}

impl MySqlInventoryRepository {
    /// Creates a new MySqlInventoryRepository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryRepository for MySqlInventoryRepository {
    async fn get_all(&self) -> Result<Vec<InventoryItem>, RepositoryError> {
        let items = sqlx::query_as::<_, InventoryItem>(
            "SELECT id, upc, name, description, manufacturer, quantity, status
             FROM inventory",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to list inventory items");
            RepositoryError::from(e)
        })?;

        Ok(items)
    }

    async fn get_by_upc(&self, upc: &str) -> Result<Option<InventoryItem>, RepositoryError> {
        let item = sqlx::query_as::<_, InventoryItem>(
            "SELECT id, upc, name, description, manufacturer, quantity, status
             FROM inventory
             WHERE upc = ?",
        )
        .bind(upc)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, upc, "failed to fetch inventory item by upc");
            RepositoryError::from(e)
        })?;

        Ok(item)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<InventoryItem>, RepositoryError> {
        let item = sqlx::query_as::<_, InventoryItem>(
            "SELECT id, upc, name, description, manufacturer, quantity, status
             FROM inventory
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, id, "failed to fetch inventory item by id");
            RepositoryError::from(e)
        })?;

        Ok(item)
    }

    async fn create(&self, item: &InventoryItem) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO inventory (upc, name, description, manufacturer, quantity, status)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&item.upc)
        .bind(&item.name)
        .bind(&item.description)
        .bind(&item.manufacturer)
        .bind(item.quantity)
        .bind(&item.status)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, upc = %item.upc, "failed to insert inventory item");
            RepositoryError::from(e)
        })?;

        Ok(())
    }

    async fn update(&self, item: &InventoryItem) -> Result<(), RepositoryError> {
        sqlx::query(
            "UPDATE inventory
             SET name = ?, description = ?, manufacturer = ?, quantity = ?, status = ?
             WHERE upc = ?",
        )
        .bind(&item.name)
        .bind(&item.description)
        .bind(&item.manufacturer)
        .bind(item.quantity)
        .bind(&item.status)
        .bind(&item.upc)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, upc = %item.upc, "failed to update inventory item");
            RepositoryError::from(e)
        })?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM inventory WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, id, "failed to delete inventory item");
                RepositoryError::from(e)
            })?;

        Ok(())
    }
}

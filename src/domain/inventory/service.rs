use crate::domain::errors::{DomainError, DomainResult, RepositoryError};
use crate::domain::inventory::item::{InventoryItem, STATUS_ACTIVE};
use crate::domain::inventory::value_objects::Upc;
use crate::domain::repositories::InventoryRepository;

/// Inventory domain service
///
/// The single place where inventory business rules are enforced; all write
/// operations route through here rather than the repository directly.
///
/// # Invariants
/// - A upc is unique among existing items
/// - Updates require the target upc to exist
/// - New items always start with status `"Active"`
///
/// Generic over the repository contract so the rules can be exercised
/// against an in-memory double.
pub struct InventoryService<R> {
    repository: R,
}

impl<R: InventoryRepository> InventoryService<R> {
    /// Creates a new InventoryService on top of a repository
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// All inventory items, in the repository's natural order
    pub async fn get_all_items(&self) -> DomainResult<Vec<InventoryItem>> {
        Ok(self.repository.get_all().await?)
    }

    /// A single item selected by id or upc
    ///
    /// `id` takes precedence when both selectors are present. A lookup that
    /// matches nothing returns `Ok(None)`; supplying neither selector is a
    /// malformed request.
    pub async fn get_single_item(
        &self,
        id: Option<i64>,
        upc: Option<&str>,
    ) -> DomainResult<Option<InventoryItem>> {
        if let Some(id) = id {
            return Ok(self.repository.get_by_id(id).await?);
        }

        if let Some(upc) = upc {
            return Ok(self.repository.get_by_upc(upc).await?);
        }

        Err(DomainError::InvalidRequest(
            "must supply an id or a upc to select a single item".to_string(),
        ))
    }

    /// Adds a new item and returns the stored row
    ///
    /// The repository is the source of truth for the assigned id, so the
    /// just-written row is re-read by upc before returning.
    pub async fn add_item(&self, mut item: InventoryItem) -> DomainResult<InventoryItem> {
        let upc = Upc::new(item.upc).map_err(|_| {
            DomainError::Validation("a upc is required to add an inventory item".to_string())
        })?;

        if self.repository.get_by_upc(upc.as_str()).await?.is_some() {
            return Err(DomainError::Conflict {
                upc: upc.into_inner(),
            });
        }

        item.upc = upc.into_inner();
        item.status = STATUS_ACTIVE.to_string();

        // The pre-check above is not atomic against concurrent writers; a
        // unique-key violation at write time is the same conflict.
        if let Err(err) = self.repository.create(&item).await {
            return match err {
                RepositoryError::UniqueViolation(_) => Err(DomainError::Conflict { upc: item.upc }),
                other => Err(other.into()),
            };
        }

        let stored = self.repository.get_by_upc(&item.upc).await?;
        stored.ok_or(DomainError::NotFound { upc: item.upc })
    }

    /// Overwrites an existing item and returns the stored row
    ///
    /// Full-row overwrite semantics: every field provided replaces the
    /// stored row, including `status` and `quantity`.
    pub async fn update_item(&self, mut item: InventoryItem) -> DomainResult<InventoryItem> {
        let upc = Upc::new(item.upc).map_err(|_| {
            DomainError::Validation("must provide an inventory item to update".to_string())
        })?;

        if self.repository.get_by_upc(upc.as_str()).await?.is_none() {
            return Err(DomainError::NotFound {
                upc: upc.into_inner(),
            });
        }

        item.upc = upc.into_inner();
        self.repository.update(&item).await?;

        let stored = self.repository.get_by_upc(&item.upc).await?;
        stored.ok_or(DomainError::NotFound { upc: item.upc })
    }

    /// Deletes an item by id
    ///
    /// No existence pre-check: deleting an absent id is a no-op, not an
    /// error.
    pub async fn delete_item(&self, id: i64) -> DomainResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}

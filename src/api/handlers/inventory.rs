use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;

use crate::api::errors::ApiError;
use crate::domain::inventory::{InventoryItem, InventoryService};
use crate::infrastructure::repositories::MySqlInventoryRepository;

/// Request body for creating or updating an item
///
/// `id` and `status` may be omitted: the store assigns ids and creation
/// forces the status regardless of what the caller sends.
#[derive(Debug, Deserialize)]
pub struct ItemRequest {
    #[serde(default)]
    pub id: i64,
    pub upc: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub status: String,
}

impl From<ItemRequest> for InventoryItem {
    fn from(req: ItemRequest) -> Self {
        Self {
            id: req.id,
            upc: req.upc,
            name: req.name,
            description: req.description,
            manufacturer: req.manufacturer,
            quantity: req.quantity,
            status: req.status,
        }
    }
}

/// Response carrying a stored item
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub upc: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub manufacturer: Option<String>,
    pub quantity: i64,
    pub status: String,
}

impl From<&InventoryItem> for ItemResponse {
    fn from(item: &InventoryItem) -> Self {
        Self {
            id: item.id,
            upc: item.upc.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            manufacturer: item.manufacturer.clone(),
            quantity: item.quantity,
            status: item.status.clone(),
        }
    }
}

/// Selectors for a single-item lookup; at least one must be present
#[derive(Debug, Deserialize)]
pub struct SingleItemQuery {
    pub id: Option<i64>,
    pub upc: Option<String>,
}

fn service(pool: MySqlPool) -> InventoryService<MySqlInventoryRepository> {
    InventoryService::new(MySqlInventoryRepository::new(pool))
}

/// List every inventory item
///
/// GET /api/inventory
pub async fn list_items(
    State(pool): State<MySqlPool>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = service(pool).get_all_items().await?;

    Ok(Json(items.iter().map(ItemResponse::from).collect()))
}

/// Fetch a single item by id or upc
///
/// GET /api/inventory/item?id=&upc=
pub async fn get_item(
    State(pool): State<MySqlPool>,
    Query(query): Query<SingleItemQuery>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = service(pool)
        .get_single_item(query.id, query.upc.as_deref())
        .await?
        .ok_or_else(|| ApiError::not_found("no inventory item matches the requested selector"))?;

    Ok(Json(ItemResponse::from(&item)))
}

/// Create a new item
///
/// POST /api/inventory
pub async fn add_item(
    State(pool): State<MySqlPool>,
    Json(req): Json<ItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let stored = service(pool).add_item(req.into()).await?;

    Ok((StatusCode::CREATED, Json(ItemResponse::from(&stored))))
}

/// Overwrite an existing item
///
/// PUT /api/inventory
pub async fn update_item(
    State(pool): State<MySqlPool>,
    Json(req): Json<ItemRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    let stored = service(pool).update_item(req.into()).await?;

    Ok(Json(ItemResponse::from(&stored)))
}

/// Delete an item by id
///
/// DELETE /api/inventory/:id
pub async fn delete_item(
    State(pool): State<MySqlPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    service(pool).delete_item(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}

use sqlx::FromRow;

/// Status assigned to every newly created item, regardless of caller input
pub const STATUS_ACTIVE: &str = "Active";

/// An inventory record
///
/// `id` is assigned by the store on insert and immutable afterwards. `upc`
/// is caller-assigned and unique across existing items. `status` is opaque
/// free text to the domain layer except for the forced value on creation.
///
/// # Example
/// ```
/// use inventory_api::domain::inventory::{InventoryItem, STATUS_ACTIVE};
///
/// let item = InventoryItem {
///     id: 0,
///     upc: "11223344".to_string(),
///     name: Some("Widget".to_string()),
///     description: None,
///     manufacturer: None,
///     quantity: 3,
///     status: STATUS_ACTIVE.to_string(),
/// };
/// assert_eq!(item.upc, "11223344");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct InventoryItem {
    pub id: i64,
    pub upc: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub manufacturer: Option<String>,
    pub quantity: i64,
    pub status: String,
}

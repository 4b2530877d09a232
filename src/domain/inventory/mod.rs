// Inventory domain module
// Contains the item entity, value objects, and the orchestration service

pub mod item;
pub mod service;
pub mod value_objects;

// Re-export main types for convenience
pub use item::{InventoryItem, STATUS_ACTIVE};
pub use service::InventoryService;

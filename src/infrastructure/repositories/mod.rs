// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod mysql_inventory_repository;

pub use mysql_inventory_repository::MySqlInventoryRepository;

// Persistence contracts the domain service depends on

pub mod inventory_repository;

pub use inventory_repository::InventoryRepository;

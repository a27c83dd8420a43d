//! Repository layer: executes validated queries and shapes result rows.
//!
//! Repositories never build identifiers from request data. Part queries
//! arrive fully assembled from `kone_core::filter`; everything else uses
//! fixed SQL text.

pub mod customer_repo;
pub mod inventory_repo;
pub mod order_repo;
pub mod part_repo;
pub mod user_repo;

pub use customer_repo::CustomerRepo;
pub use inventory_repo::InventoryRepo;
pub use order_repo::OrderRepo;
pub use part_repo::PartRepo;
pub use user_repo::UserRepo;

/// A decoded row, keyed by column name.
pub type JsonRow = serde_json::Map<String, serde_json::Value>;

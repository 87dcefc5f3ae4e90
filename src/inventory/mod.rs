// Inventory module
//
// Bounded stack-list storage for collected crystals and consumables:
// - item.rs: item kinds and the stacking key
// - inventory.rs: the container with merge-on-insert
// - error.rs: typed failures surfaced to the UI

pub mod error;
pub mod inventory;
pub mod item;

pub use error::InventoryError;
pub use inventory::{DEFAULT_CAPACITY, Inventory};
pub use item::{ConsumableEffect, InventoryItem, ItemKind};

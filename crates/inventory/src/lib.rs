//! Inventory domain: stock-keeping items held at a warehouse location.

pub mod item;

pub use item::{InventoryFilter, InventoryItem, InventoryItemPatch, ItemStatus, NewInventoryItem};

//! Warehouse (facility) records.

pub mod warehouse;

pub use warehouse::{NewWarehouse, Warehouse, WarehouseFilter, WarehousePatch, WarehouseStatus};

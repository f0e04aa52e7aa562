//! Material-handling equipment and its maintenance history.

pub mod asset;
pub mod maintenance;

pub use asset::{Equipment, EquipmentFilter, EquipmentPatch, EquipmentStatus, EquipmentType, NewEquipment};
pub use maintenance::{
    MaintenanceFilter, MaintenancePatch, MaintenanceRecord, MaintenanceStatus, MaintenanceType,
    NewMaintenanceRecord,
};

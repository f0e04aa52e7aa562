use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wms_core::{DomainResult, Entity, RecordId, validate};

/// Operating status of a facility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarehouseStatus {
    #[default]
    Active,
    Inactive,
    Maintenance,
}

/// A storage facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: RecordId,
    pub name: String,
    pub code: String,
    pub address: String,
    /// Storage capacity (pallet positions).
    pub capacity: u32,
    pub status: WarehouseStatus,
    pub manager: String,
    pub phone: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Warehouse {
    const RESOURCE: &'static str = "Warehouse";

    fn id(&self) -> RecordId {
        self.id
    }
}

/// Create payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWarehouse {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub status: Option<WarehouseStatus>,
    #[serde(default)]
    pub manager: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

/// Partial update payload; omitted fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehousePatch {
    pub name: Option<String>,
    pub code: Option<String>,
    pub address: Option<String>,
    pub capacity: Option<u32>,
    pub status: Option<WarehouseStatus>,
    pub manager: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// List filters (all optional, combined with AND).
#[derive(Debug, Clone, Default)]
pub struct WarehouseFilter {
    pub status: Option<WarehouseStatus>,
}

impl WarehouseFilter {
    pub fn matches(&self, warehouse: &Warehouse) -> bool {
        self.status.is_none_or(|s| warehouse.status == s)
    }
}

impl Warehouse {
    pub fn create(id: RecordId, new: NewWarehouse, now: DateTime<Utc>) -> DomainResult<Self> {
        let warehouse = Self {
            id,
            name: new.name,
            code: new.code,
            address: new.address,
            capacity: new.capacity,
            status: new.status.unwrap_or_default(),
            manager: new.manager,
            phone: new.phone,
            email: new.email,
            created_at: now,
            updated_at: now,
        };
        warehouse.validate()?;
        Ok(warehouse)
    }

    pub fn apply_patch(&mut self, patch: WarehousePatch, now: DateTime<Utc>) -> DomainResult<()> {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.code {
            self.code = v;
        }
        if let Some(v) = patch.address {
            self.address = v;
        }
        if let Some(v) = patch.capacity {
            self.capacity = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.manager {
            self.manager = v;
        }
        if let Some(v) = patch.phone {
            self.phone = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        self.validate()?;
        self.updated_at = now;
        Ok(())
    }

    fn validate(&self) -> DomainResult<()> {
        validate::require_non_empty("name", &self.name)?;
        validate::require_non_empty("code", &self.code)
    }
}

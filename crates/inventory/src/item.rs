use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use wms_core::{DomainError, DomainResult, Entity, RecordId, line_total, nullable, validate};

/// Lifecycle of a stocked item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    #[default]
    Active,
    Inactive,
    Discontinued,
}

/// A SKU stocked at one warehouse location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: RecordId,
    pub sku: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub warehouse_id: RecordId,
    /// Bin location code (e.g. `A1-B2-C3`).
    pub location: String,
    pub quantity: u32,
    pub unit_cost: Decimal,
    pub reorder_point: u32,
    pub max_stock: u32,
    pub supplier: String,
    pub lot_number: String,
    pub expiry_date: Option<NaiveDate>,
    pub status: ItemStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for InventoryItem {
    const RESOURCE: &'static str = "Inventory item";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInventoryItem {
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub warehouse_id: RecordId,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub unit_cost: Decimal,
    #[serde(default)]
    pub reorder_point: u32,
    #[serde(default)]
    pub max_stock: u32,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub lot_number: String,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<ItemStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemPatch {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub warehouse_id: Option<RecordId>,
    pub location: Option<String>,
    pub quantity: Option<u32>,
    pub unit_cost: Option<Decimal>,
    pub reorder_point: Option<u32>,
    pub max_stock: Option<u32>,
    pub supplier: Option<String>,
    pub lot_number: Option<String>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub expiry_date: Option<Option<NaiveDate>>,
    pub status: Option<ItemStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct InventoryFilter {
    pub warehouse_id: Option<RecordId>,
    pub category: Option<String>,
    pub status: Option<ItemStatus>,
    /// When set, keep only items at or below their reorder point (or only above it).
    pub low_stock: Option<bool>,
}

impl InventoryFilter {
    pub fn matches(&self, item: &InventoryItem) -> bool {
        self.warehouse_id.is_none_or(|w| item.warehouse_id == w)
            && self.category.as_deref().is_none_or(|c| item.category == c)
            && self.status.is_none_or(|s| item.status == s)
            && self.low_stock.is_none_or(|low| item.is_low_stock() == low)
    }
}

impl InventoryItem {
    pub fn create(id: RecordId, new: NewInventoryItem, now: DateTime<Utc>) -> DomainResult<Self> {
        let item = Self {
            id,
            sku: new.sku,
            name: new.name,
            description: new.description,
            category: new.category,
            warehouse_id: new.warehouse_id,
            location: new.location,
            quantity: new.quantity,
            unit_cost: new.unit_cost,
            reorder_point: new.reorder_point,
            max_stock: new.max_stock,
            supplier: new.supplier,
            lot_number: new.lot_number,
            expiry_date: new.expiry_date,
            status: new.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        item.validate()?;
        Ok(item)
    }

    pub fn apply_patch(&mut self, patch: InventoryItemPatch, now: DateTime<Utc>) -> DomainResult<()> {
        if let Some(v) = patch.sku {
            self.sku = v;
        }
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.category {
            self.category = v;
        }
        if let Some(v) = patch.warehouse_id {
            self.warehouse_id = v;
        }
        if let Some(v) = patch.location {
            self.location = v;
        }
        if let Some(v) = patch.quantity {
            self.quantity = v;
        }
        if let Some(v) = patch.unit_cost {
            self.unit_cost = v;
        }
        if let Some(v) = patch.reorder_point {
            self.reorder_point = v;
        }
        if let Some(v) = patch.max_stock {
            self.max_stock = v;
        }
        if let Some(v) = patch.supplier {
            self.supplier = v;
        }
        if let Some(v) = patch.lot_number {
            self.lot_number = v;
        }
        if let Some(v) = patch.expiry_date {
            self.expiry_date = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        self.validate()?;
        self.updated_at = now;
        Ok(())
    }

    /// At or below the reorder point.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.reorder_point
    }

    /// On-hand value at unit cost.
    pub fn stock_value(&self) -> DomainResult<Decimal> {
        line_total(self.quantity, self.unit_cost)
    }

    fn validate(&self) -> DomainResult<()> {
        validate::require_non_empty("sku", &self.sku)?;
        validate::require_non_empty("name", &self.name)?;
        if self.unit_cost.is_sign_negative() {
            return Err(DomainError::validation("unitCost cannot be negative"));
        }
        self.stock_value()?;
        Ok(())
    }
}

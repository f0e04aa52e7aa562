use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use wms_core::{DomainError, DomainResult, Entity, RecordId, nullable, validate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentType {
    Forklift,
    Conveyor,
    Asrs,
    PickToLight,
    RfidReader,
    Agv,
    PalletJack,
    #[default]
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    #[default]
    Operational,
    Maintenance,
    OutOfService,
    Reserved,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: RecordId,
    pub equipment_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub equipment_type: EquipmentType,
    pub status: EquipmentStatus,
    pub warehouse_id: RecordId,
    pub location: String,
    pub manufacturer: String,
    pub model: String,
    pub serial_number: String,
    pub purchase_date: NaiveDate,
    pub last_maintenance: Option<NaiveDate>,
    pub next_maintenance: Option<NaiveDate>,
    pub operator: Option<String>,
    pub current_task: Option<String>,
    /// Percent of available time in use.
    pub utilization: f64,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Equipment {
    const RESOURCE: &'static str = "Equipment";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEquipment {
    pub equipment_id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub equipment_type: EquipmentType,
    #[serde(default)]
    pub status: EquipmentStatus,
    pub warehouse_id: RecordId,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub serial_number: String,
    pub purchase_date: NaiveDate,
    #[serde(default)]
    pub last_maintenance: Option<NaiveDate>,
    #[serde(default)]
    pub next_maintenance: Option<NaiveDate>,
    #[serde(default)]
    pub operator: Option<String>,
    #[serde(default)]
    pub current_task: Option<String>,
    #[serde(default)]
    pub utilization: f64,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentPatch {
    pub equipment_id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub equipment_type: Option<EquipmentType>,
    pub status: Option<EquipmentStatus>,
    pub warehouse_id: Option<RecordId>,
    pub location: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub last_maintenance: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub next_maintenance: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub operator: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub current_task: Option<Option<String>>,
    pub utilization: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct EquipmentFilter {
    pub status: Option<EquipmentStatus>,
    pub equipment_type: Option<EquipmentType>,
    pub warehouse_id: Option<RecordId>,
}

impl EquipmentFilter {
    pub fn matches(&self, equipment: &Equipment) -> bool {
        self.status.is_none_or(|s| equipment.status == s)
            && self.equipment_type.is_none_or(|t| equipment.equipment_type == t)
            && self.warehouse_id.is_none_or(|w| equipment.warehouse_id == w)
    }
}

impl Equipment {
    pub fn create(id: RecordId, new: NewEquipment, now: DateTime<Utc>) -> DomainResult<Self> {
        let equipment = Self {
            id,
            equipment_id: new.equipment_id,
            name: new.name,
            equipment_type: new.equipment_type,
            status: new.status,
            warehouse_id: new.warehouse_id,
            location: new.location,
            manufacturer: new.manufacturer,
            model: new.model,
            serial_number: new.serial_number,
            purchase_date: new.purchase_date,
            last_maintenance: new.last_maintenance,
            next_maintenance: new.next_maintenance,
            operator: new.operator,
            current_task: new.current_task,
            utilization: new.utilization,
            notes: new.notes,
            created_at: now,
            updated_at: now,
        };
        equipment.validate()?;
        Ok(equipment)
    }

    pub fn apply_patch(&mut self, patch: EquipmentPatch, now: DateTime<Utc>) -> DomainResult<()> {
        if let Some(v) = patch.equipment_id {
            self.equipment_id = v;
        }
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.equipment_type {
            self.equipment_type = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.warehouse_id {
            self.warehouse_id = v;
        }
        if let Some(v) = patch.location {
            self.location = v;
        }
        if let Some(v) = patch.manufacturer {
            self.manufacturer = v;
        }
        if let Some(v) = patch.model {
            self.model = v;
        }
        if let Some(v) = patch.serial_number {
            self.serial_number = v;
        }
        if let Some(v) = patch.purchase_date {
            self.purchase_date = v;
        }
        if let Some(v) = patch.last_maintenance {
            self.last_maintenance = v;
        }
        if let Some(v) = patch.next_maintenance {
            self.next_maintenance = v;
        }
        if let Some(v) = patch.operator {
            self.operator = v;
        }
        if let Some(v) = patch.current_task {
            self.current_task = v;
        }
        if let Some(v) = patch.utilization {
            self.utilization = v;
        }
        if let Some(v) = patch.notes {
            self.notes = v;
        }
        self.validate()?;
        self.updated_at = now;
        Ok(())
    }

    fn validate(&self) -> DomainResult<()> {
        validate::require_non_empty("equipmentId", &self.equipment_id)?;
        validate::require_non_empty("name", &self.name)?;
        validate::require_percent("utilization", self.utilization)?;
        if let (Some(last), Some(next)) = (self.last_maintenance, self.next_maintenance) {
            if next < last {
                return Err(DomainError::validation(
                    "nextMaintenance cannot precede lastMaintenance",
                ));
            }
        }
        Ok(())
    }

    /// Service is due on or before `today`.
    pub fn is_maintenance_due(&self, today: NaiveDate) -> bool {
        self.next_maintenance.is_some_and(|next| next <= today)
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use wms_core::{DomainError, DomainResult, Entity, RecordId, nullable, validate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceType {
    #[default]
    Preventive,
    Corrective,
    Emergency,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: RecordId,
    /// Record id of the serviced [`crate::Equipment`].
    pub equipment_id: RecordId,
    #[serde(rename = "type")]
    pub maintenance_type: MaintenanceType,
    pub description: String,
    pub technician: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub cost: Decimal,
    pub status: MaintenanceStatus,
    pub notes: String,
}

impl Entity for MaintenanceRecord {
    const RESOURCE: &'static str = "Maintenance record";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMaintenanceRecord {
    pub equipment_id: RecordId,
    #[serde(rename = "type", default)]
    pub maintenance_type: MaintenanceType,
    pub description: String,
    #[serde(default)]
    pub technician: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub cost: Decimal,
    #[serde(default)]
    pub status: MaintenanceStatus,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenancePatch {
    pub equipment_id: Option<RecordId>,
    #[serde(rename = "type")]
    pub maintenance_type: Option<MaintenanceType>,
    pub description: Option<String>,
    pub technician: Option<String>,
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub end_date: Option<Option<NaiveDate>>,
    pub cost: Option<Decimal>,
    pub status: Option<MaintenanceStatus>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MaintenanceFilter {
    pub status: Option<MaintenanceStatus>,
    pub equipment_id: Option<RecordId>,
}

impl MaintenanceFilter {
    pub fn matches(&self, record: &MaintenanceRecord) -> bool {
        self.status.is_none_or(|s| record.status == s)
            && self.equipment_id.is_none_or(|e| record.equipment_id == e)
    }
}

impl MaintenanceRecord {
    pub fn create(id: RecordId, new: NewMaintenanceRecord, now: DateTime<Utc>) -> DomainResult<Self> {
        let mut record = Self {
            id,
            equipment_id: new.equipment_id,
            maintenance_type: new.maintenance_type,
            description: new.description,
            technician: new.technician,
            start_date: new.start_date,
            end_date: new.end_date,
            cost: new.cost,
            status: MaintenanceStatus::Scheduled,
            notes: new.notes,
        };
        record.transition(new.status, now);
        record.validate()?;
        Ok(record)
    }

    pub fn apply_patch(&mut self, patch: MaintenancePatch, now: DateTime<Utc>) -> DomainResult<()> {
        if let Some(v) = patch.equipment_id {
            self.equipment_id = v;
        }
        if let Some(v) = patch.maintenance_type {
            self.maintenance_type = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.technician {
            self.technician = v;
        }
        if let Some(v) = patch.start_date {
            self.start_date = v;
        }
        if let Some(v) = patch.end_date {
            self.end_date = v;
        }
        if let Some(v) = patch.cost {
            self.cost = v;
        }
        if let Some(v) = patch.notes {
            self.notes = v;
        }
        if let Some(status) = patch.status {
            self.transition(status, now);
        }
        self.validate()
    }

    /// Completing a job closes it today unless an end date was given.
    fn transition(&mut self, status: MaintenanceStatus, now: DateTime<Utc>) {
        if status == MaintenanceStatus::Completed {
            self.end_date.get_or_insert(now.date_naive());
        }
        self.status = status;
    }

    fn validate(&self) -> DomainResult<()> {
        validate::require_non_empty("description", &self.description)?;
        if self.cost.is_sign_negative() {
            return Err(DomainError::validation("cost cannot be negative"));
        }
        if self.end_date.is_some_and(|end| end < self.start_date) {
            return Err(DomainError::validation("endDate cannot precede startDate"));
        }
        Ok(())
    }
}

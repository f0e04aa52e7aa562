use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use wms_core::{DomainError, DomainResult, Entity, RecordId, nullable, validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerRole {
    Picker,
    Packer,
    Receiver,
    Supervisor,
    Manager,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerStatus {
    #[default]
    Active,
    Inactive,
    OnBreak,
    OffDuty,
}

/// The shift a worker is normally rostered on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftPattern {
    #[default]
    Morning,
    Afternoon,
    Night,
    Flexible,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub id: RecordId,
    pub employee_id: String,
    pub name: String,
    pub role: WorkerRole,
    pub status: WorkerStatus,
    pub warehouse_id: RecordId,
    pub shift: ShiftPattern,
    pub hourly_rate: Decimal,
    pub skills: Vec<String>,
    pub current_task: Option<String>,
    pub tasks_completed: u32,
    pub total_hours: f64,
    /// Percent of target throughput.
    pub productivity: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Worker {
    const RESOURCE: &'static str = "Worker";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorker {
    pub employee_id: String,
    pub name: String,
    pub role: WorkerRole,
    #[serde(default)]
    pub status: WorkerStatus,
    pub warehouse_id: RecordId,
    #[serde(default)]
    pub shift: ShiftPattern,
    #[serde(default)]
    pub hourly_rate: Decimal,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub current_task: Option<String>,
    #[serde(default)]
    pub tasks_completed: u32,
    #[serde(default)]
    pub total_hours: f64,
    #[serde(default)]
    pub productivity: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerPatch {
    pub employee_id: Option<String>,
    pub name: Option<String>,
    pub role: Option<WorkerRole>,
    pub status: Option<WorkerStatus>,
    pub warehouse_id: Option<RecordId>,
    pub shift: Option<ShiftPattern>,
    pub hourly_rate: Option<Decimal>,
    pub skills: Option<Vec<String>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub current_task: Option<Option<String>>,
    pub tasks_completed: Option<u32>,
    pub total_hours: Option<f64>,
    pub productivity: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct WorkerFilter {
    pub status: Option<WorkerStatus>,
    pub role: Option<WorkerRole>,
    pub warehouse_id: Option<RecordId>,
}

impl WorkerFilter {
    pub fn matches(&self, worker: &Worker) -> bool {
        self.status.is_none_or(|s| worker.status == s)
            && self.role.is_none_or(|r| worker.role == r)
            && self.warehouse_id.is_none_or(|w| worker.warehouse_id == w)
    }
}

/// Blank skill entries are dropped.
fn clean_skills(skills: Vec<String>) -> Vec<String> {
    skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl Worker {
    pub fn create(id: RecordId, new: NewWorker, now: DateTime<Utc>) -> DomainResult<Self> {
        let worker = Self {
            id,
            employee_id: new.employee_id,
            name: new.name,
            role: new.role,
            status: new.status,
            warehouse_id: new.warehouse_id,
            shift: new.shift,
            hourly_rate: new.hourly_rate,
            skills: clean_skills(new.skills),
            current_task: new.current_task,
            tasks_completed: new.tasks_completed,
            total_hours: new.total_hours,
            productivity: new.productivity,
            created_at: now,
            updated_at: now,
        };
        worker.validate()?;
        Ok(worker)
    }

    pub fn apply_patch(&mut self, patch: WorkerPatch, now: DateTime<Utc>) -> DomainResult<()> {
        if let Some(v) = patch.employee_id {
            self.employee_id = v;
        }
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.role {
            self.role = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.warehouse_id {
            self.warehouse_id = v;
        }
        if let Some(v) = patch.shift {
            self.shift = v;
        }
        if let Some(v) = patch.hourly_rate {
            self.hourly_rate = v;
        }
        if let Some(v) = patch.skills {
            self.skills = clean_skills(v);
        }
        if let Some(v) = patch.current_task {
            self.current_task = v;
        }
        if let Some(v) = patch.tasks_completed {
            self.tasks_completed = v;
        }
        if let Some(v) = patch.total_hours {
            self.total_hours = v;
        }
        if let Some(v) = patch.productivity {
            self.productivity = v;
        }
        self.validate()?;
        self.updated_at = now;
        Ok(())
    }

    fn validate(&self) -> DomainResult<()> {
        validate::require_non_empty("employeeId", &self.employee_id)?;
        validate::require_non_empty("name", &self.name)?;
        if self.hourly_rate.is_sign_negative() {
            return Err(DomainError::validation("hourlyRate cannot be negative"));
        }
        if !(self.total_hours >= 0.0) {
            return Err(DomainError::validation("totalHours cannot be negative"));
        }
        if !(self.productivity >= 0.0) {
            return Err(DomainError::validation("productivity cannot be negative"));
        }
        Ok(())
    }

    /// Pay accrued over `total_hours` at the current rate, rounded to cents.
    pub fn accrued_pay(&self) -> Decimal {
        let hours = Decimal::try_from(self.total_hours).unwrap_or_default();
        wms_core::round_money(self.hourly_rate * hours)
    }
}

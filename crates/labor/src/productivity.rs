use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use wms_core::{DomainError, DomainResult, Entity, RecordId};

/// One worker's output for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductivityRecord {
    pub id: RecordId,
    pub worker_id: RecordId,
    pub date: NaiveDate,
    pub tasks_completed: u32,
    pub hours_worked: f64,
    /// Percent of target; may exceed 100.
    pub efficiency: f64,
    pub notes: String,
}

impl Entity for ProductivityRecord {
    const RESOURCE: &'static str = "Productivity record";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProductivityRecord {
    pub worker_id: RecordId,
    pub date: NaiveDate,
    #[serde(default)]
    pub tasks_completed: u32,
    #[serde(default)]
    pub hours_worked: f64,
    #[serde(default)]
    pub efficiency: f64,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductivityPatch {
    pub worker_id: Option<RecordId>,
    pub date: Option<NaiveDate>,
    pub tasks_completed: Option<u32>,
    pub hours_worked: Option<f64>,
    pub efficiency: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ProductivityFilter {
    pub worker_id: Option<RecordId>,
}

impl ProductivityFilter {
    pub fn matches(&self, record: &ProductivityRecord) -> bool {
        self.worker_id.is_none_or(|w| record.worker_id == w)
    }
}

impl ProductivityRecord {
    pub fn create(id: RecordId, new: NewProductivityRecord) -> DomainResult<Self> {
        let record = Self {
            id,
            worker_id: new.worker_id,
            date: new.date,
            tasks_completed: new.tasks_completed,
            hours_worked: new.hours_worked,
            efficiency: new.efficiency,
            notes: new.notes,
        };
        record.validate()?;
        Ok(record)
    }

    pub fn apply_patch(&mut self, patch: ProductivityPatch) -> DomainResult<()> {
        if let Some(v) = patch.worker_id {
            self.worker_id = v;
        }
        if let Some(v) = patch.date {
            self.date = v;
        }
        if let Some(v) = patch.tasks_completed {
            self.tasks_completed = v;
        }
        if let Some(v) = patch.hours_worked {
            self.hours_worked = v;
        }
        if let Some(v) = patch.efficiency {
            self.efficiency = v;
        }
        if let Some(v) = patch.notes {
            self.notes = v;
        }
        self.validate()
    }

    fn validate(&self) -> DomainResult<()> {
        if !(0.0..=24.0).contains(&self.hours_worked) {
            return Err(DomainError::validation(
                "hoursWorked must be between 0 and 24",
            ));
        }
        if !(self.efficiency >= 0.0) {
            return Err(DomainError::validation("efficiency cannot be negative"));
        }
        Ok(())
    }

    /// Tasks per hour worked; `None` for a zero-hour day.
    pub fn tasks_per_hour(&self) -> Option<f64> {
        (self.hours_worked > 0.0).then(|| f64::from(self.tasks_completed) / self.hours_worked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProductivityRecord {
        let new: NewProductivityRecord = serde_json::from_value(serde_json::json!({
            "workerId": 1,
            "date": "2024-01-15",
            "tasksCompleted": 12,
            "hoursWorked": 8,
            "efficiency": 95.2,
            "notes": "Excellent performance, exceeded targets"
        }))
        .unwrap();
        ProductivityRecord::create(RecordId::new(1), new).unwrap()
    }

    #[test]
    fn rate_is_tasks_over_hours() {
        assert_eq!(record().tasks_per_hour(), Some(1.5));
    }

    #[test]
    fn zero_hours_has_no_rate() {
        let mut r = record();
        r.apply_patch(ProductivityPatch {
            hours_worked: Some(0.0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(r.tasks_per_hour(), None);
    }

    #[test]
    fn more_than_a_day_is_rejected() {
        let mut r = record();
        assert!(
            r.apply_patch(ProductivityPatch {
                hours_worked: Some(25.0),
                ..Default::default()
            })
            .is_err()
        );
    }

    #[test]
    fn filter_by_worker() {
        let f = ProductivityFilter {
            worker_id: Some(RecordId::new(2)),
        };
        assert!(!f.matches(&record()));
    }
}

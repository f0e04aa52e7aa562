use std::collections::HashSet;

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use wms_core::{DomainError, DomainResult, Entity, RecordId, validate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    #[default]
    Scheduled,
    Active,
    Completed,
    Cancelled,
}

/// A rostered shift. Times are wall-clock `HH:MM`; a shift whose end is
/// earlier than its start runs overnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: RecordId,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub warehouse_id: RecordId,
    pub workers: Vec<RecordId>,
    pub max_workers: u32,
    pub status: ShiftStatus,
    pub created_at: DateTime<Utc>,
}

impl Entity for Shift {
    const RESOURCE: &'static str = "Shift";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShift {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub warehouse_id: RecordId,
    #[serde(default)]
    pub workers: Vec<RecordId>,
    pub max_workers: u32,
    #[serde(default)]
    pub status: ShiftStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftPatch {
    pub name: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub warehouse_id: Option<RecordId>,
    pub workers: Option<Vec<RecordId>>,
    pub max_workers: Option<u32>,
    pub status: Option<ShiftStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct ShiftFilter {
    pub status: Option<ShiftStatus>,
    pub warehouse_id: Option<RecordId>,
}

impl ShiftFilter {
    pub fn matches(&self, shift: &Shift) -> bool {
        self.status.is_none_or(|s| shift.status == s)
            && self.warehouse_id.is_none_or(|w| shift.warehouse_id == w)
    }
}

fn parse_clock(field: &str, value: &str) -> DomainResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| DomainError::validation(format!("{field} must be HH:MM")))
}

impl Shift {
    pub fn create(id: RecordId, new: NewShift, now: DateTime<Utc>) -> DomainResult<Self> {
        let shift = Self {
            id,
            name: new.name,
            start_time: new.start_time,
            end_time: new.end_time,
            warehouse_id: new.warehouse_id,
            workers: new.workers,
            max_workers: new.max_workers,
            status: new.status,
            created_at: now,
        };
        shift.validate()?;
        Ok(shift)
    }

    pub fn apply_patch(&mut self, patch: ShiftPatch) -> DomainResult<()> {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.start_time {
            self.start_time = v;
        }
        if let Some(v) = patch.end_time {
            self.end_time = v;
        }
        if let Some(v) = patch.warehouse_id {
            self.warehouse_id = v;
        }
        if let Some(v) = patch.workers {
            self.workers = v;
        }
        if let Some(v) = patch.max_workers {
            self.max_workers = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        self.validate()
    }

    fn validate(&self) -> DomainResult<()> {
        validate::require_non_empty("name", &self.name)?;
        parse_clock("startTime", &self.start_time)?;
        parse_clock("endTime", &self.end_time)?;
        if self.workers.len() > self.max_workers as usize {
            return Err(DomainError::validation(format!(
                "shift has {} workers but maxWorkers is {}",
                self.workers.len(),
                self.max_workers
            )));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self.workers.iter().find(|w| !seen.insert(**w)) {
            return Err(DomainError::validation(format!(
                "worker {dup} is rostered twice"
            )));
        }
        Ok(())
    }

    /// Shift length in minutes, wrapping past midnight.
    pub fn duration_minutes(&self) -> DomainResult<i64> {
        let start = parse_clock("startTime", &self.start_time)?;
        let end = parse_clock("endTime", &self.end_time)?;
        let minutes = (end - start).num_minutes();
        Ok(if minutes <= 0 { minutes + 24 * 60 } else { minutes })
    }

    pub fn open_slots(&self) -> u32 {
        self.max_workers.saturating_sub(self.workers.len() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap()
    }

    fn morning() -> Shift {
        Shift::create(
            RecordId::new(1),
            NewShift {
                name: "Morning Shift".to_string(),
                start_time: "06:00".to_string(),
                end_time: "14:00".to_string(),
                warehouse_id: RecordId::new(1),
                workers: vec![RecordId::new(1), RecordId::new(2)],
                max_workers: 8,
                status: ShiftStatus::Active,
            },
            t0(),
        )
        .unwrap()
    }

    #[test]
    fn durations_and_slots() {
        let s = morning();
        assert_eq!(s.duration_minutes().unwrap(), 8 * 60);
        assert_eq!(s.open_slots(), 6);
    }

    #[test]
    fn night_shift_wraps_midnight() {
        let mut s = morning();
        s.apply_patch(ShiftPatch {
            start_time: Some("22:00".to_string()),
            end_time: Some("06:00".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(s.duration_minutes().unwrap(), 8 * 60);
    }

    #[test]
    fn bad_clock_value_is_rejected() {
        let mut s = morning();
        let err = s
            .apply_patch(ShiftPatch {
                end_time: Some("25:00".to_string()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn roster_cannot_exceed_capacity() {
        let mut s = morning();
        let err = s
            .apply_patch(ShiftPatch {
                max_workers: Some(1),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn duplicate_worker_is_rejected() {
        let mut s = morning();
        assert!(
            s.apply_patch(ShiftPatch {
                workers: Some(vec![RecordId::new(3), RecordId::new(3)]),
                ..Default::default()
            })
            .is_err()
        );
    }
}

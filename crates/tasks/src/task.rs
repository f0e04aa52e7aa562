use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wms_core::{DocumentNumber, DomainError, DomainResult, Entity, Priority, RecordId, nullable, validate};

pub const TASK_NUMBER: DocumentNumber = DocumentNumber::new("TASK");

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Picking,
    Replenishment,
    CycleCount,
    Packing,
    Putaway,
}

impl TaskType {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskType::Picking => "picking",
            TaskType::Replenishment => "replenishment",
            TaskType::CycleCount => "cycle_count",
            TaskType::Packing => "packing",
            TaskType::Putaway => "putaway",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    Assigned,
    InProgress,
    Completed,
    Cancelled,
}

impl TaskStatus {
    /// Assigned or being worked on.
    pub fn is_active(self) -> bool {
        matches!(self, TaskStatus::Assigned | TaskStatus::InProgress)
    }
}

/// A SKU to move/count as part of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    pub sku: String,
    #[serde(default)]
    pub name: String,
    pub quantity: u32,
    #[serde(default)]
    pub picked_quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: RecordId,
    pub task_number: String,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub priority: Priority,
    pub status: TaskStatus,
    pub assigned_to: Option<String>,
    pub warehouse_id: RecordId,
    pub order_id: Option<RecordId>,
    pub location: String,
    pub items: Vec<TaskItem>,
    /// Estimate in minutes.
    pub estimated_duration: u32,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Task {
    const RESOURCE: &'static str = "Task";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    #[serde(rename = "type")]
    pub task_type: TaskType,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub assigned_to: Option<String>,
    pub warehouse_id: RecordId,
    #[serde(default)]
    pub order_id: Option<RecordId>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub items: Vec<TaskItem>,
    #[serde(default)]
    pub estimated_duration: u32,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(rename = "type")]
    pub task_type: Option<TaskType>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub assigned_to: Option<Option<String>>,
    pub warehouse_id: Option<RecordId>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub order_id: Option<Option<RecordId>>,
    pub location: Option<String>,
    pub items: Option<Vec<TaskItem>>,
    pub estimated_duration: Option<u32>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub start_time: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub end_time: Option<Option<DateTime<Utc>>>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub task_type: Option<TaskType>,
    pub warehouse_id: Option<RecordId>,
    pub assigned_to: Option<String>,
    pub priority: Option<Priority>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        self.status.is_none_or(|s| task.status == s)
            && self.task_type.is_none_or(|t| task.task_type == t)
            && self.warehouse_id.is_none_or(|w| task.warehouse_id == w)
            && self
                .assigned_to
                .as_deref()
                .is_none_or(|a| task.assigned_to.as_deref() == Some(a))
            && self.priority.is_none_or(|p| task.priority == p)
    }
}

fn validate_items(items: &[TaskItem]) -> DomainResult<()> {
    for item in items {
        validate::require_non_empty("item sku", &item.sku)?;
        if item.picked_quantity > item.quantity {
            return Err(DomainError::validation(format!(
                "item {}: pickedQuantity cannot exceed quantity",
                item.sku
            )));
        }
    }
    Ok(())
}

impl Task {
    /// Create a task. New tasks are always `pending` and not started.
    pub fn create(id: RecordId, new: NewTask, now: DateTime<Utc>) -> DomainResult<Self> {
        validate_items(&new.items)?;

        Ok(Self {
            id,
            task_number: TASK_NUMBER.format(id, now),
            task_type: new.task_type,
            priority: new.priority,
            status: TaskStatus::Pending,
            assigned_to: new.assigned_to,
            warehouse_id: new.warehouse_id,
            order_id: new.order_id,
            location: new.location,
            items: new.items,
            estimated_duration: new.estimated_duration,
            start_time: None,
            end_time: None,
            notes: new.notes,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn apply_patch(&mut self, patch: TaskPatch, now: DateTime<Utc>) -> DomainResult<()> {
        if let Some(v) = patch.task_type {
            self.task_type = v;
        }
        if let Some(v) = patch.priority {
            self.priority = v;
        }
        if let Some(v) = patch.assigned_to {
            self.assigned_to = v;
        }
        if let Some(v) = patch.warehouse_id {
            self.warehouse_id = v;
        }
        if let Some(v) = patch.order_id {
            self.order_id = v;
        }
        if let Some(v) = patch.location {
            self.location = v;
        }
        if let Some(items) = patch.items {
            validate_items(&items)?;
            self.items = items;
        }
        if let Some(v) = patch.estimated_duration {
            self.estimated_duration = v;
        }
        if let Some(v) = patch.start_time {
            self.start_time = v;
        }
        if let Some(v) = patch.end_time {
            self.end_time = v;
        }
        if let Some(v) = patch.notes {
            self.notes = v;
        }
        if let Some(status) = patch.status {
            self.transition(status, now);
        }
        if let (Some(start), Some(end)) = (self.start_time, self.end_time) {
            if end < start {
                return Err(DomainError::validation("endTime cannot precede startTime"));
            }
        }
        self.updated_at = now;
        Ok(())
    }

    /// Move to `status`, stamping start/end times that are still unset.
    fn transition(&mut self, status: TaskStatus, now: DateTime<Utc>) {
        match status {
            TaskStatus::InProgress => {
                self.start_time.get_or_insert(now);
            }
            TaskStatus::Completed => {
                self.start_time.get_or_insert(now);
                self.end_time.get_or_insert(now);
            }
            _ => {}
        }
        self.status = status;
    }

    /// Minutes between start and end, once both are known.
    pub fn actual_duration_minutes(&self) -> Option<i64> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some((end - start).num_minutes()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()
    }

    fn picking_task() -> Task {
        let new: NewTask = serde_json::from_value(serde_json::json!({
            "type": "picking",
            "priority": "high",
            "warehouseId": 1,
            "orderId": 1,
            "location": "A1-B2-C3",
            "items": [{ "sku": "SKU-001", "name": "Laptop Computer", "quantity": 5 }],
            "estimatedDuration": 30
        }))
        .unwrap();
        Task::create(RecordId::new(4), new, t0()).unwrap()
    }

    #[test]
    fn create_forces_pending_and_clears_times() {
        let task = picking_task();
        assert_eq!(task.task_number, "TASK-2024-004");
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.start_time, None);
        assert_eq!(task.end_time, None);
        assert_eq!(task.items[0].picked_quantity, 0);
    }

    #[test]
    fn starting_and_completing_stamp_times() {
        let mut task = picking_task();
        let started = t0() + Duration::minutes(5);
        task.apply_patch(
            TaskPatch {
                status: Some(TaskStatus::InProgress),
                ..Default::default()
            },
            started,
        )
        .unwrap();
        assert_eq!(task.start_time, Some(started));
        assert_eq!(task.end_time, None);

        let finished = started + Duration::minutes(25);
        task.apply_patch(
            TaskPatch {
                status: Some(TaskStatus::Completed),
                ..Default::default()
            },
            finished,
        )
        .unwrap();
        assert_eq!(task.start_time, Some(started));
        assert_eq!(task.end_time, Some(finished));
        assert_eq!(task.actual_duration_minutes(), Some(25));
    }

    #[test]
    fn over_picking_is_rejected() {
        let mut task = picking_task();
        let patch: TaskPatch = serde_json::from_value(serde_json::json!({
            "items": [{ "sku": "SKU-001", "quantity": 5, "pickedQuantity": 6 }]
        }))
        .unwrap();
        assert!(matches!(
            task.apply_patch(patch, t0()),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn null_assignee_unassigns() {
        let mut task = picking_task();
        task.assigned_to = Some("John Worker".to_string());
        let patch: TaskPatch =
            serde_json::from_value(serde_json::json!({ "assignedTo": null })).unwrap();
        task.apply_patch(patch, t0()).unwrap();
        assert_eq!(task.assigned_to, None);
    }

    #[test]
    fn filter_by_assignee_and_type() {
        let mut task = picking_task();
        task.assigned_to = Some("John Worker".to_string());

        let filter = TaskFilter {
            assigned_to: Some("John Worker".to_string()),
            task_type: Some(TaskType::Picking),
            ..Default::default()
        };
        assert!(filter.matches(&task));

        let filter = TaskFilter {
            assigned_to: Some("Sarah Worker".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&task));
    }

    #[test]
    fn type_field_is_named_type_on_the_wire() {
        let json = serde_json::to_value(picking_task()).unwrap();
        assert_eq!(json["type"], "picking");
        assert_eq!(json["startTime"], serde_json::Value::Null);
    }
}

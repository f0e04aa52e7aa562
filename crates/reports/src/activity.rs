use chrono::{DateTime, Utc};
use serde::Serialize;

use wms_billing::BillingStatus;
use wms_core::RecordId;
use wms_orders::OrderStatus;
use wms_tasks::TaskStatus;

use crate::ReportData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Order,
    Task,
    Billing,
}

/// Current status of the record behind an activity entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ActivityStatus {
    Order(OrderStatus),
    Task(TaskStatus),
    Billing(BillingStatus),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub record_id: RecordId,
    pub title: String,
    pub description: String,
    pub time: DateTime<Utc>,
    pub status: ActivityStatus,
}

/// Creation events for orders, tasks and invoices, newest first.
pub fn recent_activity(data: &ReportData, limit: usize) -> Vec<Activity> {
    let orders = data.orders.iter().map(|o| Activity {
        kind: ActivityKind::Order,
        record_id: o.id,
        title: format!("Order {} created", o.order_number),
        description: format!("{} - {} items", o.customer_name, o.items.len()),
        time: o.created_at,
        status: ActivityStatus::Order(o.status),
    });
    let tasks = data.tasks.iter().map(|t| Activity {
        kind: ActivityKind::Task,
        record_id: t.id,
        title: format!("Task {} created", t.task_number),
        description: format!(
            "{} task for {}",
            t.task_type.as_str(),
            t.assigned_to.as_deref().unwrap_or("Unassigned")
        ),
        time: t.created_at,
        status: ActivityStatus::Task(t.status),
    });
    let billing = data.billing.iter().map(|b| Activity {
        kind: ActivityKind::Billing,
        record_id: b.id,
        title: format!("Invoice {} created", b.invoice_number),
        description: format!("{} - ${}", b.customer_name, b.total),
        time: b.created_at,
        status: ActivityStatus::Billing(b.status),
    });

    let mut all: Vec<Activity> = orders.chain(tasks).chain(billing).collect();
    all.sort_by(|a, b| b.time.cmp(&a.time));
    all.truncate(limit);
    all
}

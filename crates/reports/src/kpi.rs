use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use wms_billing::BillingStatus;
use wms_core::{DomainResult, checked_sum};
use wms_orders::OrderStatus;
use wms_tasks::{TaskStatus, TaskType};

use crate::{Activity, ReportData, recent_activity};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub total_warehouses: usize,
    pub total_inventory_items: usize,
    pub total_orders: usize,
    pub pending_orders: usize,
    /// Tasks in progress.
    pub active_tasks: usize,
    /// Percent of completed over completed + in progress.
    pub task_completion_rate: Option<f64>,
    pub total_revenue: Decimal,
    pub paid_revenue: Decimal,
    /// Percent of revenue already paid.
    pub payment_rate: Option<f64>,
    pub average_order_value: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdowns {
    pub inventory_by_category: BTreeMap<String, usize>,
    pub orders_by_status: BTreeMap<OrderStatus, usize>,
    pub tasks_by_type: BTreeMap<TaskType, usize>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub kpis: Kpis,
    pub breakdowns: Breakdowns,
    pub recent_activity: Vec<Activity>,
}

/// `part / whole` as a percentage with one decimal, `None` when `whole` is zero.
fn percent(part: Decimal, whole: Decimal) -> Option<f64> {
    if whole.is_zero() {
        return None;
    }
    // Divide first: `part <= whole`, so the ratio never overflows.
    part.checked_div(whole)?
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
}

/// Headline figures. Fails when a revenue or order-value sum leaves `Decimal` range.
pub fn kpis(data: &ReportData) -> DomainResult<Kpis> {
    let in_progress = data
        .tasks
        .iter()
        .filter(|t| t.status == TaskStatus::InProgress)
        .count();
    let completed = data
        .tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .count();

    let total_revenue = checked_sum("totalRevenue", data.billing.iter().map(|b| b.total))?;
    let paid_revenue = checked_sum(
        "paidRevenue",
        data.billing
            .iter()
            .filter(|b| b.status == BillingStatus::Paid)
            .map(|b| b.total),
    )?;

    let order_value = checked_sum("order value", data.orders.iter().map(|o| o.total_amount))?;
    let average_order_value = (!data.orders.is_empty()).then(|| {
        wms_core::round_money(order_value / Decimal::from(data.orders.len()))
    });

    Ok(Kpis {
        total_warehouses: data.warehouses.len(),
        total_inventory_items: data.inventory.len(),
        total_orders: data.orders.len(),
        pending_orders: data
            .orders
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .count(),
        active_tasks: in_progress,
        task_completion_rate: percent(
            Decimal::from(completed),
            Decimal::from(completed + in_progress),
        ),
        total_revenue,
        paid_revenue,
        payment_rate: percent(paid_revenue, total_revenue),
        average_order_value,
    })
}

pub fn breakdowns(data: &ReportData) -> Breakdowns {
    let mut inventory_by_category = BTreeMap::new();
    for item in &data.inventory {
        *inventory_by_category.entry(item.category.clone()).or_insert(0) += 1;
    }
    let mut orders_by_status = BTreeMap::new();
    for order in &data.orders {
        *orders_by_status.entry(order.status).or_insert(0) += 1;
    }
    let mut tasks_by_type = BTreeMap::new();
    for task in &data.tasks {
        *tasks_by_type.entry(task.task_type).or_insert(0) += 1;
    }
    Breakdowns {
        inventory_by_category,
        orders_by_status,
        tasks_by_type,
    }
}

/// KPIs, breakdowns and the newest `limit` activity entries.
pub fn report(data: &ReportData, limit: usize) -> DomainResult<Report> {
    Ok(Report {
        kpis: kpis(data)?,
        breakdowns: breakdowns(data),
        recent_activity: recent_activity(data, limit),
    })
}

use rust_decimal::Decimal;
use serde::Serialize;

use wms_core::{DomainResult, checked_sum};
use wms_orders::{Order, OrderStatus};
use wms_tasks::Task;

use crate::{DASHBOARD_RECENT, ReportData};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_warehouses: usize,
    pub total_inventory: usize,
    pub pending_orders: usize,
    /// Tasks assigned or in progress.
    pub active_tasks: usize,
    /// Σ quantity × unit cost over all inventory.
    pub total_value: Decimal,
    pub low_stock_items: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub recent_orders: Vec<Order>,
    pub recent_tasks: Vec<Task>,
}

/// Fails when the summed stock value leaves `Decimal` range.
pub fn dashboard_stats(data: &ReportData) -> DomainResult<DashboardStats> {
    let stock_values = data
        .inventory
        .iter()
        .map(|i| i.stock_value())
        .collect::<DomainResult<Vec<_>>>()?;

    Ok(DashboardStats {
        total_warehouses: data.warehouses.len(),
        total_inventory: data.inventory.len(),
        pending_orders: data
            .orders
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .count(),
        active_tasks: data.tasks.iter().filter(|t| t.status.is_active()).count(),
        total_value: checked_sum("totalValue", stock_values)?,
        low_stock_items: data.inventory.iter().filter(|i| i.is_low_stock()).count(),
    })
}

/// Stats plus the newest orders and tasks.
pub fn dashboard(data: &ReportData) -> DomainResult<Dashboard> {
    let mut recent_orders = data.orders.clone();
    recent_orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent_orders.truncate(DASHBOARD_RECENT);

    let mut recent_tasks = data.tasks.clone();
    recent_tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent_tasks.truncate(DASHBOARD_RECENT);

    Ok(Dashboard {
        stats: dashboard_stats(data)?,
        recent_orders,
        recent_tasks,
    })
}

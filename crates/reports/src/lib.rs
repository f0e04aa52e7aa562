//! Read-only aggregates over the warehouse collections.
//!
//! Everything here is a pure function of a [`ReportData`] snapshot; callers
//! take the snapshot from their stores and optionally narrow it to one
//! warehouse with [`ReportData::scoped`].

pub mod activity;
pub mod dashboard;
pub mod data;
pub mod kpi;

pub use activity::{Activity, ActivityKind, ActivityStatus, recent_activity};
pub use dashboard::{Dashboard, DashboardStats, dashboard, dashboard_stats};
pub use data::ReportData;
pub use kpi::{Breakdowns, Kpis, Report, breakdowns, kpis, report};

/// Dashboard shows this many recent orders and tasks.
pub const DASHBOARD_RECENT: usize = 5;

/// Default length of the activity feed.
pub const DEFAULT_ACTIVITY_LIMIT: usize = 10;

#[cfg(test)]
mod fixtures;

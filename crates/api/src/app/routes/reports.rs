//! Read-only aggregate views over the current collections.

use std::sync::Arc;

use axum::{Extension, Router, response::Response, routing::get};

use wms_core::RecordId;
use wms_reports::{DEFAULT_ACTIVITY_LIMIT, ReportData};

use crate::app::envelope::{self, ApiQuery};
use crate::app::errors;
use crate::app::routes::common::{self, Params};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/reports", get(reports))
}

/// Snapshot of the collections, narrowed to `?warehouseId=` when given.
fn scoped_data(services: &AppServices, params: &Params) -> Result<ReportData, Response> {
    let warehouse_id: Option<RecordId> = common::parse_param(params, "warehouseId")?;
    let data = services
        .report_data()
        .map_err(errors::store_error_to_response)?;
    Ok(data.scoped(warehouse_id))
}

async fn dashboard(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(params): ApiQuery<Params>,
) -> Response {
    match scoped_data(&services, &params) {
        Ok(data) => match wms_reports::dashboard(&data) {
            Ok(dashboard) => envelope::ok(dashboard),
            Err(e) => errors::domain_error_to_response(e),
        },
        Err(resp) => resp,
    }
}

async fn reports(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(params): ApiQuery<Params>,
) -> Response {
    let limit = match common::parse_param::<usize>(&params, "limit") {
        Ok(limit) => limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT),
        Err(resp) => return resp,
    };
    match scoped_data(&services, &params) {
        Ok(data) => match wms_reports::report(&data, limit) {
            Ok(report) => envelope::ok(report),
            Err(e) => errors::domain_error_to_response(e),
        },
        Err(resp) => resp,
    }
}

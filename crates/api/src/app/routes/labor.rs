//! Workforce endpoints: workers, shifts and productivity records.

use std::sync::Arc;

use axum::{
    Extension, Router,
    response::Response,
    routing::get,
};
use chrono::Utc;

use wms_labor::{
    NewProductivityRecord, NewShift, NewWorker, ProductivityFilter, ProductivityPatch,
    ProductivityRecord, Shift, ShiftFilter, ShiftPatch, Worker, WorkerFilter, WorkerPatch,
};

use crate::app::envelope::{ApiJson, ApiQuery};
use crate::app::routes::common::{self, Params, UpdateRequest};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route(
            "/labor/workers",
            get(list_workers)
                .post(create_worker)
                .put(update_worker)
                .delete(delete_worker),
        )
        .route(
            "/labor/shifts",
            get(list_shifts)
                .post(create_shift)
                .put(update_shift)
                .delete(delete_shift),
        )
        .route(
            "/labor/productivity",
            get(list_productivity)
                .post(create_productivity)
                .put(update_productivity)
                .delete(delete_productivity),
        )
}

// Workers

fn worker_filter(params: &Params) -> Result<WorkerFilter, Response> {
    Ok(WorkerFilter {
        status: common::enum_param(params, "status")?,
        role: common::enum_param(params, "role")?,
        warehouse_id: common::parse_param(params, "warehouseId")?,
    })
}

async fn list_workers(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(params): ApiQuery<Params>,
) -> Response {
    let filter = match worker_filter(&params) {
        Ok(f) => f,
        Err(resp) => return resp,
    };
    common::list_or_get(&services.workers, &params, |w: &Worker| filter.matches(w))
}

async fn create_worker(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<NewWorker>,
) -> Response {
    let now = Utc::now();
    common::create_record(&services.workers, |id| Worker::create(id, body, now))
}

async fn update_worker(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(req): ApiJson<UpdateRequest<WorkerPatch>>,
) -> Response {
    let now = Utc::now();
    common::update_record(&services.workers, req.id, |w: &mut Worker| {
        w.apply_patch(req.patch, now)
    })
}

async fn delete_worker(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(params): ApiQuery<Params>,
) -> Response {
    common::delete_record::<Worker, _>(&services.workers, &params)
}

// Shifts

fn shift_filter(params: &Params) -> Result<ShiftFilter, Response> {
    Ok(ShiftFilter {
        status: common::enum_param(params, "status")?,
        warehouse_id: common::parse_param(params, "warehouseId")?,
    })
}

async fn list_shifts(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(params): ApiQuery<Params>,
) -> Response {
    let filter = match shift_filter(&params) {
        Ok(f) => f,
        Err(resp) => return resp,
    };
    common::list_or_get(&services.shifts, &params, |s: &Shift| filter.matches(s))
}

async fn create_shift(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<NewShift>,
) -> Response {
    let now = Utc::now();
    common::create_record(&services.shifts, |id| Shift::create(id, body, now))
}

async fn update_shift(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(req): ApiJson<UpdateRequest<ShiftPatch>>,
) -> Response {
    common::update_record(&services.shifts, req.id, |s: &mut Shift| {
        s.apply_patch(req.patch)
    })
}

async fn delete_shift(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(params): ApiQuery<Params>,
) -> Response {
    common::delete_record::<Shift, _>(&services.shifts, &params)
}

// Productivity

async fn list_productivity(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(params): ApiQuery<Params>,
) -> Response {
    let filter = match common::parse_param(&params, "workerId") {
        Ok(worker_id) => ProductivityFilter { worker_id },
        Err(resp) => return resp,
    };
    common::list_or_get(&services.productivity, &params, |r: &ProductivityRecord| {
        filter.matches(r)
    })
}

async fn create_productivity(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<NewProductivityRecord>,
) -> Response {
    common::create_record(&services.productivity, |id| {
        ProductivityRecord::create(id, body)
    })
}

async fn update_productivity(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(req): ApiJson<UpdateRequest<ProductivityPatch>>,
) -> Response {
    common::update_record(&services.productivity, req.id, |r: &mut ProductivityRecord| {
        r.apply_patch(req.patch)
    })
}

async fn delete_productivity(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(params): ApiQuery<Params>,
) -> Response {
    common::delete_record::<ProductivityRecord, _>(&services.productivity, &params)
}

//! Equipment fleet and its maintenance log.

use std::sync::Arc;

use axum::{
    Extension, Router,
    response::Response,
    routing::get,
};
use chrono::Utc;

use wms_equipment::{
    Equipment, EquipmentFilter, EquipmentPatch, MaintenanceFilter, MaintenancePatch,
    MaintenanceRecord, NewEquipment, NewMaintenanceRecord,
};

use crate::app::envelope::{ApiJson, ApiQuery};
use crate::app::routes::common::{self, Params, UpdateRequest};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route(
            "/equipment",
            get(list_equipment)
                .post(create_equipment)
                .put(update_equipment)
                .delete(delete_equipment),
        )
        .route(
            "/equipment/maintenance",
            get(list_maintenance)
                .post(create_maintenance)
                .put(update_maintenance)
                .delete(delete_maintenance),
        )
}

fn equipment_filter(params: &Params) -> Result<EquipmentFilter, Response> {
    Ok(EquipmentFilter {
        status: common::enum_param(params, "status")?,
        equipment_type: common::enum_param(params, "type")?,
        warehouse_id: common::parse_param(params, "warehouseId")?,
    })
}

async fn list_equipment(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(params): ApiQuery<Params>,
) -> Response {
    let filter = match equipment_filter(&params) {
        Ok(f) => f,
        Err(resp) => return resp,
    };
    common::list_or_get(&services.equipment, &params, |e: &Equipment| filter.matches(e))
}

async fn create_equipment(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<NewEquipment>,
) -> Response {
    let now = Utc::now();
    common::create_record(&services.equipment, |id| Equipment::create(id, body, now))
}

async fn update_equipment(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(req): ApiJson<UpdateRequest<EquipmentPatch>>,
) -> Response {
    let now = Utc::now();
    common::update_record(&services.equipment, req.id, |e: &mut Equipment| {
        e.apply_patch(req.patch, now)
    })
}

async fn delete_equipment(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(params): ApiQuery<Params>,
) -> Response {
    common::delete_record::<Equipment, _>(&services.equipment, &params)
}

fn maintenance_filter(params: &Params) -> Result<MaintenanceFilter, Response> {
    Ok(MaintenanceFilter {
        status: common::enum_param(params, "status")?,
        equipment_id: common::parse_param(params, "equipmentId")?,
    })
}

async fn list_maintenance(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(params): ApiQuery<Params>,
) -> Response {
    let filter = match maintenance_filter(&params) {
        Ok(f) => f,
        Err(resp) => return resp,
    };
    common::list_or_get(&services.maintenance, &params, |m: &MaintenanceRecord| {
        filter.matches(m)
    })
}

async fn create_maintenance(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<NewMaintenanceRecord>,
) -> Response {
    let now = Utc::now();
    common::create_record(&services.maintenance, |id| {
        MaintenanceRecord::create(id, body, now)
    })
}

async fn update_maintenance(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(req): ApiJson<UpdateRequest<MaintenancePatch>>,
) -> Response {
    let now = Utc::now();
    common::update_record(&services.maintenance, req.id, |m: &mut MaintenanceRecord| {
        m.apply_patch(req.patch, now)
    })
}

async fn delete_maintenance(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(params): ApiQuery<Params>,
) -> Response {
    common::delete_record::<MaintenanceRecord, _>(&services.maintenance, &params)
}

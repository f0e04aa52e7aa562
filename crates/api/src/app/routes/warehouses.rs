use std::sync::Arc;

use axum::{
    Extension, Router,
    response::Response,
    routing::get,
};
use chrono::Utc;

use wms_warehouses::{NewWarehouse, Warehouse, WarehouseFilter, WarehousePatch};

use crate::app::envelope::{ApiJson, ApiQuery};
use crate::app::routes::common::{self, Params, UpdateRequest};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/warehouses", get(list).post(create).put(update).delete(remove))
}

fn filter(params: &Params) -> Result<WarehouseFilter, Response> {
    Ok(WarehouseFilter {
        status: common::enum_param(params, "status")?,
    })
}

async fn list(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(params): ApiQuery<Params>,
) -> Response {
    let filter = match filter(&params) {
        Ok(f) => f,
        Err(resp) => return resp,
    };
    common::list_or_get(&services.warehouses, &params, |w: &Warehouse| filter.matches(w))
}

async fn create(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<NewWarehouse>,
) -> Response {
    let now = Utc::now();
    common::create_record(&services.warehouses, |id| Warehouse::create(id, body, now))
}

async fn update(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(req): ApiJson<UpdateRequest<WarehousePatch>>,
) -> Response {
    let now = Utc::now();
    common::update_record(&services.warehouses, req.id, |w: &mut Warehouse| {
        w.apply_patch(req.patch, now)
    })
}

async fn remove(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(params): ApiQuery<Params>,
) -> Response {
    common::delete_record::<Warehouse, _>(&services.warehouses, &params)
}

use std::sync::Arc;

use axum::{
    Extension, Router,
    response::Response,
    routing::get,
};
use chrono::Utc;

use wms_inventory::{InventoryFilter, InventoryItem, InventoryItemPatch, NewInventoryItem};

use crate::app::envelope::{ApiJson, ApiQuery};
use crate::app::routes::common::{self, Params, UpdateRequest};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/inventory", get(list).post(create).put(update).delete(remove))
}

fn filter(params: &Params) -> Result<InventoryFilter, Response> {
    Ok(InventoryFilter {
        warehouse_id: common::parse_param(params, "warehouseId")?,
        category: common::text_param(params, "category"),
        status: common::enum_param(params, "status")?,
        low_stock: common::parse_param(params, "lowStock")?,
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
    common::list_or_get(&services.inventory, &params, |item: &InventoryItem| {
        filter.matches(item)
    })
}

async fn create(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<NewInventoryItem>,
) -> Response {
    let now = Utc::now();
    common::create_record(&services.inventory, |id| InventoryItem::create(id, body, now))
}

async fn update(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(req): ApiJson<UpdateRequest<InventoryItemPatch>>,
) -> Response {
    let now = Utc::now();
    common::update_record(&services.inventory, req.id, |item: &mut InventoryItem| {
        item.apply_patch(req.patch, now)
    })
}

async fn remove(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(params): ApiQuery<Params>,
) -> Response {
    common::delete_record::<InventoryItem, _>(&services.inventory, &params)
}

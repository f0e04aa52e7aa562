use std::sync::Arc;

use axum::{
    Extension, Router,
    response::Response,
    routing::get,
};
use chrono::Utc;

use wms_receiving::{NewReceivingOrder, ReceivingFilter, ReceivingOrder, ReceivingOrderPatch};

use crate::app::envelope::{ApiJson, ApiQuery};
use crate::app::routes::common::{self, Params, UpdateRequest};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/receiving", get(list).post(create).put(update).delete(remove))
}

fn filter(params: &Params) -> Result<ReceivingFilter, Response> {
    Ok(ReceivingFilter {
        status: common::enum_param(params, "status")?,
        warehouse_id: common::parse_param(params, "warehouseId")?,
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
    common::list_or_get(&services.receiving, &params, |r: &ReceivingOrder| filter.matches(r))
}

async fn create(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<NewReceivingOrder>,
) -> Response {
    let now = Utc::now();
    common::create_record(&services.receiving, |id| ReceivingOrder::create(id, body, now))
}

async fn update(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(req): ApiJson<UpdateRequest<ReceivingOrderPatch>>,
) -> Response {
    let now = Utc::now();
    common::update_record(&services.receiving, req.id, |r: &mut ReceivingOrder| {
        r.apply_patch(req.patch, now)
    })
}

async fn remove(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(params): ApiQuery<Params>,
) -> Response {
    common::delete_record::<ReceivingOrder, _>(&services.receiving, &params)
}

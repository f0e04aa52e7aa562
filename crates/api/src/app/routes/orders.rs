use std::sync::Arc;

use axum::{
    Extension, Router,
    response::Response,
    routing::get,
};
use chrono::Utc;

use wms_orders::{NewOrder, Order, OrderFilter, OrderPatch};

use crate::app::envelope::{ApiJson, ApiQuery};
use crate::app::routes::common::{self, Params, UpdateRequest};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/orders", get(list).post(create).put(update).delete(remove))
}

fn filter(params: &Params) -> Result<OrderFilter, Response> {
    Ok(OrderFilter {
        status: common::enum_param(params, "status")?,
        warehouse_id: common::parse_param(params, "warehouseId")?,
        priority: common::enum_param(params, "priority")?,
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
    common::list_or_get(&services.orders, &params, |o: &Order| filter.matches(o))
}

async fn create(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<NewOrder>,
) -> Response {
    let now = Utc::now();
    common::create_record(&services.orders, |id| Order::create(id, body, now))
}

async fn update(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(req): ApiJson<UpdateRequest<OrderPatch>>,
) -> Response {
    let now = Utc::now();
    common::update_record(&services.orders, req.id, |o: &mut Order| {
        o.apply_patch(req.patch, now)
    })
}

async fn remove(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(params): ApiQuery<Params>,
) -> Response {
    common::delete_record::<Order, _>(&services.orders, &params)
}

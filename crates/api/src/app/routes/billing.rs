use std::sync::Arc;

use axum::{
    Extension, Router,
    response::Response,
    routing::get,
};
use chrono::Utc;

use wms_billing::{BillingFilter, BillingPatch, BillingRecord, NewBillingRecord};

use crate::app::envelope::{ApiJson, ApiQuery};
use crate::app::routes::common::{self, Params, UpdateRequest};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/billing", get(list).post(create).put(update).delete(remove))
}

fn filter(params: &Params) -> Result<BillingFilter, Response> {
    Ok(BillingFilter {
        status: common::enum_param(params, "status")?,
        customer_id: common::text_param(params, "customerId"),
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
    common::list_or_get(&services.billing, &params, |b: &BillingRecord| filter.matches(b))
}

async fn create(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<NewBillingRecord>,
) -> Response {
    let now = Utc::now();
    common::create_record(&services.billing, |id| BillingRecord::create(id, body, now))
}

async fn update(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(req): ApiJson<UpdateRequest<BillingPatch>>,
) -> Response {
    let now = Utc::now();
    common::update_record(&services.billing, req.id, |b: &mut BillingRecord| {
        b.apply_patch(req.patch, now)
    })
}

async fn remove(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(params): ApiQuery<Params>,
) -> Response {
    common::delete_record::<BillingRecord, _>(&services.billing, &params)
}

use std::sync::Arc;

use axum::{
    Extension, Router,
    response::Response,
    routing::get,
};
use chrono::Utc;

use wms_quality::{NewQualityCheck, QualityCheck, QualityFilter, QualityPatch};

use crate::app::envelope::{ApiJson, ApiQuery};
use crate::app::routes::common::{self, Params, UpdateRequest};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/quality", get(list).post(create).put(update).delete(remove))
}

fn filter(params: &Params) -> Result<QualityFilter, Response> {
    Ok(QualityFilter {
        status: common::enum_param(params, "status")?,
        check_type: common::enum_param(params, "type")?,
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
    common::list_or_get(&services.quality, &params, |q: &QualityCheck| filter.matches(q))
}

async fn create(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<NewQualityCheck>,
) -> Response {
    let now = Utc::now();
    common::create_record(&services.quality, |id| QualityCheck::create(id, body, now))
}

async fn update(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(req): ApiJson<UpdateRequest<QualityPatch>>,
) -> Response {
    let now = Utc::now();
    common::update_record(&services.quality, req.id, |q: &mut QualityCheck| {
        q.apply_patch(req.patch, now)
    })
}

async fn remove(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(params): ApiQuery<Params>,
) -> Response {
    common::delete_record::<QualityCheck, _>(&services.quality, &params)
}

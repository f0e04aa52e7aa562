use std::sync::Arc;

use axum::{
    Extension, Router,
    response::Response,
    routing::get,
};
use chrono::Utc;

use wms_tasks::{NewTask, Task, TaskFilter, TaskPatch};

use crate::app::envelope::{ApiJson, ApiQuery};
use crate::app::routes::common::{self, Params, UpdateRequest};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/tasks", get(list).post(create).put(update).delete(remove))
}

fn filter(params: &Params) -> Result<TaskFilter, Response> {
    Ok(TaskFilter {
        status: common::enum_param(params, "status")?,
        task_type: common::enum_param(params, "type")?,
        warehouse_id: common::parse_param(params, "warehouseId")?,
        assigned_to: common::text_param(params, "assignedTo"),
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
    common::list_or_get(&services.tasks, &params, |t: &Task| filter.matches(t))
}

async fn create(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<NewTask>,
) -> Response {
    let now = Utc::now();
    common::create_record(&services.tasks, |id| Task::create(id, body, now))
}

async fn update(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(req): ApiJson<UpdateRequest<TaskPatch>>,
) -> Response {
    let now = Utc::now();
    common::update_record(&services.tasks, req.id, |t: &mut Task| {
        t.apply_patch(req.patch, now)
    })
}

async fn remove(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(params): ApiQuery<Params>,
) -> Response {
    common::delete_record::<Task, _>(&services.tasks, &params)
}

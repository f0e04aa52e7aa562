use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use serde::Serialize;

use wms_auth::{Credentials, SessionToken, UserProfile};

use crate::app::envelope::ApiJson;
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/auth/login", post(login))
}

#[derive(Debug, Serialize)]
struct LoginResponse {
    success: bool,
    user: UserProfile,
    token: SessionToken,
}

async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(credentials): ApiJson<Credentials>,
) -> Response {
    match services.authenticator.authenticate(&credentials) {
        Ok(user) => {
            tracing::info!(username = %user.username, "login succeeded");
            let body = LoginResponse {
                success: true,
                user,
                token: SessionToken::issue(Utc::now()),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            tracing::warn!(username = %credentials.username, "login rejected");
            errors::json_error(StatusCode::UNAUTHORIZED, e.to_string())
        }
    }
}

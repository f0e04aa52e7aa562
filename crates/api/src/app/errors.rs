use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use wms_core::DomainError;
use wms_infra::StoreError;

use crate::app::envelope::ApiResponse;

pub fn store_error_to_response(err: StoreError) -> Response {
    match err {
        StoreError::NotFound { resource, id } => {
            tracing::debug!(resource, %id, "record not found");
            json_error(StatusCode::NOT_FOUND, format!("{resource} not found"))
        }
        StoreError::Poisoned(resource) => {
            tracing::error!(resource, "store lock poisoned");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
        StoreError::Domain(e) => domain_error_to_response(e),
    }
}

pub fn domain_error_to_response(err: DomainError) -> Response {
    match err {
        DomainError::Validation(msg) | DomainError::InvalidId(msg) => {
            json_error(StatusCode::BAD_REQUEST, msg)
        }
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "Not found"),
        DomainError::InvariantViolation(msg) => {
            tracing::error!(error = %msg, "invariant violated");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

/// `{success: false, message}` with the given status.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, axum::Json(ApiResponse::message(false, message))).into_response()
}

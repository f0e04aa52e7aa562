use axum::http::StatusCode;

/// Liveness check.
pub async fn health() -> StatusCode {
    StatusCode::OK
}

use axum::Router;

pub mod auth;
pub mod billing;
pub mod common;
pub mod equipment;
pub mod inventory;
pub mod labor;
pub mod orders;
pub mod quality;
pub mod receiving;
pub mod reports;
pub mod system;
pub mod tasks;
pub mod warehouses;

/// Router for every `/api` endpoint. Each module registers its own full paths.
pub fn router() -> Router {
    Router::new()
        .merge(auth::router())
        .merge(warehouses::router())
        .merge(inventory::router())
        .merge(orders::router())
        .merge(receiving::router())
        .merge(tasks::router())
        .merge(billing::router())
        .merge(labor::router())
        .merge(equipment::router())
        .merge(quality::router())
        .merge(reports::router())
}

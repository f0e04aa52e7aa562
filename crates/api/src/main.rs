use std::sync::Arc;

use anyhow::Context;

use wms_api::app::{AppServices, build_app};
use wms_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    wms_observability::init();

    let config = AppConfig::from_env();
    let services = AppServices::from_config(&config).context("failed to load seed data")?;
    let app = build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %listener.local_addr()?, seed_data = config.seed_data, "listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

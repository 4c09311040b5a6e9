use crate::app::routes;
use crate::config::AppConfig;
use crate::core::engine::PredictionEngine;
use anyhow::Context;

pub async fn setup_and_serve(config: &AppConfig, engine: PredictionEngine) -> anyhow::Result<()> {
    let app = routes::router(engine);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    tracing::info!("🏠 house-price-web listening on http://{}", address);

    axum::serve(listener, app)
        .await
        .context("error starting service")
}

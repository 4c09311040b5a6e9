use crate::app::pages;
use crate::core::engine::PredictionEngine;
use crate::domain::model::PredictionRequest;
use crate::utils::error::AppError;
use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Router};
use tower_http::trace::TraceLayer;

pub async fn form_page() -> Html<&'static str> {
    Html(pages::FORM_PAGE)
}

/// Missing or non-numeric fields are rejected by the `Form` extractor (422)
/// before this body runs.
#[tracing::instrument(skip(engine))]
pub async fn predict_form(
    State(engine): State<PredictionEngine>,
    Form(request): Form<PredictionRequest>,
) -> Result<Html<String>, AppError> {
    let outcome = engine.run(request).await?;
    Ok(Html(pages::render_result_page(
        &outcome.result,
        &outcome.chart_base64,
    )))
}

pub async fn health_handler() -> &'static str {
    "healthy"
}

pub fn router(engine: PredictionEngine) -> Router {
    Router::new()
        .route("/", get(form_page))
        .route("/predict_form", post(predict_form))
        .route("/health", get(health_handler))
        .with_state(engine)
        .layer(TraceLayer::new_for_http())
}

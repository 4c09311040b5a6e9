use crate::config::AppConfig;
use crate::core::dataset::load_reference_dataset;
use crate::core::engine::PredictionEngine;
use crate::core::predictor::LinearRegressionModel;
use crate::domain::ports::PricePredictor;
use crate::utils::error::Result;
use std::sync::Arc;

/// Loads the model artifact and reference dataset named in the config.
///
/// Both are read exactly once; the returned engine only hands out shared
/// read-only references to them.
pub fn build_engine(config: &AppConfig) -> Result<PredictionEngine> {
    let model = LinearRegressionModel::from_file(&config.model.path)?;
    tracing::info!(
        "🧠 Loaded {} model from {} (intercept={:.2}, coefficients={:?})",
        model.name(),
        config.model.path,
        model.intercept(),
        model.coefficients()
    );

    let dataset = load_reference_dataset(&config.dataset.path)?;
    tracing::info!(
        "📊 Loaded {} reference points from {}",
        dataset.len(),
        config.dataset.path
    );

    Ok(PredictionEngine::new(
        Arc::new(model),
        Arc::new(dataset),
        config.chart_renderer(),
    ))
}

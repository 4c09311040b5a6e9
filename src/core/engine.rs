use crate::core::chart::ChartRenderer;
use crate::domain::model::{
    FeatureRecord, PredictionRequest, PredictionResult, ReferenceDataset, ReferencePoint,
};
use crate::domain::ports::PricePredictor;
use crate::utils::error::{AppError, Result};
use std::sync::Arc;

/// What one prediction round trip produces: the price and the chart behind it.
#[derive(Debug, Clone)]
pub struct PredictionOutcome {
    pub result: PredictionResult,
    pub chart_base64: String,
}

fn prediction_point(request: &PredictionRequest, result: &PredictionResult) -> ReferencePoint {
    ReferencePoint {
        area: request.area,
        price: result.price,
    }
}

/// Process-lifetime model and dataset plus the chart settings.
///
/// Cloning is cheap; the model and dataset are shared read-only.
#[derive(Clone)]
pub struct PredictionEngine {
    predictor: Arc<dyn PricePredictor>,
    dataset: Arc<ReferenceDataset>,
    chart: ChartRenderer,
}

impl PredictionEngine {
    pub fn new(
        predictor: Arc<dyn PricePredictor>,
        dataset: Arc<ReferenceDataset>,
        chart: ChartRenderer,
    ) -> Self {
        Self {
            predictor,
            dataset,
            chart,
        }
    }

    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult> {
        if !request.area.is_finite() {
            return Err(AppError::InvalidInput {
                field: "area".to_string(),
                message: format!("{} is not a finite number", request.area),
            });
        }

        let features = FeatureRecord::from(request);
        let price = self.predictor.predict(&features)?;
        tracing::debug!(
            "Predicted {:.2} for area={}, bedrooms={}, age={}",
            price,
            request.area,
            request.bedrooms,
            request.age
        );
        Ok(PredictionResult { price })
    }

    pub fn render_chart(
        &self,
        request: &PredictionRequest,
        result: &PredictionResult,
    ) -> Result<String> {
        self.chart
            .render_base64(&self.dataset, prediction_point(request, result))
    }

    pub fn render_chart_png(
        &self,
        request: &PredictionRequest,
        result: &PredictionResult,
    ) -> Result<Vec<u8>> {
        self.chart
            .render_png(&self.dataset, prediction_point(request, result))
    }

    /// Predicts and renders the comparison chart.
    ///
    /// Rendering is CPU bound, so it runs on the blocking pool.
    pub async fn run(&self, request: PredictionRequest) -> Result<PredictionOutcome> {
        let result = self.predict(&request)?;

        let engine = self.clone();
        let chart_base64 =
            tokio::task::spawn_blocking(move || engine.render_chart(&request, &result)).await??;

        Ok(PredictionOutcome {
            result,
            chart_base64,
        })
    }
}

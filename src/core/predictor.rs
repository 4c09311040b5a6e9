use crate::domain::model::FeatureRecord;
use crate::domain::ports::PricePredictor;
use crate::utils::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

const LINEAR_REGRESSION: &str = "linear_regression";

/// On-disk form of a fitted linear regression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub model_type: String,
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressionModel {
    coefficients: [f64; 3],
    intercept: f64,
}

impl LinearRegressionModel {
    pub fn new(coefficients: [f64; 3], intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    /// 從 JSON 檔案載入模型
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| AppError::ModelError {
            message: format!("cannot read '{}': {}", path.display(), e),
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let artifact: ModelArtifact = serde_json::from_str(content)?;
        Self::from_artifact(artifact)
    }

    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        if artifact.model_type != LINEAR_REGRESSION {
            return Err(AppError::ModelError {
                message: format!(
                    "unsupported model_type '{}', expected '{}'",
                    artifact.model_type, LINEAR_REGRESSION
                ),
            });
        }

        if artifact.feature_names != FeatureRecord::COLUMNS {
            return Err(AppError::ModelError {
                message: format!(
                    "feature_names {:?} do not match expected column order {:?}",
                    artifact.feature_names,
                    FeatureRecord::COLUMNS
                ),
            });
        }

        let coefficients: [f64; 3] =
            artifact
                .coefficients
                .as_slice()
                .try_into()
                .map_err(|_| AppError::ModelError {
                    message: format!(
                        "expected {} coefficients, found {}",
                        FeatureRecord::COLUMNS.len(),
                        artifact.coefficients.len()
                    ),
                })?;

        if !artifact.intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
            return Err(AppError::ModelError {
                message: "model parameters must be finite numbers".to_string(),
            });
        }

        Ok(Self::new(coefficients, artifact.intercept))
    }

    pub fn coefficients(&self) -> [f64; 3] {
        self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl PricePredictor for LinearRegressionModel {
    fn predict(&self, features: &FeatureRecord) -> Result<f64> {
        let dot: f64 = self
            .coefficients
            .iter()
            .zip(features.values())
            .map(|(coef, x)| coef * x)
            .sum();
        let price = dot + self.intercept;

        if !price.is_finite() {
            return Err(AppError::PredictionError {
                message: format!("model produced a non-finite value for {:?}", features),
            });
        }

        Ok(price)
    }

    fn name(&self) -> &str {
        LINEAR_REGRESSION
    }
}

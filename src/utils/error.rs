use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Model artifact error: {message}")]
    ModelError { message: String },

    #[error("Reference dataset error: {message}")]
    DatasetError { message: String },

    #[error("Invalid input for '{field}': {message}")]
    InvalidInput { field: String, message: String },

    #[error("Prediction failed: {message}")]
    PredictionError { message: String },

    #[error("Chart rendering failed: {message}")]
    ChartError { message: String },

    #[error("Background task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Startup,
    Input,
    Inference,
    Rendering,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::ConfigValidationError { .. } | AppError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            AppError::ModelError { .. }
            | AppError::DatasetError { .. }
            | AppError::CsvError(_)
            | AppError::SerializationError(_) => ErrorCategory::Startup,
            AppError::InvalidInput { .. } => ErrorCategory::Input,
            AppError::PredictionError { .. } => ErrorCategory::Inference,
            AppError::ChartError { .. } => ErrorCategory::Rendering,
            AppError::IoError(_) | AppError::TaskError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Inference | ErrorCategory::Rendering => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Startup => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::ConfigValidationError { .. } => {
                "Check the TOML syntax and section names of the configuration file"
            }
            AppError::InvalidConfigValueError { .. } => {
                "Correct the highlighted value in the configuration file or CLI flags"
            }
            AppError::ModelError { .. } | AppError::SerializationError(_) => {
                "Re-export the model artifact as linear_regression JSON \
                 with features area, bedrooms, age"
            }
            AppError::DatasetError { .. } | AppError::CsvError(_) => {
                "Make sure the dataset CSV has 'area' and 'price' columns with numeric values"
            }
            AppError::InvalidInput { .. } => "Submit numeric values for area, bedrooms and age",
            AppError::PredictionError { .. } => {
                "Check that the model artifact coefficients produce finite values"
            }
            AppError::ChartError { .. } => {
                "Check that the inputs produce a price within a drawable range"
            }
            AppError::IoError(_) => "Verify the file paths exist and are readable",
            AppError::TaskError(_) => "Inspect the server logs for a panic in a worker thread",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::InvalidInput { field, .. } => {
                format!("The value for '{}' is not a valid number", field)
            }
            AppError::PredictionError { .. } => "Could not compute a price estimate".to_string(),
            AppError::ChartError { .. } => "Could not render the comparison chart".to_string(),
            AppError::ModelError { .. } => "The price model could not be loaded".to_string(),
            AppError::DatasetError { .. } | AppError::CsvError(_) => {
                "The reference dataset could not be loaded".to_string()
            }
            AppError::ConfigValidationError { .. } | AppError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            _ => "An internal error occurred".to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(
                "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
                self,
                self.category(),
                self.severity()
            );
        } else {
            tracing::warn!("Rejected request: {}", self);
        }
        (status, self.user_friendly_message()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_client_error() {
        let err = AppError::InvalidInput {
            field: "area".to_string(),
            message: "not finite".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.user_friendly_message().contains("area"));
    }

    #[test]
    fn test_internal_errors_map_to_500() {
        let err = AppError::ChartError {
            message: "backend".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.category(), ErrorCategory::Rendering);

        let err = AppError::ModelError {
            message: "bad".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[tokio::test]
    async fn test_internal_details_not_leaked_to_client() {
        let err = AppError::PredictionError {
            message: "coefficient 2 is NaN".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert_eq!(body, "Could not compute a price estimate");
    }
}

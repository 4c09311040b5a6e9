pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{PredictArgs, ServerArgs};

pub use crate::app::{bootstrap::build_engine, routes::router};
pub use crate::config::AppConfig;
pub use crate::core::{
    chart::ChartRenderer, engine::PredictionEngine, predictor::LinearRegressionModel,
};
pub use crate::utils::error::{AppError, Result};

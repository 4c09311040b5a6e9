pub mod chart;
pub mod dataset;
pub mod engine;
pub mod predictor;

pub use crate::domain::model::{
    FeatureRecord, PredictionRequest, PredictionResult, ReferenceDataset, ReferencePoint,
};
pub use crate::domain::ports::PricePredictor;
pub use crate::utils::error::Result;

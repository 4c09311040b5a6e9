use crate::domain::model::FeatureRecord;
use crate::utils::error::Result;

/// A loaded, immutable price model.
pub trait PricePredictor: Send + Sync {
    fn predict(&self, features: &FeatureRecord) -> Result<f64>;

    /// Short model description for logs.
    fn name(&self) -> &str;
}

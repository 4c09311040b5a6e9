use serde::{Deserialize, Serialize};

/// Submitted form fields. Parsing is the only validation these values get.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub area: f64,
    pub bedrooms: u32,
    pub age: u32,
}

/// Single-row model input in the fixed column order (area, bedrooms, age).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRecord {
    pub area: f64,
    pub bedrooms: f64,
    pub age: f64,
}

impl FeatureRecord {
    pub const COLUMNS: [&'static str; 3] = ["area", "bedrooms", "age"];

    pub fn values(&self) -> [f64; 3] {
        [self.area, self.bedrooms, self.age]
    }
}

impl From<&PredictionRequest> for FeatureRecord {
    fn from(request: &PredictionRequest) -> Self {
        Self {
            area: request.area,
            bedrooms: f64::from(request.bedrooms),
            age: f64::from(request.age),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub area: f64,
    pub price: f64,
}

/// Historical (area, price) pairs drawn behind every new prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceDataset {
    points: Vec<ReferencePoint>,
}

impl ReferenceDataset {
    pub fn new(points: Vec<ReferencePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[ReferencePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_record_column_order() {
        let request = PredictionRequest {
            area: 1000.0,
            bedrooms: 3,
            age: 5,
        };
        let record = FeatureRecord::from(&request);
        assert_eq!(record.values(), [1000.0, 3.0, 5.0]);
        assert_eq!(FeatureRecord::COLUMNS, ["area", "bedrooms", "age"]);
    }
}

use crate::domain::a001_feature_set::FeatureSet;
use serde::Serialize;

/// Тело запроса `POST /predict`
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest<'a> {
    pub features: &'a FeatureSet,
}

impl<'a> PredictRequest<'a> {
    pub fn new(features: &'a FeatureSet) -> Self {
        Self { features }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

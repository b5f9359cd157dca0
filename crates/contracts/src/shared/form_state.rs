use crate::domain::a001_feature_set::{FeatureField, FeatureSet, Preset};
use crate::usecases::u501_predict::{PredictError, PredictionResult};

/// Lifecycle of the latest prediction attempt
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Succeeded(PredictionResult),
    Failed(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            RequestState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// FormStateStore holds the form's feature set and the request state machine.
///
/// Kept free of any reactive or browser types so the transitions can be
/// unit-tested; the UI wraps it in a signal.
#[derive(Debug, Clone, PartialEq)]
pub struct FormStateStore {
    features: FeatureSet,
    request: RequestState,
}

impl FormStateStore {
    pub fn new(features: FeatureSet) -> Self {
        Self {
            features,
            request: RequestState::Idle,
        }
    }

    pub fn from_preset(preset: &Preset) -> Self {
        Self::new(preset.features.clone())
    }

    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    pub fn is_busy(&self) -> bool {
        self.request.is_loading()
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.request.result()
    }

    pub fn error(&self) -> Option<&str> {
        self.request.error()
    }

    pub fn set_field(&mut self, field: FeatureField, raw: &str) {
        let mut next = self.features.clone();
        next.set_field(field, raw);
        self.features = next;
    }

    pub fn apply_preset(&mut self, preset: &Preset) {
        self.features = preset.features.clone();
        self.request = RequestState::Idle;
    }

    /// Drop the last result or error. The feature set is left alone.
    pub fn clear(&mut self) {
        self.request = RequestState::Idle;
    }

    /// Enter Loading and hand back the payload snapshot for the request.
    /// Edits made while the request is in flight do not touch the snapshot.
    pub fn begin_request(&mut self) -> FeatureSet {
        self.request = RequestState::Loading;
        self.features.clone()
    }

    pub fn finish_request(&mut self, outcome: Result<PredictionResult, PredictError>) {
        self.request = match outcome {
            Ok(result) => RequestState::Succeeded(result),
            Err(e) => RequestState::Failed(e.to_string()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_feature_set::{default_preset, find_preset};
    use serde_json::json;

    #[test]
    fn test_apply_preset_round_trip() {
        let mut store = FormStateStore::from_preset(default_preset());
        let preset = find_preset("preset_3").unwrap();
        store.apply_preset(preset);
        assert_eq!(store.features(), &preset.features);
        assert_eq!(
            serde_json::to_value(store.features()).unwrap(),
            serde_json::to_value(&preset.features).unwrap()
        );
    }

    #[test]
    fn test_lifecycle_success() {
        let mut store = FormStateStore::from_preset(default_preset());
        assert_eq!(store.request(), &RequestState::Idle);

        let snapshot = store.begin_request();
        assert!(store.is_busy());
        assert_eq!(&snapshot, store.features());

        let result = PredictionResult::new(json!({"predicted_sales": 12.3, "dynamic_price": 150.0}));
        store.finish_request(Ok(result.clone()));
        assert!(!store.is_busy());
        assert_eq!(store.result(), Some(&result));
        assert_eq!(store.error(), None);
    }

    #[test]
    fn test_lifecycle_failure_and_clear() {
        let mut store = FormStateStore::from_preset(default_preset());
        let before = store.features().clone();
        store.begin_request();
        store.finish_request(Err(PredictError::Transport("connection refused".into())));
        assert_eq!(store.error(), Some("connection refused"));

        store.clear();
        assert_eq!(store.request(), &RequestState::Idle);
        assert_eq!(store.features(), &before);
    }

    #[test]
    fn test_edits_during_flight_do_not_change_snapshot() {
        let mut store = FormStateStore::from_preset(default_preset());
        let snapshot = store.begin_request();
        store.set_field(FeatureField::ItemIdentifier, "CHANGED");
        assert_eq!(snapshot.item_identifier, "FDW12");
        assert_eq!(store.features().item_identifier, "CHANGED");
        assert!(store.is_busy());
    }

    #[test]
    fn test_apply_preset_resets_request() {
        let mut store = FormStateStore::from_preset(default_preset());
        store.begin_request();
        store.finish_request(Err(PredictError::Validation("Item MRP must be a number.")));
        store.apply_preset(find_preset("preset_2").unwrap());
        assert_eq!(store.request(), &RequestState::Idle);
        assert_eq!(store.features().item_identifier, "GR01");
    }
}

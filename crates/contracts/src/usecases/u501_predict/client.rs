use super::error::PredictError;
use super::request::PredictRequest;
use super::response::{interpret_predict_response, PredictionResult};
use crate::domain::a001_feature_set::{validate, FeatureSet};
use crate::shared::config::ClientConfig;
use async_trait::async_trait;
use serde_json::Value;
use std::rc::Rc;

pub const BACKEND_NOT_REACHABLE: &str = "Backend not reachable";

/// Status and full body text of an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Minimal HTTP seam. The browser build plugs in `fetch`; tests use an
/// in-memory double. `Err` carries the transport's own message.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse, String>;
    async fn get(&self, url: &str) -> Result<RawResponse, String>;
}

/// Decorative hook fired after a successful prediction. Errors are ignored.
pub type SuccessEffect = Rc<dyn Fn() -> Result<(), String>>;

/// Prediction Client
///
/// Stateless between calls: every `predict` is an independent request with
/// no queueing, deduplication, retry or timeout of its own.
pub struct PredictionClient<T: HttpTransport> {
    config: ClientConfig,
    transport: T,
    on_success: Option<SuccessEffect>,
}

impl<T: HttpTransport> PredictionClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            on_success: None,
        }
    }

    pub fn with_success_effect(mut self, effect: SuccessEffect) -> Self {
        self.on_success = Some(effect);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn predict(&self, features: &FeatureSet) -> Result<PredictionResult, PredictError> {
        if let Some(message) = validate(features) {
            log::debug!("predict rejected before sending: {}", message);
            return Err(PredictError::Validation(message));
        }

        let body = PredictRequest::new(features)
            .to_json()
            .map_err(|e| PredictError::Transport(format!("Failed to serialize request: {}", e)))?;

        let url = self.config.predict_url();
        log::debug!("POST {} item={}", url, features.item_identifier);

        let response = self
            .transport
            .post_json(&url, body)
            .await
            .map_err(|e| {
                log::warn!("predict transport error: {}", e);
                PredictError::Transport(e)
            })?;

        match interpret_predict_response(response.status, &response.body) {
            Ok(result) => {
                log::info!(
                    "prediction received: status={} sales={:?} price={:?}",
                    response.status,
                    result.predicted_sales(),
                    result.dynamic_price()
                );
                self.fire_success_effect();
                Ok(result)
            }
            Err(e) => {
                log::warn!("prediction failed: status={} error={}", response.status, e);
                Err(e)
            }
        }
    }

    /// Liveness probe. Any failure collapses into [`BACKEND_NOT_REACHABLE`];
    /// the status code is not inspected.
    pub async fn check_health(&self) -> Result<Value, PredictError> {
        let url = self.config.health_url();
        let response = self.transport.get(&url).await.map_err(|e| {
            log::debug!("health check failed: {}", e);
            PredictError::Transport(BACKEND_NOT_REACHABLE.to_string())
        })?;
        serde_json::from_str(&response.body)
            .map_err(|_| PredictError::Transport(BACKEND_NOT_REACHABLE.to_string()))
    }

    fn fire_success_effect(&self) {
        if let Some(effect) = &self.on_success {
            if let Err(e) = effect() {
                log::debug!("success effect skipped: {}", e);
            }
        }
    }
}

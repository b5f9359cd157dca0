//! API utilities for talking to the prediction service
//!
//! Provides the client configuration and the browser `fetch` transport.

use async_trait::async_trait;
use contracts::shared::config::ClientConfig;
use contracts::usecases::u501_predict::{HttpTransport, PredictionClient, RawResponse};
use gloo_net::http::Request;
use std::rc::Rc;

/// Client configuration for this build.
///
/// The base URL can be overridden at build time with `PRICING_API_BASE`,
/// otherwise the local development service is used.
///
/// # Example
/// ```bash
/// PRICING_API_BASE=https://pricing.example.com trunk build --release
/// ```
pub fn client_config() -> ClientConfig {
    ClientConfig::from_override(option_env!("PRICING_API_BASE"))
}

/// Build a prediction client for one request.
pub fn prediction_client(config: ClientConfig) -> PredictionClient<GlooTransport> {
    PredictionClient::new(config, GlooTransport)
        .with_success_effect(Rc::new(crate::shared::effects::fire_confetti))
}

/// `fetch`-backed transport
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse, String> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| format!("Failed to build request: {}", e))?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        read_response(response).await
    }

    async fn get(&self, url: &str) -> Result<RawResponse, String> {
        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| e.to_string())?;

        read_response(response).await
    }
}

async fn read_response(response: gloo_net::http::Response) -> Result<RawResponse, String> {
    let status = response.status();
    let body = response.text().await.map_err(|e| e.to_string())?;
    Ok(RawResponse { status, body })
}

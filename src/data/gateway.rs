use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::domain::weather::{CurrentPayload, ForecastPayload};

const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:8788";

/// Client side of the gateway contract: `GET {base}/api/{category}?city=`.
/// Provider-reported failures come back as data (the payload's `cod`); only
/// transport-level trouble surfaces as `Err`.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl Default for GatewayClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GatewayClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_GATEWAY_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    pub async fn fetch_current(&self, city: &str) -> Result<CurrentPayload> {
        self.fetch("weather", city).await
    }

    pub async fn fetch_forecast(&self, city: &str) -> Result<ForecastPayload> {
        self.fetch("forecast", city).await
    }

    async fn fetch<T: DeserializeOwned>(&self, category: &str, city: &str) -> Result<T> {
        let url = format!("{}/api/{category}", self.base_url);

        // Error statuses still carry a decodable body; the embedded `cod`
        // is what the caller branches on, so no error_for_status here.
        let response = self
            .client
            .get(&url)
            .query(&[("city", city)])
            .send()
            .await
            .with_context(|| format!("{category} request failed"))?;

        response
            .json()
            .await
            .with_context(|| format!("failed to parse {category} payload"))
    }
}

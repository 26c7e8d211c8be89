pub mod error;

use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use serde_json::Value;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::gateway::error::GatewayError;

const DEFAULT_PROVIDER_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Environment variable holding the provider credential. Read once at
/// startup; never accepted on the command line or echoed in responses.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

#[derive(Debug, Clone)]
pub struct GatewayState {
    client: reqwest::Client,
    provider_url: String,
    api_key: Option<String>,
}

impl GatewayState {
    pub fn new(provider_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            provider_url: provider_url.into(),
            api_key: api_key.filter(|key| !key.is_empty()),
        }
    }

    pub fn from_env(provider_url: Option<String>) -> Self {
        Self::new(
            provider_url.unwrap_or_else(|| DEFAULT_PROVIDER_URL.to_string()),
            std::env::var(API_KEY_ENV).ok(),
        )
    }
}

pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/api/{category}", get(proxy_weather))
        .with_state(state)
}

/// Binds and serves the gateway until ctrl-c.
pub async fn serve(bind: &str, state: GatewayState) -> Result<()> {
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    info!("gateway listening on http://{bind}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("gateway server error")?;

    info!("gateway shut down");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

#[derive(Debug, Deserialize)]
struct WeatherQuery {
    city: Option<String>,
}

/// `GET /api/{category}?city={name}` — validates the inputs, forwards the
/// request to the provider with the server-held credential, and relays the
/// provider's answer.
async fn proxy_weather(
    State(state): State<GatewayState>,
    Path(category): Path<String>,
    Query(query): Query<WeatherQuery>,
) -> Result<impl IntoResponse, GatewayError> {
    let city = query.city.as_deref().map(str::trim).unwrap_or_default();
    if city.is_empty() {
        return Err(GatewayError::BadRequest("city is required".to_string()));
    }
    if !matches!(category.as_str(), "weather" | "forecast") {
        return Err(GatewayError::BadRequest(format!(
            "unknown category: {category}"
        )));
    }
    let Some(api_key) = state.api_key.as_deref() else {
        return Err(GatewayError::BadRequest(
            "server API key is not configured".to_string(),
        ));
    };

    let url = format!("{}/{category}", state.provider_url);
    let response = state
        .client
        .get(&url)
        .query(&[("q", city), ("appid", api_key), ("units", "metric")])
        .send()
        .await
        .map_err(|err| {
            warn!(%category, city, "provider request failed: {err}");
            GatewayError::Upstream
        })?;

    let http_status = response.status();
    let body: Value = response.json().await.map_err(|err| {
        warn!(%category, city, "undecodable provider body: {err}");
        GatewayError::Upstream
    })?;

    if provider_cod(&body) != Some(200) {
        let status = provider_cod(&body)
            .and_then(|cod| StatusCode::from_u16(cod).ok())
            .unwrap_or(http_status);
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("provider rejected the request")
            .to_string();
        info!(%category, city, status = status.as_u16(), "relaying provider error");
        return Err(GatewayError::Provider { status, message });
    }

    info!(%category, city, "relaying provider payload");
    Ok((StatusCode::OK, Json(body)))
}

/// The provider's embedded result code; a number on the current-conditions
/// resource, a string on forecast and on errors.
fn provider_cod(body: &Value) -> Option<u16> {
    match body.get("cod")? {
        Value::Number(value) => value.as_u64().and_then(|n| u16::try_from(n).ok()),
        Value::String(value) => value.parse().ok(),
        _ => None,
    }
}

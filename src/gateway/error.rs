use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Fixed body for anything transport-shaped, so credentials and raw client
/// errors never reach the caller.
pub const UPSTREAM_ERROR_MESSAGE: &str = "Error fetching weather data";

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Missing or invalid request input, including an unconfigured server
    /// credential.
    #[error("{0}")]
    BadRequest(String),
    /// The provider answered with a non-success result; relayed verbatim.
    #[error("{message}")]
    Provider { status: StatusCode, message: String },
    /// Network failure, timeout, or an undecodable provider body.
    #[error("{UPSTREAM_ERROR_MESSAGE}")]
    Upstream,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            GatewayError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            GatewayError::Provider { status, message } => (status, message),
            GatewayError::Upstream => (
                StatusCode::INTERNAL_SERVER_ERROR,
                UPSTREAM_ERROR_MESSAGE.to_string(),
            ),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

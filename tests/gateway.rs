mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;
use skygaze::gateway::{GatewayState, router};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn test_server(provider_url: &str, api_key: Option<&str>) -> TestServer {
    let state = GatewayState::new(provider_url, api_key.map(str::to_string));
    TestServer::new(router(state)).expect("test server")
}

#[tokio::test]
async fn relays_provider_payload_with_credential_attached() {
    let provider = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "London"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::current_body("London", 10.6, 55.0, 804, 5.0)),
        )
        .expect(1)
        .mount(&provider)
        .await;

    let server = test_server(&provider.uri(), Some("test-key"));
    let response = server.get("/api/weather").add_query_param("city", "London").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["name"], "London");
    assert_eq!(body["cod"], 200);
}

#[tokio::test]
async fn relays_provider_not_found_verbatim() {
    let provider = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(common::not_found_body()))
        .mount(&provider)
        .await;

    let server = test_server(&provider.uri(), Some("test-key"));
    let response = server.get("/api/weather").add_query_param("city", "Atlantis").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "city not found");
}

#[tokio::test]
async fn rejects_missing_or_blank_city() {
    let server = test_server("http://127.0.0.1:9", Some("test-key"));

    let response = server.get("/api/weather").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = server.get("/api/weather").add_query_param("city", "   ").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rejects_unknown_category() {
    let server = test_server("http://127.0.0.1:9", Some("test-key"));

    let response = server.get("/api/alerts").add_query_param("city", "London").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "unknown category: alerts");
}

#[tokio::test]
async fn rejects_when_credential_is_missing() {
    let server = test_server("http://127.0.0.1:9", None);

    let response = server.get("/api/weather").add_query_param("city", "London").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "server API key is not configured");
}

#[tokio::test]
async fn transport_failure_collapses_to_fixed_500() {
    // Nothing listens on the discard port, so the outbound call fails at
    // the transport level.
    let server = test_server("http://127.0.0.1:9", Some("test-key"));

    let response = server.get("/api/weather").add_query_param("city", "London").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Error fetching weather data");
}

#[tokio::test]
async fn malformed_provider_body_collapses_to_fixed_500() {
    let provider = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "text/plain"))
        .mount(&provider)
        .await;

    let server = test_server(&provider.uri(), Some("test-key"));
    let response = server.get("/api/forecast").add_query_param("city", "London").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Error fetching weather data");
}

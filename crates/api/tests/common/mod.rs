//! Shared helpers for the HTTP integration tests.
//!
//! The app under test is wired against in-memory repositories, so every test
//! gets an isolated world without needing a database.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use lineup_api::config::ServerConfig;
use lineup_api::router::build_app_router;
use lineup_api::state::{AppState, Services};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over in-memory repositories.
///
/// Uses the same router construction as `main.rs`, so tests exercise the
/// production middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery).
pub fn build_test_app() -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        services: Services::in_memory(),
    };
    build_app_router(state, &config)
}

/// Send a GET request to `uri`.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request to `uri`.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a customer via the API and return its JSON representation.
pub async fn create_customer(app: Router, name: &str, email: &str, password: &str) -> serde_json::Value {
    let response = post_json(
        app,
        "/api/customers",
        serde_json::json!({
            "name": name,
            "email": email,
            "password": password,
            "role": "CUSTOMER",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Create a shop via the API and return its JSON representation.
pub async fn create_shop(app: Router, name: &str, category: &str) -> serde_json::Value {
    let response = post_json(
        app,
        "/api/shops",
        serde_json::json!({
            "vendorId": "vendor-1",
            "name": name,
            "category": category,
            "openingTime": "09:00",
            "closingTime": "18:00",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Add a service line to a shop via the API and return its JSON representation.
pub async fn create_service_line(app: Router, shop_id: &str, name: &str) -> serde_json::Value {
    let response = post_json(
        app,
        &format!("/api/shops/{shop_id}/service-lines"),
        serde_json::json!({
            "name": name,
            "isActive": true,
            "slotDuration": 15,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

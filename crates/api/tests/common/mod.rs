use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tokio::sync::RwLock;
use tower::ServiceExt;

use generalis_api::config::ServerConfig;
use generalis_api::router::build_app_router;
use generalis_api::state::{AdminState, AppState};
use generalis_captions::{CaptionClient, CaptionConfig};
use generalis_core::store::{ContentGateway, MemoryStore};

/// Build a test `ServerConfig` with safe defaults.
///
/// The caption service points at a port nothing listens on, so caption
/// calls fail fast and resolve to their documented fallbacks.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        admin_secret: "1234".to_string(),
        captions: CaptionConfig {
            api_url: "http://127.0.0.1:9".to_string(),
            api_key: "test-key".to_string(),
            model: "gemini-2.5-flash".to_string(),
        },
    }
}

/// Build the full application router over an in-process content store.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack that production uses.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    let config = test_config();

    let state = AppState {
        config: Arc::new(config.clone()),
        gateway: ContentGateway::new(store),
        captions: Arc::new(CaptionClient::new(config.captions.clone())),
        admin: Arc::new(RwLock::new(AdminState::new(&config.admin_secret))),
    };

    build_app_router(state, &config)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
    .expect("request should not fail")
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request should build"),
    )
    .await
    .expect("request should not fail")
}

/// Issue a POST request with an empty body against the app.
pub async fn post(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
    .expect("request should not fail")
}

/// Issue a DELETE request against the app.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
    .expect("request should not fail")
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Unlock the editing panel with the test secret.
pub async fn unlock(app: &Router) {
    let response = post_json(
        app.clone(),
        "/api/v1/admin/unlock",
        serde_json::json!({ "secret": "1234" }),
    )
    .await;
    assert!(
        response.status().is_success(),
        "unlock with the configured secret should succeed"
    );
}

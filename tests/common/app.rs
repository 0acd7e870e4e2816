//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use colormapper::models::AppConfig;
use colormapper::server::{build_router, AppState};
use colormapper::services::{AcceptAllModerator, InMemoryStore, Moderator};
use oklch_map::ColorEntry;

use super::fixtures::ADMIN_TOKEN;

/// Test application with router and direct access to services
pub struct TestApp {
    router: axum::Router,
    pub store: Arc<InMemoryStore>,
}

impl TestApp {
    /// Create an empty test application that accepts every name
    pub fn new() -> Self {
        Self::with_entries(Vec::new())
    }

    /// Create a test application holding `entries`
    pub fn with_entries(entries: Vec<ColorEntry>) -> Self {
        Self::with_moderator(entries, Arc::new(AcceptAllModerator))
    }

    /// Create a test application with a custom moderator
    pub fn with_moderator(entries: Vec<ColorEntry>, moderator: Arc<dyn Moderator>) -> Self {
        let state = Self::create_state(entries, moderator);

        // Keep references for test assertions
        let store = state.store.clone();

        // Build router using shared server module (same as production)
        let router = build_router(state);

        Self { router, store }
    }

    /// Create application state for custom router configuration
    pub fn create_state(entries: Vec<ColorEntry>, moderator: Arc<dyn Moderator>) -> AppState {
        let config = AppConfig {
            seed_when_empty: false,
            admin_token: Some(ADMIN_TOKEN.to_string()),
            ..Default::default()
        };
        AppState::new(config, Arc::new(InMemoryStore::with_entries(entries)), moderator)
            .expect("default test config is valid")
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(
        &self,
        path: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> TestResponse {
        let mut builder = Request::post(path).header("Content-Type", "application/json");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        self.request(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Submit a name for a color and return the parsed response
    pub async fn submit(&self, l: f64, c: f64, h: f64, name: &str) -> serde_json::Value {
        let body = serde_json::json!({ "color": { "l": l, "c": c, "h": h }, "name": name });
        let response = self.post_json("/api/entries", &[], &body.to_string()).await;
        assert_eq!(response.status, StatusCode::OK, "Body: {}", response.text());
        response.json()
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

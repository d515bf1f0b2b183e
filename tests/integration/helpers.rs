//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use forumapi_core::config::AppConfig;

/// Access key used by every test app.
pub const ACCESS_KEY: &str = "integration-access-key";
/// Refresh key used by every test app.
pub const REFRESH_KEY: &str = "integration-refresh-key";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application backed by the in-memory stores
    pub async fn new() -> Self {
        let config = AppConfig::from_toml(&format!(
            r#"
            [database]
            provider = "memory"

            [auth]
            access_token_key = "{ACCESS_KEY}"
            refresh_token_key = "{REFRESH_KEY}"
            "#
        ))
        .expect("Failed to parse test config");

        let state = forumapi_api::build_state(config.clone())
            .await
            .expect("Failed to build app state");

        Self {
            router: forumapi_api::build_router(state),
            config,
        }
    }

    /// Register a user through `POST /users`
    pub async fn create_user(&self, username: &str, password: &str, fullname: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/users",
                Some(json!({
                    "username": username,
                    "password": password,
                    "fullname": fullname,
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"]["addedUser"].clone()
    }

    /// Log in and return `(access_token, refresh_token)`
    pub async fn login(&self, username: &str, password: &str) -> (String, String) {
        let response = self
            .request(
                "POST",
                "/authentications",
                Some(json!({ "username": username, "password": password })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);

        let data = &response.body["data"];
        (
            data["accessToken"].as_str().unwrap().to_string(),
            data["refreshToken"].as_str().unwrap().to_string(),
        )
    }

    /// Send a JSON request through the router
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        self.raw_request(method, path, body_str).await
    }

    /// Send a request with an arbitrary body string
    pub async fn raw_request(&self, method: &str, path: &str, body: String) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

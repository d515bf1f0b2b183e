//! Integration tests for the authentication flow.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use forumapi_auth::JwtTokenManager;
use forumapi_core::config::AuthConfig;
use forumapi_core::traits::TokenManager;
use forumapi_core::types::TokenPayload;

use helpers::TestApp;

async fn app_with_dicoding() -> TestApp {
    let app = TestApp::new().await;
    app.create_user("dicoding", "secret", "Dicoding Indonesia")
        .await;
    app
}

fn app_token_manager(app: &TestApp) -> JwtTokenManager {
    JwtTokenManager::new(&app.config.auth)
}

#[tokio::test]
async fn test_login_success() {
    let app = app_with_dicoding().await;

    let response = app
        .request(
            "POST",
            "/authentications",
            Some(json!({ "username": "dicoding", "password": "secret" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["status"], "success");
    assert!(response.body["data"]["accessToken"].is_string());
    assert!(response.body["data"]["refreshToken"].is_string());
}

#[tokio::test]
async fn test_login_access_token_carries_username() {
    let app = app_with_dicoding().await;
    let (access, _) = app.login("dicoding", "secret").await;

    let payload = app_token_manager(&app).decode_payload(&access).unwrap();
    assert_eq!(payload, TokenPayload::new("dicoding"));
}

#[tokio::test]
async fn test_login_missing_property() {
    let app = app_with_dicoding().await;

    let response = app
        .request("POST", "/authentications", Some(json!({ "username": "dicoding" })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], "fail");
    assert_eq!(response.body["message"], "Username and password are required");
}

#[tokio::test]
async fn test_login_wrong_type() {
    let app = app_with_dicoding().await;

    let response = app
        .request(
            "POST",
            "/authentications",
            Some(json!({ "username": 123, "password": "secret" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Username and password must be strings");
}

#[tokio::test]
async fn test_login_without_body() {
    let app = app_with_dicoding().await;

    let response = app.request("POST", "/authentications", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], "fail");
}

#[tokio::test]
async fn test_login_malformed_json() {
    let app = app_with_dicoding().await;

    let response = app
        .raw_request("POST", "/authentications", "{\"username\":".to_string())
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], "fail");
}

#[tokio::test]
async fn test_unknown_user_and_wrong_password_look_the_same() {
    let app = app_with_dicoding().await;

    let wrong_password = app
        .request(
            "POST",
            "/authentications",
            Some(json!({ "username": "dicoding", "password": "nope" })),
        )
        .await;
    let unknown_user = app
        .request(
            "POST",
            "/authentications",
            Some(json!({ "username": "nobody", "password": "secret" })),
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_user.body);
}

#[tokio::test]
async fn test_refresh_success() {
    let app = app_with_dicoding().await;
    let (_, refresh) = app.login("dicoding", "secret").await;

    let response = app
        .request(
            "PUT",
            "/authentications",
            Some(json!({ "refreshToken": refresh })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let access = response.body["data"]["accessToken"].as_str().unwrap();
    assert_eq!(
        app_token_manager(&app).decode_payload(access).unwrap(),
        TokenPayload::new("dicoding")
    );
}

#[tokio::test]
async fn test_refresh_missing_token() {
    let app = TestApp::new().await;

    let response = app.request("PUT", "/authentications", Some(json!({}))).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Refresh token is required");
}

#[tokio::test]
async fn test_refresh_token_wrong_type() {
    let app = TestApp::new().await;

    let response = app
        .request("PUT", "/authentications", Some(json!({ "refreshToken": 1 })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Refresh token must be a string");
}

#[tokio::test]
async fn test_refresh_invalid_signature() {
    let app = app_with_dicoding().await;
    let forged = JwtTokenManager::new(&AuthConfig {
        refresh_token_key: "not-the-server-key".to_string(),
        ..app.config.auth.clone()
    })
    .create_refresh_token(&TokenPayload::new("dicoding"))
    .unwrap();

    let response = app
        .request(
            "PUT",
            "/authentications",
            Some(json!({ "refreshToken": forged })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Refresh token is not valid");
}

#[tokio::test]
async fn test_refresh_unregistered_token() {
    let app = app_with_dicoding().await;
    let token = app_token_manager(&app)
        .create_refresh_token(&TokenPayload::new("dicoding"))
        .unwrap();

    let response = app
        .request(
            "PUT",
            "/authentications",
            Some(json!({ "refreshToken": token })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "Refresh token is not registered in the database"
    );
}

#[tokio::test]
async fn test_logout_success() {
    let app = app_with_dicoding().await;
    let (_, refresh) = app.login("dicoding", "secret").await;

    let response = app
        .request(
            "DELETE",
            "/authentications",
            Some(json!({ "refreshToken": refresh })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "status": "success" }));
}

#[tokio::test]
async fn test_logout_twice_fails() {
    let app = app_with_dicoding().await;
    let (_, refresh) = app.login("dicoding", "secret").await;
    let body = json!({ "refreshToken": refresh });

    let first = app
        .request("DELETE", "/authentications", Some(body.clone()))
        .await;
    let second = app.request("DELETE", "/authentications", Some(body)).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.body["status"], "fail");
}

#[tokio::test]
async fn test_full_session_scenario() {
    let app = app_with_dicoding().await;
    let (_, refresh) = app.login("dicoding", "secret").await;
    let body = json!({ "refreshToken": refresh });

    let refreshed = app
        .request("PUT", "/authentications", Some(body.clone()))
        .await;
    assert_eq!(refreshed.status, StatusCode::OK);

    let logout = app
        .request("DELETE", "/authentications", Some(body.clone()))
        .await;
    assert_eq!(logout.status, StatusCode::OK);

    let after_logout = app.request("PUT", "/authentications", Some(body)).await;
    assert_eq!(after_logout.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        after_logout.body["message"],
        "Refresh token is not registered in the database"
    );
}

#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/threads", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body,
        json!({ "status": "fail", "message": "Route not found" })
    );
}

#[tokio::test]
async fn test_health_reports_memory_store() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["database"], "memory");
}

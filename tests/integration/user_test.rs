//! Integration tests for user registration.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;

fn dicoding() -> serde_json::Value {
    json!({
        "username": "dicoding",
        "password": "secret",
        "fullname": "Dicoding Indonesia",
    })
}

#[tokio::test]
async fn test_register_user() {
    let app = TestApp::new().await;

    let response = app.request("POST", "/users", Some(dicoding())).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["status"], "success");
    let added = &response.body["data"]["addedUser"];
    assert!(added["id"].is_string());
    assert_eq!(added["username"], "dicoding");
    assert_eq!(added["fullname"], "Dicoding Indonesia");
    assert!(added.get("password").is_none());
}

#[tokio::test]
async fn test_register_missing_property() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/users",
            Some(json!({ "fullname": "Dicoding Indonesia", "password": "secret" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], "fail");
    assert!(
        response.body["message"]
            .as_str()
            .unwrap()
            .contains("required property is missing")
    );
}

#[tokio::test]
async fn test_register_wrong_type() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/users",
            Some(json!({ "username": "dicoding", "password": "secret", "fullname": ["Dicoding"] })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        response.body["message"]
            .as_str()
            .unwrap()
            .contains("wrong data type")
    );
}

#[tokio::test]
async fn test_register_username_too_long() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/users",
            Some(json!({
                "username": "dicoding".repeat(7),
                "password": "secret",
                "fullname": "Dicoding Indonesia",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        response.body["message"]
            .as_str()
            .unwrap()
            .contains("exceeds 50 characters")
    );
}

#[tokio::test]
async fn test_register_username_forbidden_characters() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/users",
            Some(json!({
                "username": "dicoding indonesia",
                "password": "secret",
                "fullname": "Dicoding Indonesia",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        response.body["message"]
            .as_str()
            .unwrap()
            .contains("forbidden characters")
    );
}

#[tokio::test]
async fn test_register_taken_username() {
    let app = TestApp::new().await;
    app.create_user("dicoding", "secret", "Dicoding Indonesia")
        .await;

    let response = app.request("POST", "/users", Some(dicoding())).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Username is not available");
}

#[tokio::test]
async fn test_registered_user_can_log_in() {
    let app = TestApp::new().await;
    app.create_user("dicoding", "secret", "Dicoding Indonesia")
        .await;

    let (access, refresh) = app.login("dicoding", "secret").await;

    assert_ne!(access, refresh);
}

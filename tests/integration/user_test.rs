//! Integration tests for registration, profile, and system endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_returns_id_and_email() {
    let app = helpers::TestApp::new().await;

    let response = app.register("bob@dylan.com", "toto1234!").await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["email"], "bob@dylan.com");
    assert!(response.body["id"].is_string());
    assert!(response.body.get("password").is_none());
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("POST", "/users", Some(json!({ "password": "x" })), &[])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Missing email");

    let response = app
        .request("POST", "/users", Some(json!({ "email": "a@b.c" })), &[])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Missing password");
}

#[tokio::test]
async fn test_register_unreadable_body() {
    let app = helpers::TestApp::new().await;

    let response = app.request("POST", "/users", None, &[]).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Missing email");
}

#[tokio::test]
async fn test_register_mistyped_field_keeps_the_rest() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/users",
            Some(json!({ "email": "bob@dylan.com", "password": 1234 })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Missing password");

    let response = app
        .request(
            "POST",
            "/users",
            Some(json!({ "email": 5, "password": "secret" })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Missing email");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = helpers::TestApp::new().await;
    app.register("bob@dylan.com", "toto1234!").await;

    let response = app.register("bob@dylan.com", "other").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Error: User exists");
}

#[tokio::test]
async fn test_me_returns_profile() {
    let app = helpers::TestApp::new().await;
    let registered = app.register("bob@dylan.com", "secret").await;
    let connected = app.connect("bob@dylan.com", "secret").await;
    let token = connected.body["token"].as_str().expect("token");

    let response = app.request_as("GET", "/users/me", None, token).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], registered.body["id"]);
    assert_eq!(response.body["email"], "bob@dylan.com");
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/users/me", None, &[]).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request_as("GET", "/users/me", None, "4b9f5d5e-0000-4000-8000-000000000000")
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Unauthorized");
}

#[tokio::test]
async fn test_status_reports_stores() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/status", None, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "redis": true, "db": true }));
}

#[tokio::test]
async fn test_stats_counts_records() {
    let app = helpers::TestApp::new().await;
    let token = app.login("bob@dylan.com").await;
    app.login("alice@example.com").await;
    app.folder(&token, "docs").await;
    app.upload(&token, "a.txt", b"hello", false, json!(0)).await;

    let response = app.request("GET", "/stats", None, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "users": 2, "files": 2 }));
}

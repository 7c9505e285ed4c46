//! Integration tests for the connect/disconnect flow.

mod helpers;

use axum::http::StatusCode;
use chrono::Duration;

#[tokio::test]
async fn test_connect_issues_token() {
    let app = helpers::TestApp::new().await;
    app.register("bob@dylan.com", "toto1234!").await;

    let response = app.connect("bob@dylan.com", "toto1234!").await;

    assert_eq!(response.status, StatusCode::OK);
    let token = response.body["token"].as_str().expect("token");
    assert!(uuid::Uuid::parse_str(token).is_ok());
}

#[tokio::test]
async fn test_connect_wrong_password() {
    let app = helpers::TestApp::new().await;
    app.register("bob@dylan.com", "toto1234!").await;

    let response = app.connect("bob@dylan.com", "wrong").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Unauthorized");
}

#[tokio::test]
async fn test_connect_unknown_email() {
    let app = helpers::TestApp::new().await;

    let response = app.connect("nobody@example.com", "whatever").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_connect_malformed_header() {
    let app = helpers::TestApp::new().await;

    for header in ["Basic !!!notbase64", "Bearer abc", "Basic"] {
        let response = app
            .request("GET", "/connect", None, &[("Authorization", header)])
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "header {header:?}");
    }

    let response = app.request("GET", "/connect", None, &[]).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_password_with_colon() {
    let app = helpers::TestApp::new().await;
    app.register("colon@example.com", "a:b:c").await;

    let response = app.connect("colon@example.com", "a:b:c").await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_disconnect_revokes_token() {
    let app = helpers::TestApp::new().await;
    let token = app.login("bob@dylan.com").await;

    let me = app.request_as("GET", "/users/me", None, &token).await;
    assert_eq!(me.status, StatusCode::OK);

    let response = app.request_as("GET", "/disconnect", None, &token).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.raw.is_empty());

    let me = app.request_as("GET", "/users/me", None, &token).await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);

    let again = app.request_as("GET", "/disconnect", None, &token).await;
    assert_eq!(again.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_disconnect_without_token() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/disconnect", None, &[]).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Unauthorized");
}

#[tokio::test]
async fn test_token_expires_after_a_day() {
    let app = helpers::TestApp::new().await;
    let token = app.login("bob@dylan.com").await;

    app.clock.advance(Duration::hours(23));
    let me = app.request_as("GET", "/users/me", None, &token).await;
    assert_eq!(me.status, StatusCode::OK);

    app.clock.advance(Duration::hours(2));
    let me = app.request_as("GET", "/users/me", None, &token).await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_each_connect_issues_a_new_token() {
    let app = helpers::TestApp::new().await;
    let first = app.login("bob@dylan.com").await;

    let second = app.connect("bob@dylan.com", "secret").await;
    let second = second.body["token"].as_str().expect("token").to_string();
    assert_ne!(first, second);

    app.request_as("GET", "/disconnect", None, &first).await;
    let me = app.request_as("GET", "/users/me", None, &second).await;
    assert_eq!(me.status, StatusCode::OK);
}

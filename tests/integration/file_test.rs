//! Integration tests for file records and content.

mod helpers;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_upload_returns_record_without_local_path() {
    let app = helpers::TestApp::new().await;
    let token = app.login("bob@dylan.com").await;

    let response = app.upload(&token, "hello.txt", b"Hello Webstack!", false, json!(0)).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["name"], "hello.txt");
    assert_eq!(response.body["type"], "file");
    assert_eq!(response.body["isPublic"], false);
    assert_eq!(response.body["parentId"], 0);
    assert!(response.body["id"].is_string());
    assert!(response.body["userId"].is_string());
    assert!(response.body.get("localPath").is_none());
    assert_eq!(app.blob_count(), 1);
}

#[tokio::test]
async fn test_upload_requires_token() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/files",
            Some(json!({ "name": "x", "type": "folder" })),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Unauthorized");
}

#[tokio::test]
async fn test_upload_validation_order() {
    let app = helpers::TestApp::new().await;
    let token = app.login("bob@dylan.com").await;

    let cases = [
        (json!({ "type": "file", "data": "aGk=" }), "Missing name"),
        (json!({ "name": "a", "type": "video", "data": "aGk=" }), "Missing type"),
        (json!({ "name": "a" }), "Missing type"),
        (json!({ "name": "a", "type": "image" }), "Missing data"),
        (json!({ "name": "a", "type": "file", "data": "%%%" }), "Invalid data"),
    ];

    for (body, expected) in cases {
        let response = app.request_as("POST", "/files", Some(body.clone()), &token).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(response.body["error"], expected, "body {body}");
    }
    assert_eq!(app.blob_count(), 0);
}

#[tokio::test]
async fn test_is_public_follows_truthiness() {
    let app = helpers::TestApp::new().await;
    let token = app.login("bob@dylan.com").await;

    let response = app
        .request_as(
            "POST",
            "/files",
            Some(json!({ "name": "docs", "type": "folder", "isPublic": "true" })),
            &token,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["name"], "docs");
    assert_eq!(response.body["isPublic"], true);

    let response = app
        .request_as(
            "POST",
            "/files",
            Some(json!({
                "name": "a.txt",
                "type": "file",
                "isPublic": 1,
                "data": "aGk=",
            })),
            &token,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["isPublic"], true);

    let response = app
        .request_as(
            "POST",
            "/files",
            Some(json!({ "name": "b.txt", "type": "file", "isPublic": 0, "data": "aGk=" })),
            &token,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["isPublic"], false);
}

#[tokio::test]
async fn test_upload_without_content_type() {
    let app = helpers::TestApp::new().await;
    let token = app.login("bob@dylan.com").await;

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/files")
        .header("X-Token", token.as_str())
        .body(axum::body::Body::from(r#"{"name":"docs","type":"folder"}"#))
        .expect("request");
    let response = tower::ServiceExt::oneshot(app.router.clone(), request)
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_folder_and_child() {
    let app = helpers::TestApp::new().await;
    let token = app.login("bob@dylan.com").await;

    let folder = app.folder(&token, "images").await;
    assert_eq!(folder.status, StatusCode::CREATED);
    assert_eq!(folder.body["type"], "folder");
    let folder_id = folder.body["id"].clone();

    let child = app.upload(&token, "a.txt", b"abc", false, folder_id.clone()).await;
    assert_eq!(child.status, StatusCode::CREATED);
    assert_eq!(child.body["parentId"], folder_id);

    let listing = app
        .request_as(
            "GET",
            &format!("/files?parentId={}", folder_id.as_str().expect("id")),
            None,
            &token,
        )
        .await;
    assert_eq!(listing.status, StatusCode::OK);
    let items = listing.body.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "a.txt");
}

#[tokio::test]
async fn test_parent_must_be_folder() {
    let app = helpers::TestApp::new().await;
    let token = app.login("bob@dylan.com").await;
    let file = app.upload(&token, "a.txt", b"abc", false, json!(0)).await;

    let response = app
        .upload(&token, "b.txt", b"def", false, file.body["id"].clone())
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Parent is not a folder");
    assert_eq!(app.blob_count(), 1);
}

#[tokio::test]
async fn test_parent_not_found() {
    let app = helpers::TestApp::new().await;
    let token = app.login("bob@dylan.com").await;

    for parent in [
        json!(uuid::Uuid::new_v4().to_string()),
        json!("not-an-id"),
        json!(17),
    ] {
        let response = app.upload(&token, "b.txt", b"def", false, parent.clone()).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "parent {parent}");
        assert_eq!(response.body["error"], "Parent not found", "parent {parent}");
    }
}

#[tokio::test]
async fn test_other_users_private_folder_is_not_a_parent() {
    let app = helpers::TestApp::new().await;
    let bob = app.login("bob@dylan.com").await;
    let alice = app.login("alice@example.com").await;
    let folder = app.folder(&bob, "private").await;

    let response = app
        .upload(&alice, "b.txt", b"def", false, folder.body["id"].clone())
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Parent not found");
}

#[tokio::test]
async fn test_private_file_publish_scenario() {
    let app = helpers::TestApp::new().await;
    let owner = app.login("bob@dylan.com").await;
    let other = app.login("alice@example.com").await;

    let upload = app.upload(&owner, "hello.txt", b"Hello", false, json!(0)).await;
    let id = upload.body["id"].as_str().expect("id").to_string();

    let response = app.request_as("GET", &format!("/files/{id}"), None, &other).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Not found");

    let response = app
        .request_as("GET", &format!("/files/{id}/data"), None, &other)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request_as("PUT", &format!("/files/{id}/publish"), None, &owner)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["isPublic"], true);

    let response = app
        .request_as("GET", &format!("/files/{id}/data"), None, &other)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(&response.raw[..], b"Hello");
    assert_eq!(response.content_type.as_deref(), Some("text/plain"));

    let response = app.request_as("GET", &format!("/files/{id}"), None, &other).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_non_owner_cannot_change_visibility() {
    let app = helpers::TestApp::new().await;
    let owner = app.login("bob@dylan.com").await;
    let other = app.login("alice@example.com").await;
    let upload = app.upload(&owner, "hello.txt", b"Hello", true, json!(0)).await;
    let id = upload.body["id"].as_str().expect("id").to_string();

    let response = app
        .request_as("PUT", &format!("/files/{id}/unpublish"), None, &other)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request_as("GET", &format!("/files/{id}"), None, &owner).await;
    assert_eq!(response.body["isPublic"], true);

    let response = app
        .request_as("PUT", &format!("/files/{id}/unpublish"), None, &owner)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["isPublic"], false);
}

#[tokio::test]
async fn test_folder_has_no_content() {
    let app = helpers::TestApp::new().await;
    let token = app.login("bob@dylan.com").await;
    let folder = app.folder(&token, "docs").await;
    let id = folder.body["id"].as_str().expect("id").to_string();

    let response = app
        .request_as("GET", &format!("/files/{id}/data"), None, &token)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "A folder doesn't have content");
}

#[tokio::test]
async fn test_unparsable_id_is_not_found() {
    let app = helpers::TestApp::new().await;
    let token = app.login("bob@dylan.com").await;

    for path in ["/files/xyz", "/files/xyz/data", "/files/xyz/publish"] {
        let method = if path.ends_with("publish") { "PUT" } else { "GET" };
        let response = app.request_as(method, path, None, &token).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "path {path}");
    }
}

#[tokio::test]
async fn test_list_pages_of_twenty() {
    let app = helpers::TestApp::new().await;
    let token = app.login("bob@dylan.com").await;
    for i in 0..20 {
        let response = app
            .upload(&token, &format!("f{i}.txt"), b"x", false, json!(0))
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let page0 = app.request_as("GET", "/files", None, &token).await;
    let items = page0.body.as_array().expect("array");
    assert_eq!(items.len(), 20);
    assert_eq!(items[0]["name"], "f0.txt");
    assert_eq!(items[19]["name"], "f19.txt");

    let page1 = app.request_as("GET", "/files?page=1", None, &token).await;
    assert_eq!(page1.status, StatusCode::OK);
    assert_eq!(page1.body, Value::Array(Vec::new()));
}

#[tokio::test]
async fn test_list_only_own_records() {
    let app = helpers::TestApp::new().await;
    let bob = app.login("bob@dylan.com").await;
    let alice = app.login("alice@example.com").await;
    app.upload(&bob, "public.txt", b"x", true, json!(0)).await;

    let listing = app.request_as("GET", "/files?parentId=0", None, &alice).await;

    assert_eq!(listing.status, StatusCode::OK);
    assert_eq!(listing.body, json!([]));
}

#[tokio::test]
async fn test_list_with_garbage_parent_is_empty() {
    let app = helpers::TestApp::new().await;
    let token = app.login("bob@dylan.com").await;
    app.upload(&token, "a.txt", b"x", false, json!(0)).await;

    let listing = app
        .request_as("GET", "/files?parentId=garbage&page=abc", None, &token)
        .await;

    assert_eq!(listing.status, StatusCode::OK);
    assert_eq!(listing.body, json!([]));
}

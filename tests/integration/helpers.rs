//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};
use tower::ServiceExt;

use filevault_api::{AppState, build_app};
use filevault_auth::{AuthorizationGuard, PasswordHasher, SessionStore, TokenService};
use filevault_cache::memory::MemoryCacheProvider;
use filevault_core::clock::{Clock, ManualClock};
use filevault_core::config::AppConfig;
use filevault_core::traits::{CacheProvider, DocumentStore, StorageProvider};
use filevault_database::MemoryDocumentStore;
use filevault_database::repositories::{FileRepository, UserRepository};
use filevault_database::store::USERS;
use filevault_service::{AuthService, FileService, SystemService, UserService};
use filevault_storage::LocalStorageProvider;

/// Test application backed by in-memory stores and a temporary blob root.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Clock driving token expiry
    pub clock: ManualClock,
    /// Blob store root
    pub blob_root: tempfile::TempDir,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let config = AppConfig::default();
        let clock = ManualClock::default();
        let shared_clock: Arc<dyn Clock> = Arc::new(clock.clone());
        let blob_root = tempfile::tempdir().expect("Failed to create blob root");

        let documents: Arc<dyn DocumentStore> =
            Arc::new(MemoryDocumentStore::new().with_unique_field(USERS, "email"));
        let cache: Arc<dyn CacheProvider> = Arc::new(MemoryCacheProvider::new(
            &config.cache.memory,
            Arc::clone(&shared_clock),
        ));
        let blobs: Arc<dyn StorageProvider> = Arc::new(
            LocalStorageProvider::with_root(blob_root.path())
                .await
                .expect("Failed to init blob store"),
        );

        let user_repo = Arc::new(UserRepository::new(Arc::clone(&documents)));
        let file_repo = Arc::new(FileRepository::new(Arc::clone(&documents)));

        let hasher = Arc::new(PasswordHasher::new());
        let sessions = Arc::new(SessionStore::new(cache));
        let tokens = Arc::new(TokenService::new(
            Arc::clone(&sessions),
            shared_clock,
            &config.auth,
        ));
        let guard = Arc::new(AuthorizationGuard::new(Arc::clone(&tokens)));

        let state = AppState {
            guard: Arc::clone(&guard),
            user_service: Arc::new(UserService::new(
                Arc::clone(&user_repo),
                Arc::clone(&hasher),
            )),
            auth_service: Arc::new(AuthService::new(
                Arc::clone(&user_repo),
                hasher,
                tokens,
            )),
            file_service: Arc::new(FileService::new(Arc::clone(&file_repo), blobs, guard)),
            system_service: Arc::new(SystemService::new(
                documents, sessions, user_repo, file_repo,
            )),
        };

        Self {
            router: build_app(state, &config.server),
            clock,
            blob_root,
        }
    }

    /// Sends a request with an optional JSON body and optional extra headers.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let raw = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&raw).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            raw,
            content_type,
        }
    }

    /// Sends a request authenticated with `X-Token`.
    pub async fn request_as(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: &str,
    ) -> TestResponse {
        self.request(method, path, body, &[("X-Token", token)]).await
    }

    /// Registers a user and returns the response body.
    pub async fn register(&self, email: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/users",
            Some(json!({ "email": email, "password": password })),
            &[],
        )
        .await
    }

    /// Connects with Basic credentials and returns the raw response.
    pub async fn connect(&self, email: &str, password: &str) -> TestResponse {
        let header = basic_header(email, password);
        self.request("GET", "/connect", None, &[("Authorization", &header)])
            .await
    }

    /// Registers and connects a user, returning the session token.
    pub async fn login(&self, email: &str) -> String {
        let registered = self.register(email, "secret").await;
        assert_eq!(registered.status, StatusCode::CREATED);

        let connected = self.connect(email, "secret").await;
        assert_eq!(connected.status, StatusCode::OK);
        connected.body["token"]
            .as_str()
            .expect("token in connect response")
            .to_string()
    }

    /// Uploads a plain file under the given parent.
    pub async fn upload(
        &self,
        token: &str,
        name: &str,
        content: &[u8],
        is_public: bool,
        parent_id: Value,
    ) -> TestResponse {
        self.request_as(
            "POST",
            "/files",
            Some(json!({
                "name": name,
                "type": "file",
                "isPublic": is_public,
                "parentId": parent_id,
                "data": STANDARD.encode(content),
            })),
            token,
        )
        .await
    }

    /// Creates a folder under the root.
    pub async fn folder(&self, token: &str, name: &str) -> TestResponse {
        self.request_as(
            "POST",
            "/files",
            Some(json!({ "name": name, "type": "folder" })),
            token,
        )
        .await
    }

    /// Number of blobs under the blob root.
    pub fn blob_count(&self) -> usize {
        std::fs::read_dir(self.blob_root.path())
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}

/// Builds an `Authorization: Basic` header value.
pub fn basic_header(email: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{email}:{password}")))
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body, or `Null` when the body is not JSON
    pub body: Value,
    /// Unparsed body
    pub raw: Bytes,
    /// `Content-Type` header, if any
    pub content_type: Option<String>,
}

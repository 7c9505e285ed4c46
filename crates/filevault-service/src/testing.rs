//! Service graph wired to in-memory stores for unit tests.

use std::sync::Arc;

use async_trait::async_trait;

use filevault_auth::acl::AuthorizationGuard;
use filevault_auth::password::PasswordHasher;
use filevault_auth::session::{SessionStore, TokenService};
use filevault_cache::memory::MemoryCacheProvider;
use filevault_core::clock::{Clock, SystemClock};
use filevault_core::config::AuthConfig;
use filevault_core::config::cache::MemoryCacheConfig;
use filevault_core::error::AppError;
use filevault_core::result::AppResult;
use filevault_core::traits::document::Document;
use filevault_core::traits::{CacheProvider, DocumentStore};
use filevault_database::repositories::{FileRepository, UserRepository};
use filevault_database::store::{FILES, MemoryDocumentStore, USERS};
use filevault_entity::user::User;
use filevault_storage::LocalStorageProvider;

use crate::{AuthService, FileService, RegisterRequest, RequestContext, SystemService, UserService};

/// Delegates to an inner store but refuses inserts into the files collection.
#[derive(Debug)]
struct FailingFileInserts(MemoryDocumentStore);

#[async_trait]
impl DocumentStore for FailingFileInserts {
    fn backend(&self) -> &str {
        "failing"
    }
    async fn find_one(&self, collection: &str, filter: &Document) -> AppResult<Option<Document>> {
        self.0.find_one(collection, filter).await
    }
    async fn find(
        &self,
        collection: &str,
        filter: &Document,
        skip: u64,
        limit: u64,
    ) -> AppResult<Vec<Document>> {
        self.0.find(collection, filter, skip, limit).await
    }
    async fn insert_one(&self, collection: &str, document: Document) -> AppResult<String> {
        if collection == FILES {
            return Err(AppError::database("insert refused"));
        }
        self.0.insert_one(collection, document).await
    }
    async fn update_one(
        &self,
        collection: &str,
        filter: &Document,
        patch: &Document,
    ) -> AppResult<u64> {
        self.0.update_one(collection, filter, patch).await
    }
    async fn count(&self, collection: &str) -> AppResult<u64> {
        self.0.count(collection).await
    }
    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

pub(crate) struct Harness {
    pub users: UserService,
    pub auth: AuthService,
    pub files: FileService,
    pub system: SystemService,
    pub tokens: Arc<TokenService>,
    pub store: Arc<dyn DocumentStore>,
    pub blobs: Arc<LocalStorageProvider>,
    dir: tempfile::TempDir,
}

impl Harness {
    pub async fn new() -> Self {
        Self::with_store(Arc::new(
            MemoryDocumentStore::new().with_unique_field(USERS, "email"),
        ))
        .await
    }

    pub async fn with_failing_file_inserts() -> Self {
        Self::with_store(Arc::new(FailingFileInserts(MemoryDocumentStore::new()))).await
    }

    async fn with_store(store: Arc<dyn DocumentStore>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let blobs = Arc::new(LocalStorageProvider::with_root(dir.path()).await.unwrap());

        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let cache: Arc<dyn CacheProvider> = Arc::new(MemoryCacheProvider::new(
            &MemoryCacheConfig::default(),
            clock.clone(),
        ));
        let sessions = Arc::new(SessionStore::new(cache));
        let tokens = Arc::new(TokenService::new(
            sessions.clone(),
            clock,
            &AuthConfig::default(),
        ));
        let guard = Arc::new(AuthorizationGuard::new(tokens.clone()));
        let hasher = Arc::new(PasswordHasher::new());

        let user_repo = Arc::new(UserRepository::new(store.clone()));
        let file_repo = Arc::new(FileRepository::new(store.clone()));

        Self {
            users: UserService::new(user_repo.clone(), hasher.clone()),
            auth: AuthService::new(user_repo.clone(), hasher, tokens.clone()),
            files: FileService::new(file_repo.clone(), blobs.clone(), guard),
            system: SystemService::new(store.clone(), sessions, user_repo, file_repo),
            tokens,
            store,
            blobs,
            dir,
        }
    }

    pub async fn register(&self, email: &str, password: &str) -> User {
        self.users
            .register(RegisterRequest {
                email: Some(email.into()),
                password: Some(password.into()),
            })
            .await
            .unwrap()
    }

    pub async fn context(&self, email: &str) -> RequestContext {
        RequestContext::new(self.register(email, "pw").await.id)
    }

    pub fn blob_count(&self) -> usize {
        std::fs::read_dir(self.dir.path()).unwrap().count()
    }
}

//! FileVault Server
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use filevault_api::{AppState, build_app};
use filevault_auth::{AuthorizationGuard, PasswordHasher, SessionStore, TokenService};
use filevault_cache::CacheManager;
use filevault_core::clock::{Clock, SystemClock};
use filevault_core::config::AppConfig;
use filevault_core::error::AppError;
use filevault_core::traits::{CacheProvider, StorageProvider};
use filevault_database::connect_document_store;
use filevault_database::repositories::{FileRepository, UserRepository};
use filevault_service::{AuthService, FileService, SystemService, UserService};
use filevault_storage::LocalStorageProvider;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `config/` and `FILEVAULT__*` environment variables.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("FILEVAULT_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting FileVault v{}", env!("CARGO_PKG_VERSION"));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // ── Step 1: Stores ───────────────────────────────────────────
    tracing::info!(
        "Initializing document store (provider: {})...",
        config.database.provider
    );
    let documents = connect_document_store(&config.database).await?;

    tracing::info!(
        "Initializing session store (provider: {})...",
        config.cache.provider
    );
    let cache: Arc<dyn CacheProvider> =
        Arc::new(CacheManager::new(&config.cache, Arc::clone(&clock)).await?);

    tracing::info!("Initializing blob store at '{}'...", config.storage.root_path);
    let blobs: Arc<dyn StorageProvider> =
        Arc::new(LocalStorageProvider::new(&config.storage).await?);

    // ── Step 2: Repositories ─────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(Arc::clone(&documents)));
    let file_repo = Arc::new(FileRepository::new(Arc::clone(&documents)));

    // ── Step 3: Auth ─────────────────────────────────────────────
    let hasher = Arc::new(PasswordHasher::new());
    let sessions = Arc::new(SessionStore::new(cache));
    let tokens = Arc::new(TokenService::new(
        Arc::clone(&sessions),
        clock,
        &config.auth,
    ));
    let guard = Arc::new(AuthorizationGuard::new(Arc::clone(&tokens)));

    // ── Step 4: Services ─────────────────────────────────────────
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&hasher),
    ));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        hasher,
        tokens,
    ));
    let file_service = Arc::new(FileService::new(
        Arc::clone(&file_repo),
        blobs,
        Arc::clone(&guard),
    ));
    let system_service = Arc::new(SystemService::new(
        documents,
        sessions,
        user_repo,
        file_repo,
    ));

    // ── Step 5: HTTP server ──────────────────────────────────────
    let state = AppState {
        guard,
        user_service,
        auth_service,
        file_service,
        system_service,
    };
    let app = build_app(state, &config.server);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("FileVault server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("FileVault server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

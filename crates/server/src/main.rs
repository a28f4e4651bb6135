use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront_core::{
    create_authenticator, load_config, validate_config, AdminEditor, Authenticator,
    CatalogStore, Config, FileSeedSource, HttpSeedSource, KeyValueStore, MemoryKeyValueStore,
    SeedSource, SqliteKeyValueStore, StorageBackend,
};
use storefront_server::{api::create_router, state::AppState};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("STOREFRONT_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Auth method: {:?}", config.auth.method);
    info!("Storage backend: {:?}", config.storage.backend);

    // Create authenticator
    let authenticator: Arc<dyn Authenticator> = Arc::from(
        create_authenticator(&config.auth).context("Failed to create authenticator")?,
    );
    info!("Using authenticator: {}", authenticator.method_name());

    let storage = create_storage(&config)?;
    let seed = create_seed_source(&config)?;
    info!("Seed source: {}", seed.describe());

    let store = Arc::new(CatalogStore::new(
        storage,
        seed,
        config.storage.key.clone(),
    ));

    // Open the admin session up front so the seed is written through once
    let (editor, notices) = AdminEditor::open(Arc::clone(&store)).await;
    for notice in &notices {
        warn!("Admin catalog: {}", notice.message);
    }
    info!("Admin editor ready with {} products", editor.products().len());

    // Create app state
    let state = Arc::new(AppState::new(
        config.clone(),
        authenticator,
        store,
        editor,
    ));

    // Create router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

/// Build the key-value store holding the persisted slot.
fn create_storage(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    let quota = config.storage.quota_bytes;
    let storage: Arc<dyn KeyValueStore> = match config.storage.backend {
        StorageBackend::Sqlite => {
            info!("Database path: {:?}", config.storage.path);
            Arc::new(
                SqliteKeyValueStore::new(&config.storage.path)
                    .context("Failed to open catalog database")?
                    .with_quota(quota),
            )
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage; edits are lost on restart");
            match quota {
                Some(quota) => Arc::new(MemoryKeyValueStore::with_quota(quota)),
                None => Arc::new(MemoryKeyValueStore::new()),
            }
        }
    };
    Ok(storage)
}

/// Build the seed source: remote if a URL is configured, else the local file.
fn create_seed_source(config: &Config) -> Result<Arc<dyn SeedSource>> {
    let seed: Arc<dyn SeedSource> = match &config.seed.url {
        Some(url) => Arc::new(
            HttpSeedSource::new(
                url.clone(),
                Duration::from_secs(u64::from(config.seed.timeout_secs)),
            )
            .context("Failed to create seed HTTP client")?,
        ),
        None => Arc::new(FileSeedSource::new(config.seed.path.clone())),
    };
    Ok(seed)
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
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
}

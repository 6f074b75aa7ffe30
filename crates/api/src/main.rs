use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_api::config::{ServerConfig, StoreBackend};
use catalog_api::router::build_app_router;
use catalog_api::state::AppState;
use catalog_core::store::{EntryStore, MemoryStore};
use catalog_db::store::PgEntryStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        backend = ?config.backend,
        "Loaded server configuration"
    );

    // --- Store backend ---
    // A failure here is fatal: the process must not serve requests over a
    // store it could not initialize.
    let store: Arc<dyn EntryStore> = match config.backend {
        StoreBackend::Postgres => {
            let db_config = catalog_db::config::DbConfig::from_env();

            let pool = catalog_db::create_pool(&db_config)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            catalog_db::health_check(&pool)
                .await
                .expect("Database health check failed");

            catalog_db::store::init_schema(&pool)
                .await
                .expect("Failed to create entries table");

            catalog_db::store::seed_if_empty(&pool)
                .await
                .expect("Failed to seed entries table");
            tracing::info!("Entries table ready");

            Arc::new(PgEntryStore::new(pool))
        }
        StoreBackend::Memory => {
            tracing::info!("Using in-memory store with seed entries");
            Arc::new(MemoryStore::seeded())
        }
    };

    // --- App state ---
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // The pool (when present) is dropped here, releasing its connections.
    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}

//! HTTP server initialization and runtime setup.
//!
//! Selects the storage backend, applies migrations and runs the Axum server
//! until a shutdown signal arrives.

use crate::config::Config;
use crate::domain::catalog::Catalog;
use crate::infrastructure::memory::MemoryStore;
use crate::routes::{HttpSettings, app_router};
use crate::state::{AppState, Repositories};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Fallback catalog
/// - PostgreSQL pool (lazy) and migrations, or the in-memory store
/// - Axum HTTP server with graceful shutdown
///
/// The database does not have to be reachable at startup. List endpoints
/// serve the fallback catalog until it is, and migrations keep retrying in
/// the background until they apply.
///
/// # Errors
///
/// Returns an error if:
/// - The database URL cannot be parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let catalog = Arc::new(Catalog::sample());

    let repositories = match &config.database_url {
        Some(url) => {
            let pool = connect_pool(&config, url)?;
            if !migrate_with_retry(&pool, config.db_migrate_attempts).await {
                tokio::spawn(migrate_in_background(pool.clone()));
            }
            Repositories::postgres(Arc::new(pool))
        }
        None => {
            tracing::warn!("No database configured, using in-memory store");
            Repositories::memory(Arc::new(MemoryStore::new()))
        }
    };
    tracing::info!(backend = repositories.backend, "Store ready");

    let settings = HttpSettings::new(&config.client_url, config.body_limit_bytes)
        .context("Invalid CLIENT_URL")?;
    let state = AppState::new(repositories, catalog, config.password_pepper.clone());

    let app = app_router(state, &settings);

    let addr: SocketAddr = config
        .listen_addr()
        .parse()
        .with_context(|| format!("Invalid listen address: {}", config.listen_addr()))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Builds the pool without opening a connection.
pub fn connect_pool(config: &Config, url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_lazy(url)
        .context("Invalid database URL")?;
    Ok(pool)
}

const STARTUP_MAX_DELAY: Duration = Duration::from_secs(5);
const BACKGROUND_MAX_DELAY: Duration = Duration::from_secs(60);

/// Jittered exponential backoff between migration attempts.
fn migration_backoff(max_delay: Duration) -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(2)
        .factor(250)
        .max_delay(max_delay)
        .map(jitter)
}

/// Applies pending migrations, retrying with exponential backoff.
///
/// Returns `false` if every attempt failed. The server keeps running and
/// reads fall back to the built-in catalog.
async fn migrate_with_retry(pool: &PgPool, attempts: usize) -> bool {
    let strategy = migration_backoff(STARTUP_MAX_DELAY).take(attempts.saturating_sub(1));

    let result = Retry::spawn(strategy, || async {
        MIGRATOR.run(pool).await.inspect_err(|e| {
            tracing::warn!(error = %e, "Migration attempt failed");
        })
    })
    .await;

    match result {
        Ok(()) => {
            tracing::info!("Migrations applied");
            true
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                "Migrations not applied, retrying in background with fallback content"
            );
            false
        }
    }
}

/// Keeps retrying migrations until the database accepts them.
async fn migrate_in_background(pool: PgPool) {
    let result = Retry::spawn(migration_backoff(BACKGROUND_MAX_DELAY), || async {
        MIGRATOR.run(&pool).await.inspect_err(|e| {
            tracing::debug!(error = %e, "Background migration attempt failed");
        })
    })
    .await;

    if result.is_ok() {
        tracing::info!("Migrations applied after startup");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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

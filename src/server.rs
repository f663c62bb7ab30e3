//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, service wiring, and the Axum server
//! lifecycle.

use crate::application::services::{AuthService, StaticTokenAuthorizer, UrlService};
use crate::config::Config;
use crate::domain::clock::SystemClock;
use crate::infrastructure::persistence::PgUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Opens the PostgreSQL pool for `config.database_url`, selecting
/// `config.database_name`.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let options = PgConnectOptions::from_str(&config.database_url)
        .context("Invalid DATABASE_URL")?
        .database(&config.database_name);

    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_with(options)
        .await
        .context("Failed to connect to database")
}

/// Wires repositories and services into the shared handler state.
pub fn build_state(pool: PgPool, config: &Config) -> AppState {
    let repository = Arc::new(PgUrlRepository::new(Arc::new(pool)));
    let url_service = Arc::new(UrlService::new(
        repository,
        Arc::new(SystemClock),
        config.base_url.clone(),
    ));

    let authorizer = StaticTokenAuthorizer::new(config.static_token.clone());
    if !authorizer.is_configured() {
        tracing::warn!("STATIC_TOKEN is not set: every /create_url request will be rejected");
    }
    let auth_service = Arc::new(AuthService::new(Arc::new(authorizer)));

    AppState::new(url_service, auth_service)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let state = build_state(pool, &config);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

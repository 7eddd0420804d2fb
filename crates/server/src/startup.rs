use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Create the SQLite directory if needed, connect and apply pending migrations.
pub async fn prepare_database(cfg: &DatabaseConfig) -> Result<DatabaseConnection, StartupError> {
    common::env::ensure_sqlite_dir(&cfg.url).await?;
    let db = models::db::connect_with_config(cfg).await?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    info!(url = %cfg.url, "schema ready");
    Ok(db)
}

/// Router wired to `db`, ready to serve.
pub fn build_app(db: DatabaseConnection, cfg: &AppConfig) -> Router {
    let state = ServerState::new(db, &cfg.auth);
    routes::build_router(state, build_cors())
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        return;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: prepare the database and run the HTTP server until Ctrl+C.
/// The caller loads `cfg` and installs the tracing subscriber.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = prepare_database(&cfg.database).await?;
    let app = build_app(db.clone(), &cfg);

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting server crate");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    db.close().await?;
    info!("database pool closed");
    Ok(())
}

//! Server entry-point: loads settings, prepares the database and serves the
//! REST API.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use shareit_server::inbound::http::health::HealthState;
use shareit_server::outbound::persistence::{DbPool, PoolConfig, run_migrations};

use server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(|err| io::Error::other(err.to_string()))?;
    let database_url = settings.database_url().map_err(io::Error::other)?;

    if settings.run_migrations() {
        run_migrations(database_url).await.map_err(io::Error::other)?;
    }

    let pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(settings.db_max_connections()),
    )
    .await
    .map_err(io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(settings.host(), settings.port(), pool);
    let server = create_server(health_state, config)?;
    info!(host = settings.host(), port = settings.port(), "server listening");
    server.await
}

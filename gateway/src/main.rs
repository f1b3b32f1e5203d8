//! Gateway entry-point: loads settings and serves the validating proxy.

use std::io;
use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use shareit_gateway::{GatewaySettings, GatewayState, ServerClient, configure};

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

    let settings = GatewaySettings::load().map_err(|err| io::Error::other(err.to_string()))?;
    let client = ServerClient::new(settings.server_url(), settings.request_timeout())
        .map_err(io::Error::other)?;
    let state = web::Data::new(GatewayState::new(client, Arc::new(DefaultClock)));

    let server = HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .bind((settings.host(), settings.port()))?
        .run();
    info!(
        host = settings.host(),
        port = settings.port(),
        server_url = settings.server_url(),
        "gateway listening"
    );
    server.await
}

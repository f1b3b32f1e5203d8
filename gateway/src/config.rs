//! Gateway settings loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SERVER_URL: &str = "http://localhost:9090";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Values controlling where the gateway listens and which server it fronts.
///
/// Read from CLI flags, `SHAREIT_GATEWAY_*` environment variables and an
/// optional configuration file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SHAREIT_GATEWAY")]
pub struct GatewaySettings {
    /// Interface to bind.
    #[ortho_config(default = DEFAULT_HOST.to_owned())]
    pub host: String,
    /// Port to bind.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
    /// Base URL of the server requests are forwarded to.
    #[ortho_config(default = DEFAULT_SERVER_URL.to_owned())]
    pub server_url: String,
    /// Upper bound on a single forwarded request.
    #[ortho_config(default = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,
}

impl GatewaySettings {
    /// Configured host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Configured port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Server base URL without a trailing slash; blank falls back to the
    /// local server.
    pub fn server_url(&self) -> &str {
        let url = self.server_url.trim();
        if url.is_empty() {
            DEFAULT_SERVER_URL
        } else {
            url.trim_end_matches('/')
        }
    }

    /// Forwarding timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

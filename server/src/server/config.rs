//! Server settings loaded via OrthoConfig and the runtime configuration
//! derived from them.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use shareit_server::outbound::persistence::DbPool;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 9090;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Raised when a required setting is absent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required setting {name}; set {env}")]
pub struct MissingSetting {
    name: &'static str,
    env: &'static str,
}

/// Values controlling how the server binds and reaches PostgreSQL.
///
/// Read from CLI flags, `SHAREIT_*` environment variables and an optional
/// configuration file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SHAREIT")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Upper bound on pooled connections.
    pub db_max_connections: Option<u32>,
    /// Apply pending migrations before serving.
    #[ortho_config(default = true)]
    pub run_migrations: bool,
}

impl ServerSettings {
    /// Configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, falling back to 9090.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Database URL.
    ///
    /// # Errors
    ///
    /// Returns [`MissingSetting`] when no URL was configured.
    pub fn database_url(&self) -> Result<&str, MissingSetting> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(MissingSetting {
                name: "database_url",
                env: "SHAREIT_DATABASE_URL",
            })
    }

    /// Pool size, falling back to ten connections.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Whether migrations run at startup; on unless disabled.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Bind to `host:port` and serve repositories backed by `db_pool`.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16, db_pool: DbPool) -> Self {
        Self {
            host: host.into(),
            port,
            db_pool,
        }
    }
}

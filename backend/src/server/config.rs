//! Server settings loaded via OrthoConfig and the derived runtime config.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Settings layered from CLI flags, `TRIPLINE_*` environment variables and
/// configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRIPLINE")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Emit human-readable log lines instead of JSON.
    #[ortho_config(default = false)]
    pub pretty_logs: bool,
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }
}

/// Runtime configuration for creating the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Address tuple handed to `HttpServer::bind`.
    #[must_use]
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

impl From<&ServerSettings> for ServerConfig {
    fn from(settings: &ServerSettings) -> Self {
        Self::new(settings.host(), settings.port())
    }
}

//! HTTP server configuration

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Load from `<PREFIX>_HOST` / `<PREFIX>_PORT` environment variables,
    /// falling back to the given default port.
    ///
    /// The prefix distinguishes the two services when they share an
    /// environment file (e.g. `IDENTITY_PORT` vs `ORDER_PORT`).
    pub fn from_env(prefix: &str, default_port: u16) -> Self {
        let host = std::env::var(format!("{prefix}_HOST"))
            .unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var(format!("{prefix}_PORT"))
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(default_port);

        Self { host, port }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

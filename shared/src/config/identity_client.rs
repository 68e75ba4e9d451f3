//! Configuration for the outbound Identity Service client

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the Order Service's client to the Identity Service.
///
/// The timeout bounds every outbound validate call; a request that exceeds
/// it is reported as the service being unavailable rather than hanging the
/// enclosing request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IdentityClientConfig {
    /// Base URL of the Identity Service, e.g. `http://localhost:8080`
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for IdentityClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:8080"),
            timeout_seconds: 5,
        }
    }
}

impl IdentityClientConfig {
    /// Create from the `IDENTITY_SERVICE_URL` /
    /// `IDENTITY_SERVICE_TIMEOUT_SECS` environment variables.
    pub fn from_env() -> Self {
        let base_url = std::env::var("IDENTITY_SERVICE_URL")
            .unwrap_or_else(|_| IdentityClientConfig::default().base_url);
        let timeout_seconds = std::env::var("IDENTITY_SERVICE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Self {
            base_url,
            timeout_seconds,
        }
    }

    /// Get the timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        let config = IdentityClientConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }
}

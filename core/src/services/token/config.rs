//! Configuration for the token service

use chrono::Duration;
use od_shared::config::JwtConfig;

use crate::errors::{DomainError, DomainResult};

/// Validated configuration for the token service.
///
/// Constructed once at startup and injected into [`TokenService`]; the
/// secret is immutable for the process lifetime. A non-positive TTL is
/// rejected here so an already-expired token can never be issued.
///
/// [`TokenService`]: super::TokenService
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Symmetric signing secret
    pub secret: String,
    /// Token time-to-live
    pub ttl: Duration,
    /// Issuer claim stamped on and required from every token
    pub issuer: String,
}

impl TokenConfig {
    /// Create a token configuration, rejecting a non-positive TTL.
    pub fn new(
        secret: impl Into<String>,
        ttl_seconds: i64,
        issuer: impl Into<String>,
    ) -> DomainResult<Self> {
        if ttl_seconds <= 0 {
            return Err(DomainError::Validation {
                message: format!("token TTL must be positive, got {ttl_seconds}s"),
            });
        }

        Ok(Self {
            secret: secret.into(),
            ttl: Duration::seconds(ttl_seconds),
            issuer: issuer.into(),
        })
    }

    /// Build from the environment-level JWT configuration.
    pub fn from_jwt_config(config: &JwtConfig) -> DomainResult<Self> {
        Self::new(&config.secret, config.ttl_seconds, &config.issuer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ttl() {
        let config = TokenConfig::new("secret", 300, "orderdesk").unwrap();
        assert_eq!(config.ttl, Duration::seconds(300));
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let err = TokenConfig::new("secret", 0, "orderdesk").unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[test]
    fn test_negative_ttl_rejected() {
        assert!(TokenConfig::new("secret", -60, "orderdesk").is_err());
    }
}

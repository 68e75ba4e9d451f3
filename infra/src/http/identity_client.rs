//! HTTP client implementation of the IdentityVerifier trait.
//!
//! This is the Order Service's side of the cross-service trust protocol:
//! every inbound bearer token is forwarded to the Identity Service's
//! `/validate` endpoint, and the answer (or the failure to get one) is
//! mapped onto the domain verification taxonomy. Every call is bounded by
//! the configured deadline; a request that exceeds it reports the service
//! as unavailable instead of hanging the enclosing request.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use od_core::domain::value_objects::Identity;
use od_core::errors::{DomainError, TokenError};
use od_core::services::verifier::{IdentityVerifier, VerifyError};
use od_shared::config::IdentityClientConfig;

/// Wire request for the validate endpoint
#[derive(Debug, Serialize)]
struct ValidateRequest<'a> {
    token: &'a str,
}

/// Wire response of a successful validation
#[derive(Debug, Deserialize)]
struct ValidateResponse {
    login: String,
}

/// Wire shape of a rejection body
#[derive(Debug, Deserialize)]
struct RejectionBody {
    error: String,
}

/// Identity verifier that calls the Identity Service over HTTP.
pub struct HttpIdentityVerifier {
    client: reqwest::Client,
    validate_url: String,
}

impl HttpIdentityVerifier {
    /// Create a new verifier from the client configuration.
    ///
    /// The timeout is enforced by the underlying client on every request,
    /// covering connect time and the full response read.
    pub fn new(config: &IdentityClientConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| DomainError::Internal {
                message: format!("failed to build identity client: {e}"),
            })?;

        Ok(Self {
            client,
            validate_url: format!("{}/validate", config.base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl IdentityVerifier for HttpIdentityVerifier {
    async fn validate(&self, token: &str) -> Result<Identity, VerifyError> {
        let response = self
            .client
            .post(&self.validate_url)
            .json(&ValidateRequest { token })
            .send()
            .await
            .map_err(|e| {
                let message = if e.is_timeout() {
                    "validate call timed out".to_string()
                } else {
                    format!("validate call failed: {e}")
                };
                VerifyError::Unavailable { message }
            })?;

        match response.status() {
            StatusCode::OK => {
                let body: ValidateResponse =
                    response.json().await.map_err(|e| VerifyError::Unavailable {
                        message: format!("unreadable validate response: {e}"),
                    })?;
                debug!(login = %body.login, "identity service accepted token");
                Ok(Identity::new(body.login))
            }
            StatusCode::UNAUTHORIZED => {
                // The rejection code distinguishes expiry from tampering;
                // an unreadable body still counts as a rejection.
                let kind = response
                    .json::<RejectionBody>()
                    .await
                    .ok()
                    .and_then(|body| TokenError::from_code(&body.error))
                    .unwrap_or(TokenError::InvalidClaims);
                debug!(kind = %kind, "identity service rejected token");
                Err(VerifyError::Rejected(kind))
            }
            status => {
                warn!(%status, "unexpected status from identity service");
                Err(VerifyError::Unavailable {
                    message: format!("identity service answered {status}"),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config_for(base_url: &str) -> IdentityClientConfig {
        IdentityClientConfig {
            base_url: base_url.to_string(),
            timeout_seconds: 1,
        }
    }

    #[tokio::test]
    async fn test_unreachable_service_reports_unavailable() {
        // Nothing listens on this port; the connect fails fast
        let verifier = HttpIdentityVerifier::new(&config_for("http://127.0.0.1:1")).unwrap();

        let err = verifier.validate("some-token").await.unwrap_err();

        assert!(matches!(err, VerifyError::Unavailable { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_service_fails_within_deadline() {
        let verifier = HttpIdentityVerifier::new(&config_for("http://127.0.0.1:1")).unwrap();

        let started = std::time::Instant::now();
        let _ = verifier.validate("some-token").await;

        // Bounded by the 1s client timeout, with slack for slow machines
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}

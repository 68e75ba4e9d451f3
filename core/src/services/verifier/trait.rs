//! Identity verifier trait for delegated token validation.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::value_objects::Identity;
use crate::errors::TokenError;

/// Outcome of a delegated validation attempt that did not succeed.
///
/// "Checked and rejected" and "could not check" are kept apart: the former
/// is final for this token, the latter is a transport-level condition the
/// caller may retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// The Identity Service examined the token and rejected it.
    #[error(transparent)]
    Rejected(#[from] TokenError),

    /// The Identity Service could not be reached, or did not answer within
    /// the deadline.
    #[error("identity service unavailable: {message}")]
    Unavailable { message: String },
}

/// Synchronous (per-request) identity verification against the Identity
/// Service.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Validate a bearer token and return the identity it proves.
    ///
    /// # Returns
    /// * `Ok(Identity)` - Token is valid
    /// * `Err(VerifyError::Rejected(kind))` - Token rejected; `kind` says why
    /// * `Err(VerifyError::Unavailable { .. })` - The check itself failed
    async fn validate(&self, token: &str) -> Result<Identity, VerifyError>;
}

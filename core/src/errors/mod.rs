//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Identity verification was performed and the token was rejected.
    /// Not retryable.
    #[error("Unauthorized access")]
    Unauthorized,

    /// Identity verification could not be performed at all (network
    /// failure or timeout reaching the Identity Service). Retryable, and
    /// deliberately distinct from `Unauthorized`.
    #[error("Identity service unavailable: {message}")]
    IdentityUnavailable { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;

//! Domain-specific error types for authentication and token operations.
//!
//! Error messages here are internal; the presentation layer maps each
//! variant to a stable wire-level error code and never leaks the raw text
//! of an underlying failure.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown login and wrong secret collapse into this one variant so a
    /// caller cannot probe which logins exist.
    #[error("Invalid login or secret")]
    InvalidCredential,

    #[error("User already exists")]
    UserAlreadyExists,

    /// No bearer token was presented on a request that requires one.
    #[error("Missing bearer token")]
    MissingToken,
}

/// Token verification and generation errors.
///
/// `Expired`, `InvalidSignature`, and `Malformed` are deliberately kept
/// distinct: expiry is steady-state traffic, while a bad signature or an
/// unparseable token indicates tampering or a client bug. Callers that
/// collapse them into a single "unauthorized" must log which kind occurred
/// first.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Malformed token")]
    Malformed,

    /// Well-signed token whose registered claims fail validation
    /// (e.g. unexpected issuer).
    #[error("Invalid token claims")]
    InvalidClaims,

    /// Serialization failure while signing; configuration-level, not a
    /// per-request condition.
    #[error("Token generation failed")]
    GenerationFailed,
}

impl TokenError {
    /// Stable wire-level error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::Expired => "token_expired",
            TokenError::InvalidSignature => "invalid_signature",
            TokenError::Malformed => "malformed_token",
            TokenError::InvalidClaims => "invalid_token_claims",
            TokenError::GenerationFailed => "token_generation_failed",
        }
    }

    /// Parse a wire-level error code back into a token error kind
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "token_expired" => Some(TokenError::Expired),
            "invalid_signature" => Some(TokenError::InvalidSignature),
            "malformed_token" => Some(TokenError::Malformed),
            "invalid_token_claims" => Some(TokenError::InvalidClaims),
            _ => None,
        }
    }
}

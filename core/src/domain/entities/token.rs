//! Token claims for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Identity;

/// Default token time-to-live (5 minutes)
pub const TOKEN_TTL_SECONDS: i64 = 300;

/// JWT issuer
pub const JWT_ISSUER: &str = "orderdesk";

/// Claims structure for the JWT payload.
///
/// Tokens are fully stateless: everything needed to validate one is in the
/// claims and the process-wide signing key. Nothing is stored server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user login)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Creates claims for the given subject with the given time-to-live.
    ///
    /// `iat` is set to the current time and `exp` to `iat + ttl`; callers
    /// are responsible for having validated `ttl > 0` at configuration
    /// time, so an already-expired token can never be produced here.
    pub fn new(subject: impl Into<String>, ttl: Duration, issuer: impl Into<String>) -> Self {
        let now = Utc::now();
        let expiry = now + ttl;

        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.into(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }

    /// Projects the claims back to the minimal identity they bind to.
    ///
    /// A token carries only the login; the display name is not
    /// reconstructable from claims.
    pub fn identity(&self) -> Identity {
        Identity {
            login: self.sub.clone(),
            display_name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = Claims::new("alice", Duration::seconds(TOKEN_TTL_SECONDS), JWT_ISSUER);

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.iss, JWT_ISSUER);
        assert_eq!(claims.exp, claims.iat + TOKEN_TTL_SECONDS);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_expiration() {
        let mut claims = Claims::new("alice", Duration::seconds(300), JWT_ISSUER);

        // Set expiration to past
        claims.exp = Utc::now().timestamp() - 1;

        assert!(claims.is_expired());
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        let mut claims = Claims::new("alice", Duration::seconds(300), JWT_ISSUER);

        // A token is expired the instant now reaches exp
        claims.exp = Utc::now().timestamp();

        assert!(claims.is_expired());
    }

    #[test]
    fn test_identity_projection() {
        let claims = Claims::new("alice", Duration::seconds(300), JWT_ISSUER);
        let identity = claims.identity();

        assert_eq!(identity.login, "alice");
        assert_eq!(identity.display_name, None);
    }

    #[test]
    fn test_claims_serialization() {
        let claims = Claims::new("alice", Duration::seconds(300), JWT_ISSUER);

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }
}

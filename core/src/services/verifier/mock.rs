//! Mock implementation of IdentityVerifier for testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::value_objects::Identity;
use crate::errors::TokenError;

use super::trait_::{IdentityVerifier, VerifyError};

/// Programmable identity verifier for testing.
///
/// Returns a fixed outcome for every call and counts how often it was
/// invoked.
pub struct MockIdentityVerifier {
    outcome: Result<Identity, VerifyError>,
    calls: AtomicUsize,
}

impl MockIdentityVerifier {
    /// Verifier that accepts every token as the given identity
    pub fn accepting(identity: Identity) -> Self {
        Self {
            outcome: Ok(identity),
            calls: AtomicUsize::new(0),
        }
    }

    /// Verifier that rejects every token with the given kind
    pub fn rejecting(kind: TokenError) -> Self {
        Self {
            outcome: Err(VerifyError::Rejected(kind)),
            calls: AtomicUsize::new(0),
        }
    }

    /// Verifier that reports the identity service as unreachable
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(VerifyError::Unavailable {
                message: message.into(),
            }),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of validation calls performed
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityVerifier for MockIdentityVerifier {
    async fn validate(&self, _token: &str) -> Result<Identity, VerifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

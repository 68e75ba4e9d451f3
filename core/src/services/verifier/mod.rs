//! Delegated identity verification contract.
//!
//! Any service that needs identity performs this call against the Identity
//! Service instead of verifying tokens locally; the signing key and the
//! verification logic have exactly one authority. The trait lives in the
//! domain layer so callers can be tested with the mock, while the HTTP
//! client implementation lives in the infrastructure layer.

pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

pub mod mock;

pub use mock::MockIdentityVerifier;
pub use r#trait::{IdentityVerifier, VerifyError};

//! HTTP clients for cross-service calls.

mod identity_client;

pub use identity_client::HttpIdentityVerifier;

//! # OrderDesk Infrastructure
//!
//! Concrete implementations of the core repository and verifier
//! interfaces: MySQL-backed stores and the HTTP client used by the Order
//! Service to delegate token validation to the Identity Service.

pub mod database;
pub mod http;

pub use database::mysql::{MySqlCredentialStore, MySqlOrderStore};
pub use http::HttpIdentityVerifier;

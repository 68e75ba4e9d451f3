//! Repository interfaces for data persistence.
//!
//! Traits only; concrete implementations live in the infrastructure layer.
//! In-memory mocks are provided next to each trait for testing.

pub mod credential;
pub mod order;

pub use credential::{CredentialStore, MockCredentialStore};
pub use order::{MockOrderStore, OrderStore};

//! # OrderDesk Shared
//!
//! Cross-cutting types shared by every layer of the OrderDesk backend:
//! typed configuration loaded from the environment and the wire-level
//! response envelope the services emit.

pub mod config;
pub mod types;

pub use config::{DatabaseConfig, IdentityClientConfig, JwtConfig, ServerConfig};
pub use types::response::ErrorResponse;

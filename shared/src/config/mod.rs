//! Configuration modules for the OrderDesk services.
//!
//! Each service loads its configuration from the environment at startup;
//! the structs here are plain data and carry no runtime state.

pub mod auth;
pub mod database;
pub mod identity_client;
pub mod server;

pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use identity_client::IdentityClientConfig;
pub use server::ServerConfig;

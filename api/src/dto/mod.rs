//! Request and response DTOs for the HTTP surface.

pub mod auth;
pub mod order;

// The error envelope is shared across services
pub use od_shared::types::response::ErrorResponse;

//! Route handlers for the two services.

pub mod auth;
pub mod orders;

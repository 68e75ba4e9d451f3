//! Authentication service module
//!
//! Registration, login (authenticate then issue a signed token), and
//! token validation for the Identity Service.

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;

//! Identity Service routes: registration, login, and token validation.

use std::sync::Arc;

use od_core::repositories::CredentialStore;
use od_core::services::auth::AuthService;

pub mod login;
pub mod register;
pub mod validate;

pub use login::login;
pub use register::register;
pub use validate::validate;

/// Shared application state for the Identity Service
pub struct IdentityAppState<C: CredentialStore> {
    /// Authentication service handling all three operations
    pub auth_service: Arc<AuthService<C>>,
}

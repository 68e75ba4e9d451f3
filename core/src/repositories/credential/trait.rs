//! Credential store trait defining the interface to the credential domain.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::domain::value_objects::{Credential, Identity};
use crate::errors::DomainError;

/// Opaque credential-store capability.
///
/// Registration and authentication are delegated here as a whole; the
/// domain layer never sees stored secrets or their hashes. Implementations
/// must collapse "unknown login" and "wrong secret" into
/// [`AuthError::InvalidCredential`](crate::errors::AuthError) so callers
/// cannot distinguish the two.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Register a new user with the given credential.
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Auth(AuthError::UserAlreadyExists))` - Login taken
    /// * `Err(DomainError)` - Store-level failure
    async fn register(
        &self,
        credential: &Credential,
        display_name: Option<&str>,
    ) -> Result<User, DomainError>;

    /// Check a credential against the store.
    ///
    /// # Returns
    /// * `Ok(Identity)` - Credential is valid
    /// * `Err(DomainError::Auth(AuthError::InvalidCredential))` - Unknown
    ///   login or wrong secret, indistinguishably
    /// * `Err(DomainError)` - Store-level failure
    async fn authenticate(&self, credential: &Credential) -> Result<Identity, DomainError>;
}

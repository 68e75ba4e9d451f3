//! Main authentication service implementation

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::value_objects::{Credential, Identity};
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::CredentialStore;
use crate::services::token::TokenService;

/// Authentication service for the Identity Service's public operations.
///
/// Delegates credential checks to the injected store and token work to the
/// token service; holds no mutable state of its own.
pub struct AuthService<C: CredentialStore> {
    /// Credential store for registration and authentication
    credential_store: Arc<C>,
    /// Token service for signing and verification
    token_service: Arc<TokenService>,
}

impl<C: CredentialStore> AuthService<C> {
    /// Create a new authentication service
    pub fn new(credential_store: Arc<C>, token_service: Arc<TokenService>) -> Self {
        Self {
            credential_store,
            token_service,
        }
    }

    /// Register a new user.
    ///
    /// Pure delegation to the credential store; no token is involved.
    pub async fn register(
        &self,
        credential: &Credential,
        display_name: Option<&str>,
    ) -> DomainResult<()> {
        let user = self
            .credential_store
            .register(credential, display_name)
            .await?;

        info!(login = %user.login, "registered new user");
        Ok(())
    }

    /// Authenticate a credential and issue a signed token.
    ///
    /// Any authentication failure surfaces as `InvalidCredential`; whether
    /// the login was unknown or the secret wrong is not recoverable from
    /// the result.
    pub async fn login(&self, credential: &Credential) -> DomainResult<String> {
        let identity = self
            .credential_store
            .authenticate(credential)
            .await
            .map_err(|error| match error {
                DomainError::Auth(AuthError::InvalidCredential) => {
                    debug!(login = %credential.login, "login rejected");
                    error
                }
                other => other,
            })?;

        let token = self.token_service.issue(&identity)?;
        info!(login = %identity.login, "issued token");
        Ok(token)
    }

    /// Validate a token and return the identity it proves.
    ///
    /// Thin wrapper over the token service; stateless and repeatable. The
    /// rejection kind is logged here because the HTTP boundary collapses
    /// all three into a 401.
    pub fn validate(&self, token: &str) -> Result<Identity, TokenError> {
        self.token_service.validate(token).map_err(|kind| {
            match kind {
                // Expired tokens are expected steady-state traffic
                TokenError::Expired => debug!("rejected expired token"),
                // Anything else points at tampering or a client bug
                ref other => warn!(kind = %other, "rejected token"),
            }
            kind
        })
    }
}

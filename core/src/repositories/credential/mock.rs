//! Mock implementation of CredentialStore for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::domain::value_objects::{Credential, Identity};
use crate::errors::{AuthError, DomainError};

use super::trait_::CredentialStore;

/// In-memory credential store for testing.
///
/// Secrets are kept in plaintext here; only the real store implementation
/// hashes them.
pub struct MockCredentialStore {
    accounts: Arc<RwLock<HashMap<String, (String, User)>>>,
}

impl MockCredentialStore {
    /// Create a new empty mock store
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a mock store pre-populated with one account
    pub fn with_account(login: &str, secret: &str) -> Self {
        let mut accounts = HashMap::new();
        let user = User::new(login, None);
        accounts.insert(login.to_string(), (secret.to_string(), user));

        Self {
            accounts: Arc::new(RwLock::new(accounts)),
        }
    }
}

impl Default for MockCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for MockCredentialStore {
    async fn register(
        &self,
        credential: &Credential,
        display_name: Option<&str>,
    ) -> Result<User, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(&credential.login) {
            return Err(DomainError::Auth(AuthError::UserAlreadyExists));
        }

        let user = User::new(&credential.login, display_name.map(str::to_string));
        accounts.insert(
            credential.login.clone(),
            (credential.secret.clone(), user.clone()),
        );
        Ok(user)
    }

    async fn authenticate(&self, credential: &Credential) -> Result<Identity, DomainError> {
        let accounts = self.accounts.read().await;

        match accounts.get(&credential.login) {
            Some((secret, user)) if *secret == credential.secret => Ok(user.identity()),
            // Unknown login and wrong secret are indistinguishable
            _ => Err(DomainError::Auth(AuthError::InvalidCredential)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_register_and_authenticate() {
        let store = MockCredentialStore::new();
        let credential = Credential::new("alice", "correct");

        store.register(&credential, Some("Alice")).await.unwrap();

        let identity = store.authenticate(&credential).await.unwrap();
        assert_eq!(identity.login, "alice");
        assert_eq!(identity.display_name, Some("Alice".to_string()));
    }

    #[tokio::test]
    async fn test_duplicate_registration_rejected() {
        let store = MockCredentialStore::new();
        let credential = Credential::new("alice", "correct");

        store.register(&credential, None).await.unwrap();
        let err = store.register(&credential, None).await.unwrap_err();

        assert!(matches!(
            err,
            DomainError::Auth(AuthError::UserAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn test_wrong_secret_and_unknown_login_are_indistinguishable() {
        let store = MockCredentialStore::new();
        store
            .register(&Credential::new("alice", "correct"), None)
            .await
            .unwrap();

        let wrong_secret = store
            .authenticate(&Credential::new("alice", "wrong"))
            .await
            .unwrap_err();
        let unknown_login = store
            .authenticate(&Credential::new("mallory", "whatever"))
            .await
            .unwrap_err();

        assert!(matches!(
            wrong_secret,
            DomainError::Auth(AuthError::InvalidCredential)
        ));
        assert!(matches!(
            unknown_login,
            DomainError::Auth(AuthError::InvalidCredential)
        ));
    }
}

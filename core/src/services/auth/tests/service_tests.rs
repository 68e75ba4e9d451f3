//! Unit tests for the authentication service

use std::sync::Arc;

use crate::domain::entities::token::JWT_ISSUER;
use crate::domain::value_objects::Credential;
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::MockCredentialStore;
use crate::services::auth::AuthService;
use crate::services::token::{TokenConfig, TokenService};

fn auth_service(store: MockCredentialStore) -> AuthService<MockCredentialStore> {
    let config = TokenConfig::new("test-secret", 300, JWT_ISSUER).unwrap();
    AuthService::new(Arc::new(store), Arc::new(TokenService::new(config)))
}

#[tokio::test]
async fn test_register_then_login_issues_valid_token() {
    let service = auth_service(MockCredentialStore::new());
    let credential = Credential::new("alice", "correct");

    service.register(&credential, None).await.unwrap();

    let token = service.login(&credential).await.unwrap();
    assert!(!token.is_empty());

    let identity = service.validate(&token).unwrap();
    assert_eq!(identity.login, "alice");
}

#[tokio::test]
async fn test_register_duplicate_login_rejected() {
    let service = auth_service(MockCredentialStore::new());
    let credential = Credential::new("alice", "correct");

    service.register(&credential, None).await.unwrap();
    let err = service.register(&credential, None).await.unwrap_err();

    assert!(matches!(
        err,
        DomainError::Auth(AuthError::UserAlreadyExists)
    ));
}

#[tokio::test]
async fn test_login_with_wrong_secret_rejected() {
    let service = auth_service(MockCredentialStore::with_account("alice", "correct"));

    let err = service
        .login(&Credential::new("alice", "wrong"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidCredential)
    ));
}

#[tokio::test]
async fn test_login_with_unknown_login_gives_same_error() {
    let service = auth_service(MockCredentialStore::with_account("alice", "correct"));

    let err = service
        .login(&Credential::new("mallory", "anything"))
        .await
        .unwrap_err();

    // Indistinguishable from a wrong secret
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidCredential)
    ));
}

#[tokio::test]
async fn test_validate_is_idempotent() {
    let service = auth_service(MockCredentialStore::with_account("alice", "correct"));

    let token = service
        .login(&Credential::new("alice", "correct"))
        .await
        .unwrap();

    let first = service.validate(&token).unwrap();
    let second = service.validate(&token).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_validate_rejects_garbage() {
    let service = auth_service(MockCredentialStore::new());

    let err = service.validate("garbage").unwrap_err();
    assert_eq!(err, TokenError::Malformed);
}

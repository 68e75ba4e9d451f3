use actix_web::{web, HttpResponse};

use od_core::errors::DomainError;
use od_core::repositories::CredentialStore;

use crate::dto::auth::{ValidateRequest, ValidateResponse};
use crate::handlers::handle_domain_error;

use super::IdentityAppState;

/// Handler for POST /validate
///
/// Verifies a bearer token and returns the identity it proves. This is
/// the endpoint other services delegate to; repeated calls with the same
/// unexpired token always produce the same identity.
///
/// # Responses
/// - 200 OK: `{"login": "..."}`
/// - 401 Unauthorized: `token_expired`, `invalid_signature`, or
///   `malformed_token` depending on what the verification found
pub async fn validate<C>(
    state: web::Data<IdentityAppState<C>>,
    request: web::Json<ValidateRequest>,
) -> HttpResponse
where
    C: CredentialStore + 'static,
{
    match state.auth_service.validate(&request.token) {
        Ok(identity) => HttpResponse::Ok().json(ValidateResponse {
            login: identity.login,
        }),
        Err(kind) => handle_domain_error(DomainError::Token(kind)),
    }
}

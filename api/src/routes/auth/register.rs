use actix_web::{web, HttpResponse};
use validator::Validate;

use od_core::domain::value_objects::Credential;
use od_core::repositories::CredentialStore;

use crate::dto::auth::RegisterRequest;
use crate::handlers::{handle_domain_error, validation_error_response};

use super::IdentityAppState;

/// Handler for POST /reg
///
/// Registers a new user; delegated entirely to the credential store. No
/// token is involved.
///
/// # Responses
/// - 200 OK: empty body
/// - 400 Bad Request: invalid request data
/// - 409 Conflict: login already taken
pub async fn register<C>(
    state: web::Data<IdentityAppState<C>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    C: CredentialStore + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(errors);
    }

    let credential = Credential::new(&request.login, &request.secret);

    match state
        .auth_service
        .register(&credential, request.display_name.as_deref())
        .await
    {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(error) => handle_domain_error(error),
    }
}

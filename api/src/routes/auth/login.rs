use actix_web::{web, HttpResponse};
use validator::Validate;

use od_core::domain::value_objects::Credential;
use od_core::repositories::CredentialStore;

use crate::dto::auth::{AuthResponse, LoginRequest};
use crate::handlers::{handle_domain_error, validation_error_response};

use super::IdentityAppState;

/// Handler for POST /login
///
/// Authenticates a credential and issues a signed bearer token. Whether
/// the login was unknown or the secret wrong is not distinguishable from
/// the response.
///
/// # Responses
/// - 200 OK: `{"token": "..."}`
/// - 400 Bad Request: invalid request data
/// - 401 Unauthorized: invalid credential
pub async fn login<C>(
    state: web::Data<IdentityAppState<C>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    C: CredentialStore + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(errors);
    }

    let credential = Credential::new(&request.login, &request.secret);

    match state.auth_service.login(&credential).await {
        Ok(token) => HttpResponse::Ok().json(AuthResponse { token }),
        Err(error) => handle_domain_error(error),
    }
}

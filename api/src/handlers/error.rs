//! Domain error to HTTP response mapping.
//!
//! Every domain error is recovered here and turned into a distinct HTTP
//! status with a stable error code; raw internal error text never reaches
//! the client. This is also where the rejection kind gets logged before
//! the response collapses it: expiry is routine traffic, a bad signature
//! or unparseable token is tampering or a bug, and an unreachable
//! collaborator is an operational incident.

use actix_web::HttpResponse;
use tracing::{debug, error, warn};

use od_core::errors::{AuthError, DomainError, TokenError};
use od_shared::types::response::ErrorResponse;

/// Convert a domain error into the HTTP response it maps to.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidCredential => {
                debug!("authentication rejected");
                HttpResponse::Unauthorized().json(ErrorResponse::new(
                    "invalid_credential",
                    "Invalid login or secret",
                ))
            }
            AuthError::UserAlreadyExists => HttpResponse::Conflict().json(ErrorResponse::new(
                "user_already_exists",
                "A user with this login already exists",
            )),
            AuthError::MissingToken => {
                debug!("request without bearer token");
                HttpResponse::Unauthorized().json(ErrorResponse::new(
                    "missing_token",
                    "Authorization bearer token is required",
                ))
            }
        },
        DomainError::Token(token_error) => match token_error {
            TokenError::Expired => {
                debug!("token rejected: expired");
                HttpResponse::Unauthorized()
                    .json(ErrorResponse::new(token_error.code(), "Token has expired"))
            }
            TokenError::InvalidSignature | TokenError::Malformed | TokenError::InvalidClaims => {
                warn!(kind = %token_error, "token rejected");
                HttpResponse::Unauthorized()
                    .json(ErrorResponse::new(token_error.code(), "Token is not valid"))
            }
            TokenError::GenerationFailed => {
                error!("token generation failed");
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    token_error.code(),
                    "Could not generate token",
                ))
            }
        },
        DomainError::Unauthorized => {
            // The concrete rejection kind was already logged where the
            // delegated validation result was examined.
            HttpResponse::Unauthorized().json(ErrorResponse::new(
                "unauthorized",
                "Identity verification failed",
            ))
        }
        DomainError::IdentityUnavailable { message } => {
            error!(%message, "identity service unavailable");
            HttpResponse::ServiceUnavailable().json(ErrorResponse::new(
                "identity_service_unavailable",
                "Identity service is temporarily unavailable, please retry",
            ))
        }
        DomainError::NotFound { resource } => {
            debug!(%resource, "resource not found");
            HttpResponse::NotFound().json(ErrorResponse::new(
                "not_found",
                format!("{resource} was not found"),
            ))
        }
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
        }
        DomainError::Internal { message } => {
            error!(%message, "internal error");
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "An internal error occurred",
            ))
        }
    }
}

/// Convert request DTO validation failures into a 400 response.
pub fn validation_error_response(errors: validator::ValidationErrors) -> HttpResponse {
    let mut details = std::collections::HashMap::new();
    details.insert(
        "validation_errors".to_string(),
        serde_json::json!(errors.to_string()),
    );

    HttpResponse::BadRequest().json(
        ErrorResponse::new("validation_error", "Invalid request data").with_details(details),
    )
}

//! Identity Service application wiring.
//!
//! Routes and state are registered through a `ServiceConfig` closure so
//! the binary and the integration tests build the exact same app.

use actix_web::{web, HttpResponse};

use od_core::repositories::CredentialStore;

use crate::routes::auth::{login, register, validate, IdentityAppState};

/// Build the route configuration for the Identity Service.
pub fn configure_identity<C>(
    state: web::Data<IdentityAppState<C>>,
) -> impl FnOnce(&mut web::ServiceConfig)
where
    C: CredentialStore + 'static,
{
    move |cfg| {
        cfg.app_data(state)
            .route("/health", web::get().to(health_check))
            .route("/reg", web::post().to(register::<C>))
            .route("/login", web::post().to(login::<C>))
            .route("/validate", web::post().to(validate::<C>))
            .default_service(web::route().to(not_found));
    }
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "orderdesk-identity",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}

//! Order Service application wiring.

use actix_web::{web, HttpResponse};

use od_core::repositories::OrderStore;
use od_core::services::verifier::IdentityVerifier;

use crate::routes::orders::{order_status, OrderAppState};

/// Build the route configuration for the Order Service.
///
/// `/order` accepts any method, matching the service's original wire
/// surface; the handler reads the query from the JSON body either way.
pub fn configure_order<V, S>(
    state: web::Data<OrderAppState<V, S>>,
) -> impl FnOnce(&mut web::ServiceConfig)
where
    V: IdentityVerifier + 'static,
    S: OrderStore + 'static,
{
    move |cfg| {
        cfg.app_data(state)
            .route("/health", web::get().to(health_check))
            .route("/order", web::route().to(order_status::<V, S>))
            .default_service(web::route().to(not_found));
    }
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "orderdesk-order",
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

use actix_web::{web, HttpRequest, HttpResponse};

use od_core::repositories::OrderStore;
use od_core::services::verifier::IdentityVerifier;

use crate::dto::order::{OrderStatusRequest, OrderStatusResponse};
use crate::extract::extract_bearer_token;
use crate::handlers::handle_domain_error;

use super::OrderAppState;

/// Handler for /order
///
/// Resolves an order status on behalf of a bearer-token holder. The token
/// is validated against the Identity Service before the store is touched;
/// a request without a token is rejected without any outbound call.
///
/// # Responses
/// - 200 OK: `{"identity": {...}, "status": "..."}`
/// - 401 Unauthorized: `missing_token` or `unauthorized`
/// - 404 Not Found: unknown order id
/// - 503 Service Unavailable: the Identity Service could not be reached
pub async fn order_status<V, S>(
    req: HttpRequest,
    state: web::Data<OrderAppState<V, S>>,
    request: web::Json<OrderStatusRequest>,
) -> HttpResponse
where
    V: IdentityVerifier + 'static,
    S: OrderStore + 'static,
{
    let token = extract_bearer_token(&req);

    match state
        .order_service
        .order_status(token, request.order_id)
        .await
    {
        Ok(report) => HttpResponse::Ok().json(OrderStatusResponse::from(report)),
        Err(error) => handle_domain_error(error),
    }
}

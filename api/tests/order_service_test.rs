//! Integration tests for the Order Service HTTP surface.
//!
//! The Identity Service is faked through the verifier trait; one test
//! also drives the real HTTP verifier against a port nothing listens on
//! to cover the transport-failure path end to end.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use uuid::Uuid;

use od_api::order_app::configure_order;
use od_api::routes::orders::OrderAppState;
use od_core::domain::entities::order::Order;
use od_core::domain::value_objects::Identity;
use od_core::errors::TokenError;
use od_core::repositories::{MockOrderStore, OrderStore};
use od_core::services::order::OrderService;
use od_core::services::verifier::{IdentityVerifier, MockIdentityVerifier};
use od_infra::HttpIdentityVerifier;
use od_shared::config::IdentityClientConfig;

fn app_state<V, S>(verifier: Arc<V>, store: Arc<S>) -> web::Data<OrderAppState<V, S>>
where
    V: IdentityVerifier + 'static,
    S: OrderStore + 'static,
{
    let order_service = Arc::new(OrderService::new(verifier, store));
    web::Data::new(OrderAppState { order_service })
}

#[actix_rt::test]
async fn test_order_status_happy_path() {
    let order = Order::new("shipped");
    let order_id = order.id;
    let verifier = Arc::new(MockIdentityVerifier::accepting(Identity::new("alice")));
    let store = Arc::new(MockOrderStore::with_orders([order]));
    let app = test::init_service(
        App::new().configure(configure_order(app_state(verifier, Arc::clone(&store)))),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/order")
        .insert_header(("Authorization", "Bearer a-valid-token"))
        .set_json(serde_json::json!({"order_id": order_id}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // One combined object: identity and status together
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["identity"]["login"], "alice");
    assert_eq!(body["status"], "shipped");
}

#[actix_rt::test]
async fn test_missing_token_is_rejected_without_lookups() {
    let verifier = Arc::new(MockIdentityVerifier::accepting(Identity::new("alice")));
    let store = Arc::new(MockOrderStore::with_orders([Order::new("pending")]));
    let app = test::init_service(App::new().configure(configure_order(app_state(
        Arc::clone(&verifier),
        Arc::clone(&store),
    ))))
    .await;

    let req = test::TestRequest::post()
        .uri("/order")
        .set_json(serde_json::json!({"order_id": Uuid::new_v4()}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "missing_token");

    // Rejected before any outbound call or lookup
    assert_eq!(verifier.calls(), 0);
    assert_eq!(store.lookups(), 0);
}

#[actix_rt::test]
async fn test_expired_token_is_unauthorized_and_skips_the_store() {
    let order = Order::new("pending");
    let order_id = order.id;
    let verifier = Arc::new(MockIdentityVerifier::rejecting(TokenError::Expired));
    let store = Arc::new(MockOrderStore::with_orders([order]));
    let app = test::init_service(App::new().configure(configure_order(app_state(
        Arc::clone(&verifier),
        Arc::clone(&store),
    ))))
    .await;

    let req = test::TestRequest::post()
        .uri("/order")
        .insert_header(("Authorization", "Bearer an-expired-token"))
        .set_json(serde_json::json!({"order_id": order_id}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "unauthorized");

    assert_eq!(verifier.calls(), 1);
    assert_eq!(store.lookups(), 0);
}

#[actix_rt::test]
async fn test_identity_service_down_is_5xx_not_401() {
    let verifier = Arc::new(MockIdentityVerifier::unavailable("connection refused"));
    let store = Arc::new(MockOrderStore::with_orders([Order::new("pending")]));
    let app = test::init_service(App::new().configure(configure_order(app_state(
        verifier,
        Arc::clone(&store),
    ))))
    .await;

    let req = test::TestRequest::post()
        .uri("/order")
        .insert_header(("Authorization", "Bearer a-valid-token"))
        .set_json(serde_json::json!({"order_id": Uuid::new_v4()}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "identity_service_unavailable");

    assert_eq!(store.lookups(), 0);
}

#[actix_rt::test]
async fn test_unreachable_identity_service_over_real_transport() {
    // Same scenario, but through the actual HTTP client: nothing listens
    // on this port, so the connect fails and maps to unavailable.
    let config = IdentityClientConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_seconds: 1,
    };
    let verifier = Arc::new(HttpIdentityVerifier::new(&config).unwrap());
    let store = Arc::new(MockOrderStore::with_orders([Order::new("pending")]));
    let app = test::init_service(App::new().configure(configure_order(app_state(
        verifier,
        Arc::clone(&store),
    ))))
    .await;

    let req = test::TestRequest::post()
        .uri("/order")
        .insert_header(("Authorization", "Bearer a-valid-token"))
        .set_json(serde_json::json!({"order_id": Uuid::new_v4()}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    assert_eq!(store.lookups(), 0);
}

#[actix_rt::test]
async fn test_unknown_order_is_not_found_with_identity_resolved() {
    let verifier = Arc::new(MockIdentityVerifier::accepting(Identity::new("alice")));
    let store = Arc::new(MockOrderStore::new());
    let app = test::init_service(App::new().configure(configure_order(app_state(
        Arc::clone(&verifier),
        Arc::clone(&store),
    ))))
    .await;

    let req = test::TestRequest::post()
        .uri("/order")
        .insert_header(("Authorization", "Bearer a-valid-token"))
        .set_json(serde_json::json!({"order_id": Uuid::new_v4()}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_found");

    // Identity was resolved before the lookup concluded nothing was there
    assert_eq!(verifier.calls(), 1);
    assert_eq!(store.lookups(), 1);
}

#[actix_rt::test]
async fn test_health_endpoint() {
    let verifier = Arc::new(MockIdentityVerifier::accepting(Identity::new("alice")));
    let store = Arc::new(MockOrderStore::new());
    let app =
        test::init_service(App::new().configure(configure_order(app_state(verifier, store))))
            .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["service"], "orderdesk-order");
}

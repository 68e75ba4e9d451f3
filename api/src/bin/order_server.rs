//! Order Service binary.
//!
//! Serves the order-status lookup, delegating all identity verification
//! to the Identity Service over HTTP.

use std::io;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use sqlx::mysql::MySqlPoolOptions;
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use od_api::middleware::create_cors;
use od_api::order_app::configure_order;
use od_api::routes::orders::OrderAppState;
use od_core::services::order::OrderService;
use od_infra::{HttpIdentityVerifier, MySqlOrderStore};
use od_shared::config::{DatabaseConfig, IdentityClientConfig, ServerConfig};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let server_config = ServerConfig::from_env("ORDER", 8081);
    let identity_config = IdentityClientConfig::from_env();
    let database_config = DatabaseConfig::from_env();

    let verifier = HttpIdentityVerifier::new(&identity_config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let pool = MySqlPoolOptions::new()
        .max_connections(database_config.max_connections)
        .connect(&database_config.url)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string()))?;

    let order_store = Arc::new(MySqlOrderStore::new(pool));
    let order_service = Arc::new(OrderService::new(Arc::new(verifier), order_store));
    let state = web::Data::new(OrderAppState { order_service });

    info!(
        address = %server_config.bind_address(),
        identity_service = %identity_config.base_url,
        "starting order service"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(create_cors())
            .configure(configure_order(state.clone()))
    })
    .bind(server_config.bind_address())?
    .run()
    .await
}

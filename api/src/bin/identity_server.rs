//! Identity Service binary.
//!
//! Issues, signs, and validates bearer tokens; credentials live in the
//! MySQL-backed store.

use std::io;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use sqlx::mysql::MySqlPoolOptions;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use od_api::identity_app::configure_identity;
use od_api::middleware::create_cors;
use od_api::routes::auth::IdentityAppState;
use od_core::services::auth::AuthService;
use od_core::services::token::{TokenConfig, TokenService};
use od_infra::MySqlCredentialStore;
use od_shared::config::{DatabaseConfig, JwtConfig, ServerConfig};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let server_config = ServerConfig::from_env("IDENTITY", 8080);
    let jwt_config = JwtConfig::from_env();
    let database_config = DatabaseConfig::from_env();

    if jwt_config.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the development default");
    }

    // A non-positive TTL is a configuration error and refuses startup
    let token_config = TokenConfig::from_jwt_config(&jwt_config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let pool = MySqlPoolOptions::new()
        .max_connections(database_config.max_connections)
        .connect(&database_config.url)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string()))?;

    let credential_store = Arc::new(MySqlCredentialStore::new(pool));
    let token_service = Arc::new(TokenService::new(token_config));
    let auth_service = Arc::new(AuthService::new(credential_store, token_service));
    let state = web::Data::new(IdentityAppState { auth_service });

    info!(address = %server_config.bind_address(), "starting identity service");

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(create_cors())
            .configure(configure_identity(state.clone()))
    })
    .bind(server_config.bind_address())?
    .run()
    .await
}

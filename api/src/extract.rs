//! Request extraction helpers.

use actix_web::http::header::AUTHORIZATION;
use actix_web::HttpRequest;

/// Extract the bearer token from the Authorization header.
///
/// Returns `None` when the header is absent, unreadable, uses a different
/// scheme, or carries an empty token. The token is opaque on this side;
/// validation is delegated to the Identity Service.
pub fn extract_bearer_token(req: &HttpRequest) -> Option<&str> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

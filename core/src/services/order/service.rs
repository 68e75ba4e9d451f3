//! Main order service implementation

use std::sync::Arc;

use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::domain::value_objects::OrderStatusReport;
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::OrderStore;
use crate::services::verifier::{IdentityVerifier, VerifyError};

/// Order service exposing the order-status lookup.
///
/// Identity verification is delegated to the injected verifier; this
/// service never holds the signing key. Verification is a precondition of
/// the lookup, not a parallel concern: the store is not consulted until
/// the caller's identity is established.
pub struct OrderService<V: IdentityVerifier, S: OrderStore> {
    /// Delegated identity verification against the Identity Service
    verifier: Arc<V>,
    /// Read-only order lookups
    order_store: Arc<S>,
}

impl<V: IdentityVerifier, S: OrderStore> OrderService<V, S> {
    /// Create a new order service
    pub fn new(verifier: Arc<V>, order_store: Arc<S>) -> Self {
        Self {
            verifier,
            order_store,
        }
    }

    /// Resolve the status of an order on behalf of a token bearer.
    ///
    /// Strictly ordered:
    /// 1. A missing token is rejected before anything else happens.
    /// 2. The token is validated against the Identity Service. Rejection
    ///    surfaces as `Unauthorized`; a failed or timed-out call surfaces
    ///    as `IdentityUnavailable`. Neither proceeds to the lookup.
    /// 3. The order is resolved; an unknown id is `NotFound`.
    pub async fn order_status(
        &self,
        bearer_token: Option<&str>,
        order_id: Uuid,
    ) -> DomainResult<OrderStatusReport> {
        let token = bearer_token.ok_or(AuthError::MissingToken)?;

        let identity = match self.verifier.validate(token).await {
            Ok(identity) => identity,
            Err(VerifyError::Rejected(kind)) => {
                // The kind matters for diagnostics even though the caller
                // only sees a generic rejection: expiry is routine, the
                // rest is tampering or a client bug.
                match kind {
                    TokenError::Expired => debug!("order status denied: token expired"),
                    ref other => warn!(kind = %other, "order status denied: token rejected"),
                }
                return Err(DomainError::Unauthorized);
            }
            Err(VerifyError::Unavailable { message }) => {
                error!(%message, "identity service unreachable during order status");
                return Err(DomainError::IdentityUnavailable { message });
            }
        };

        let order = self
            .order_store
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("order {order_id}"),
            })?;

        debug!(login = %identity.login, order_id = %order_id, status = %order.status,
               "order status resolved");
        Ok(OrderStatusReport::new(identity, order.status))
    }
}

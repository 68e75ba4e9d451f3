//! Order Service routes.

use std::sync::Arc;

use od_core::repositories::OrderStore;
use od_core::services::order::OrderService;
use od_core::services::verifier::IdentityVerifier;

pub mod status;

pub use status::order_status;

/// Shared application state for the Order Service
pub struct OrderAppState<V: IdentityVerifier, S: OrderStore> {
    /// Order service performing delegated verification and lookups
    pub order_service: Arc<OrderService<V, S>>,
}

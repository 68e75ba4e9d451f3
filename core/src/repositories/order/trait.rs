//! Order store trait defining the interface for order lookups.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::order::Order;
use crate::errors::DomainError;

/// Read-only order lookup capability.
///
/// Order data is owned elsewhere; this side only resolves a status by id.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Find an order by its unique identifier.
    ///
    /// # Returns
    /// * `Ok(Some(Order))` - Order found
    /// * `Ok(None)` - No order with the given id
    /// * `Err(DomainError)` - Store-level failure
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError>;
}

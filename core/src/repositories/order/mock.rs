//! Mock implementation of OrderStore for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::order::Order;
use crate::errors::DomainError;

use super::trait_::OrderStore;

/// In-memory order store for testing.
///
/// Records how many lookups were performed so tests can assert that no
/// lookup happens when identity verification fails.
pub struct MockOrderStore {
    orders: Arc<RwLock<HashMap<Uuid, Order>>>,
    lookups: AtomicUsize,
}

impl MockOrderStore {
    /// Create a new empty mock store
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(HashMap::new())),
            lookups: AtomicUsize::new(0),
        }
    }

    /// Create a mock store pre-populated with the given orders
    pub fn with_orders(orders: impl IntoIterator<Item = Order>) -> Self {
        let map = orders.into_iter().map(|o| (o.id, o)).collect();
        Self {
            orders: Arc::new(RwLock::new(map)),
            lookups: AtomicUsize::new(0),
        }
    }

    /// Number of lookups performed against this store
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl Default for MockOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for MockOrderStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let orders = self.orders.read().await;
        Ok(orders.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_and_record_lookups() {
        let order = Order::new("shipped");
        let id = order.id;
        let store = MockOrderStore::with_orders([order]);

        assert_eq!(store.lookups(), 0);

        let found = store.find_by_id(id).await.unwrap();
        assert_eq!(found.unwrap().status, "shipped");

        let missing = store.find_by_id(Uuid::new_v4()).await.unwrap();
        assert!(missing.is_none());

        assert_eq!(store.lookups(), 2);
    }
}

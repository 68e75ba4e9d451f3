//! Order entity owned by the Order Service's store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order entity, read-only on this side of the store boundary.
///
/// The status vocabulary is owned by the store; this side carries it as an
/// opaque string rather than re-deriving an enum it does not control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier for the order
    pub id: Uuid,

    /// Current order status (e.g. "pending", "shipped")
    pub status: String,

    /// Timestamp when the order was created
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new Order instance
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            status: status.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order() {
        let order = Order::new("pending");
        assert_eq!(order.status, "pending");
    }
}

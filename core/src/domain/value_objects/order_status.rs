//! Order status report value object.

use serde::{Deserialize, Serialize};

use super::Identity;

/// The combined result of an order-status lookup: the verified identity of
/// the caller and the status of the requested order, returned as a single
/// object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatusReport {
    /// The caller's identity as verified by the Identity Service
    pub identity: Identity,

    /// The status of the requested order
    pub status: String,
}

impl OrderStatusReport {
    /// Creates a new order status report
    pub fn new(identity: Identity, status: impl Into<String>) -> Self {
        Self {
            identity,
            status: status.into(),
        }
    }
}

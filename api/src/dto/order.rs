use serde::{Deserialize, Serialize};
use uuid::Uuid;

use od_core::domain::value_objects::{Identity, OrderStatusReport};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusRequest {
    pub order_id: Uuid,
}

/// Combined order-status response: the verified identity and the order
/// status in one object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusResponse {
    pub identity: Identity,
    pub status: String,
}

impl From<OrderStatusReport> for OrderStatusResponse {
    fn from(report: OrderStatusReport) -> Self {
        Self {
            identity: report.identity,
            status: report.status,
        }
    }
}

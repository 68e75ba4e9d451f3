//! Value objects representing immutable domain concepts.

pub mod credential;
pub mod identity;
pub mod order_status;

// Re-export commonly used types
pub use credential::Credential;
pub use identity::Identity;
pub use order_status::OrderStatusReport;

//! Order store repository interface and mock.

pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

pub mod mock;

pub use mock::MockOrderStore;
pub use r#trait::OrderStore;

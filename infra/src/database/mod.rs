//! Database store implementations.

pub mod mysql;

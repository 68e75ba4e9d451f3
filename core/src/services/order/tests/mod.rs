//! Order service tests

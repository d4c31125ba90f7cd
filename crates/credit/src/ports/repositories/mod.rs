//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod credit_repository;
mod customer_repository;

pub use credit_repository::*;
pub use customer_repository::*;

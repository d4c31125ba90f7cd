//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and domain rules.

mod credit_service;
mod customer_service;

pub use credit_service::CreditService;
pub use customer_service::CustomerService;

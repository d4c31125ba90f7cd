//! Domain Services
//!
//! Stateless business rules that don't belong to a single entity.

mod credit_rules;

pub use credit_rules::*;

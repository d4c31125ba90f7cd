//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod clock;
#[cfg(test)]
pub mod memory;
pub mod postgres;

// Re-exports
pub use clock::SystemClock;
pub use postgres::{PgCreditRepository, PgCustomerRepository};

//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod address;
mod credit_policy;
mod credit_status;

pub use address::*;
pub use credit_policy::*;
pub use credit_status::*;

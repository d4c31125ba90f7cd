//! API Data Models
//!
//! - Customer: create/update requests and view
//! - Credit: application request and views
//! - Validation: field-level request checks

mod credits;
mod customers;
mod validation;

pub use credits::*;
pub use customers::*;
pub use validation::*;

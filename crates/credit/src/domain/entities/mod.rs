//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Customer: Person applying for credit, unique by tax id (CPF)
//! - Credit: Loan application owned by exactly one Customer

mod credit;
mod customer;

pub use credit::*;
pub use customer::*;

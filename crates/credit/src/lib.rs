//! Credit Domain Library
//!
//! Core domain types and interfaces for the credit application system.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Customer, Credit)
//!   - `value_objects/`: Immutable value types (Address, CreditStatus, CreditPolicy)
//!   - `services/`: Credit application rules
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces (Clock)
//!
//! # Usage
//!
//! ```rust,ignore
//! use credit::domain::{Credit, Customer, NewCredit};
//! use credit::ports::{CreditRepository, CustomerRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    fits_money_scale, validate_application, validate_credit_value, validate_first_installment,
    validate_installment_count, Address, Credit, CreditPolicy, CreditStatus, Customer,
    CustomerUpdate, DomainError, InstallmentWindow, NewCredit, UpperBound, MONEY_SCALE,
};
pub use ports::{
    Clock,
    // Repositories
    CreditRepository,
    CustomerRepository,
};

#[cfg(any(test, feature = "test-util"))]
pub use ports::FixedClock;

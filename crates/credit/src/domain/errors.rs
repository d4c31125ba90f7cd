//! Domain Errors
//!
//! Error types for domain operations.

use std::fmt::Display;

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Invalid first installment date {date}: must be after {today} and no later than {latest}")]
    InvalidInstallmentDate {
        date: NaiveDate,
        today: NaiveDate,
        latest: NaiveDate,
    },

    #[error("Invalid number of installments {count}: must be between {min} and {max}")]
    InvalidInstallmentCount { count: i32, min: i32, max: i32 },

    #[error("Credit {credit_code} does not belong to customer {customer_id}")]
    OwnershipMismatch { credit_code: Uuid, customer_id: i64 },

    #[error("Uniqueness violation: {0}")]
    UniquenessViolation(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>, I: Display>(entity_type: T, id: I) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    /// Customer id has no record
    pub fn customer_not_found(id: i64) -> Self {
        Self::not_found("Customer", id)
    }

    /// Credit code has no record
    pub fn credit_not_found(code: Uuid) -> Self {
        Self::not_found("Credit", code)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DomainError::customer_not_found(7);
        assert_eq!(err.to_string(), "Entity not found: Customer with id 7");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_ownership_mismatch_is_not_not_found() {
        let err = DomainError::OwnershipMismatch {
            credit_code: Uuid::nil(),
            customer_id: 2,
        };
        assert!(!err.is_not_found());
    }
}

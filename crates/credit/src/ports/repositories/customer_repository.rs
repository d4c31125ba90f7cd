//! Customer Repository Port
//!
//! Abstract interface for Customer persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Customer};

/// Repository interface for Customer entities
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find a Customer by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, DomainError>;

    /// Save a Customer (insert when `id` is `None`, update otherwise)
    ///
    /// A duplicate tax id fails with `DomainError::UniquenessViolation`.
    async fn save(&self, customer: &Customer) -> Result<Customer, DomainError>;

    /// Delete a Customer by ID, returning whether a record was removed
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}

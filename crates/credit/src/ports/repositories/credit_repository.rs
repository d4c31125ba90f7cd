//! Credit Repository Port
//!
//! Abstract interface for Credit persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Credit};

/// Repository interface for Credit entities
#[async_trait]
pub trait CreditRepository: Send + Sync {
    /// Insert a new Credit
    async fn insert(&self, credit: &Credit) -> Result<Credit, DomainError>;

    /// Find all Credits owned by a Customer
    async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<Credit>, DomainError>;

    /// Find a Credit by its code
    async fn find_by_credit_code(&self, credit_code: Uuid) -> Result<Option<Credit>, DomainError>;
}

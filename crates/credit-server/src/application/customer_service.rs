//! Customer Application Service (Use Case)
//!
//! Sole authority on whether a customer exists.

use std::sync::Arc;

use credit::{Customer, CustomerRepository, CustomerUpdate, DomainError};

/// Application service for Customer operations
pub struct CustomerService<R: CustomerRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CustomerRepository + ?Sized> CustomerService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Insert or update a Customer
    ///
    /// Duplicate tax ids surface as `DomainError::UniquenessViolation`
    /// exactly as the repository reports them.
    pub async fn save(&self, customer: &Customer) -> Result<Customer, DomainError> {
        let saved = self.repo.save(customer).await?;

        tracing::info!(
            "Saved Customer: {} ({})",
            saved.email,
            saved.id.unwrap_or_default()
        );

        Ok(saved)
    }

    /// Get a Customer by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Customer, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::customer_not_found(id))
    }

    /// Merge permitted fields into an existing Customer and save it
    pub async fn update(&self, id: i64, update: CustomerUpdate) -> Result<Customer, DomainError> {
        let current = self.find_by_id(id).await?;
        self.save(&current.apply_update(update)).await
    }

    /// Delete a Customer
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let customer = self.find_by_id(id).await?;

        if !self.repo.delete(id).await? {
            return Err(DomainError::customer_not_found(id));
        }

        tracing::info!("Deleted Customer: {} ({})", customer.email, id);
        Ok(())
    }
}

//! Credit Application Service (Use Case)
//!
//! Creates credit applications for existing customers and resolves
//! credits with an ownership check.

use std::sync::Arc;
use uuid::Uuid;

use credit::{
    validate_application, Clock, Credit, CreditPolicy, CreditRepository, CustomerRepository,
    DomainError, NewCredit,
};

use super::CustomerService;

/// Application service for Credit operations
pub struct CreditService<C, U>
where
    C: CreditRepository + ?Sized,
    U: CustomerRepository + ?Sized,
{
    repo: Arc<C>,
    customer_service: Arc<CustomerService<U>>,
    clock: Arc<dyn Clock>,
    policy: CreditPolicy,
}

impl<C, U> CreditService<C, U>
where
    C: CreditRepository + ?Sized,
    U: CustomerRepository + ?Sized,
{
    pub fn new(
        repo: Arc<C>,
        customer_service: Arc<CustomerService<U>>,
        clock: Arc<dyn Clock>,
        policy: CreditPolicy,
    ) -> Self {
        Self {
            repo,
            customer_service,
            clock,
            policy,
        }
    }

    pub fn policy(&self) -> &CreditPolicy {
        &self.policy
    }

    /// Create a Credit for an existing Customer
    ///
    /// Nothing is written unless the owner exists and every rule passes.
    pub async fn save(&self, application: NewCredit) -> Result<Credit, DomainError> {
        self.customer_service
            .find_by_id(application.customer_id)
            .await?;

        let today = self.clock.today();
        if let Err(e) = validate_application(&self.policy, &application, today) {
            tracing::warn!(
                "Rejected credit for Customer {}: {}",
                application.customer_id,
                e
            );
            return Err(e);
        }

        let saved = self.repo.insert(&Credit::new(application)).await?;

        tracing::info!(
            "Created Credit: {} for Customer {} - {} in {} installments",
            saved.credit_code,
            saved.customer_id,
            saved.credit_value,
            saved.number_of_installments
        );

        Ok(saved)
    }

    /// List Credits owned by a Customer
    ///
    /// Unknown customers yield an empty list, not an error.
    pub async fn find_all_by_customer(&self, customer_id: i64) -> Result<Vec<Credit>, DomainError> {
        self.repo.find_all_by_customer_id(customer_id).await
    }

    /// Get a Credit by code, checking it belongs to `customer_id`
    pub async fn find_by_credit_code(
        &self,
        customer_id: i64,
        credit_code: Uuid,
    ) -> Result<Credit, DomainError> {
        let credit = self
            .repo
            .find_by_credit_code(credit_code)
            .await?
            .ok_or_else(|| DomainError::credit_not_found(credit_code))?;

        if !credit.is_owned_by(customer_id) {
            tracing::warn!(
                "Credit {} requested by Customer {} but owned by {}",
                credit_code,
                customer_id,
                credit.customer_id
            );
            return Err(DomainError::OwnershipMismatch {
                credit_code,
                customer_id,
            });
        }

        Ok(credit)
    }
}

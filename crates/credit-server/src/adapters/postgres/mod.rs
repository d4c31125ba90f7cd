//! PostgreSQL Repository Implementations

mod credit_repository;
mod customer_repository;

pub use credit_repository::PgCreditRepository;
pub use customer_repository::PgCustomerRepository;

use credit::DomainError;

/// Map a driver error, surfacing unique-constraint failures as-is
fn map_db_error(e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_unique_violation() {
            return DomainError::UniquenessViolation(db_err.message().to_string());
        }
    }
    DomainError::Repository(e.to_string())
}

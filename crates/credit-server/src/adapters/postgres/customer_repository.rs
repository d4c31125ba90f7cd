//! PostgreSQL implementation of CustomerRepository

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use credit::{Address, Customer, CustomerRepository, DomainError};

use super::map_db_error;

/// PostgreSQL implementation of CustomerRepository
pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, customer: &Customer) -> Result<CustomerRow, sqlx::Error> {
        sqlx::query_as::<_, CustomerRow>(
            r#"
            INSERT INTO customers (first_name, last_name, cpf, email, income, password_hash, zip_code, street)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.cpf)
        .bind(&customer.email)
        .bind(customer.income)
        .bind(&customer.password_hash)
        .bind(&customer.address.zip_code)
        .bind(&customer.address.street)
        .fetch_one(&self.pool)
        .await
    }

    async fn update(
        &self,
        id: i64,
        customer: &Customer,
    ) -> Result<Option<CustomerRow>, sqlx::Error> {
        sqlx::query_as::<_, CustomerRow>(
            r#"
            UPDATE customers
            SET first_name = $2, last_name = $3, cpf = $4, email = $5, income = $6,
                password_hash = $7, zip_code = $8, street = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.cpf)
        .bind(&customer.email)
        .bind(customer.income)
        .bind(&customer.password_hash)
        .bind(&customer.address.zip_code)
        .bind(&customer.address.street)
        .fetch_optional(&self.pool)
        .await
    }
}

/// An UPDATE that matched no row means the customer was deleted concurrently
fn updated_customer(id: i64, row: Option<CustomerRow>) -> Result<Customer, DomainError> {
    row.map(Into::into)
        .ok_or_else(|| DomainError::customer_not_found(id))
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    first_name: String,
    last_name: String,
    cpf: String,
    email: String,
    income: Decimal,
    password_hash: String,
    zip_code: String,
    street: String,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            id: Some(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            cpf: row.cpf,
            email: row.email,
            income: row.income,
            password_hash: row.password_hash,
            address: Address {
                zip_code: row.zip_code,
                street: row.street,
            },
        }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, DomainError> {
        let row = sqlx::query_as::<_, CustomerRow>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(row.map(Into::into))
    }

    async fn save(&self, customer: &Customer) -> Result<Customer, DomainError> {
        if let Some(id) = customer.id {
            // Check if exists
            let exists = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM customers WHERE id = $1)",
            )
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

            if exists {
                let row = self.update(id, customer).await.map_err(map_db_error)?;
                return updated_customer(id, row);
            }
        }

        let row = self.insert(customer).await.map_err(map_db_error)?;
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

//! PostgreSQL implementation of CreditRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use credit::{Credit, CreditRepository, CreditStatus, DomainError};

use super::map_db_error;

/// PostgreSQL implementation of CreditRepository
pub struct PgCreditRepository {
    pool: PgPool,
}

impl PgCreditRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct CreditRow {
    id: i64,
    credit_code: Uuid,
    credit_value: Decimal,
    day_first_installment: NaiveDate,
    number_of_installments: i32,
    status: String,
    customer_id: i64,
}

impl TryFrom<CreditRow> for Credit {
    type Error = DomainError;

    fn try_from(row: CreditRow) -> Result<Self, Self::Error> {
        let status: CreditStatus = row.status.parse().map_err(DomainError::Repository)?;

        Ok(Self {
            id: Some(row.id),
            credit_code: row.credit_code,
            credit_value: row.credit_value,
            day_first_installment: row.day_first_installment,
            number_of_installments: row.number_of_installments,
            status,
            customer_id: row.customer_id,
        })
    }
}

#[async_trait]
impl CreditRepository for PgCreditRepository {
    async fn insert(&self, credit: &Credit) -> Result<Credit, DomainError> {
        let row = sqlx::query_as::<_, CreditRow>(
            r#"
            INSERT INTO credits (credit_code, credit_value, day_first_installment, number_of_installments, status, customer_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(credit.credit_code)
        .bind(credit.credit_value)
        .bind(credit.day_first_installment)
        .bind(credit.number_of_installments)
        .bind(credit.status.to_string())
        .bind(credit.customer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.try_into()
    }

    async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<Credit>, DomainError> {
        let rows = sqlx::query_as::<_, CreditRow>(
            "SELECT * FROM credits WHERE customer_id = $1 ORDER BY id",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn find_by_credit_code(&self, credit_code: Uuid) -> Result<Option<Credit>, DomainError> {
        let row = sqlx::query_as::<_, CreditRow>("SELECT * FROM credits WHERE credit_code = $1")
            .bind(credit_code)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        row.map(TryInto::try_into).transpose()
    }
}

//! Credit request/response DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use credit::{fits_money_scale, Credit, CreditPolicy, Customer, NewCredit, MONEY_SCALE};

use super::FieldErrors;

/// Credit application request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreditDto {
    #[schema(value_type = String, example = "1000.0")]
    pub credit_value: Decimal,
    #[serde(rename = "dayFirstInstallments")]
    pub day_first_installment: NaiveDate,
    pub number_of_installments: i32,
    pub customer_id: i64,
}

/// Single credit with owner summary
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreditView {
    pub credit_code: Uuid,
    #[schema(value_type = String)]
    pub credit_value: Decimal,
    pub number_of_installment: i32,
    pub status: String,
    pub email_customer: String,
    #[schema(value_type = String)]
    pub income_customer: Decimal,
}

/// Credit list item
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreditViewList {
    pub credit_code: Uuid,
    #[schema(value_type = String)]
    pub credit_value: Decimal,
    pub number_of_installments: i32,
}

/// `?customerId=` query parameter
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CustomerIdQuery {
    pub customer_id: i64,
}

impl CreditDto {
    /// Boundary checks: future first installment and installment range
    pub fn validate(&self, policy: &CreditPolicy, today: NaiveDate) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            self.credit_value > Decimal::ZERO,
            "creditValue",
            "must be positive",
        );
        errors.check(
            fits_money_scale(self.credit_value),
            "creditValue",
            &format!("must have at most {MONEY_SCALE} decimal places"),
        );
        errors.check(
            self.day_first_installment > today,
            "dayFirstInstallments",
            "must be a future date",
        );
        errors.check(
            (policy.min_installments..=policy.max_installments)
                .contains(&self.number_of_installments),
            "numberOfInstallments",
            &format!(
                "must be between {} and {}",
                policy.min_installments, policy.max_installments
            ),
        );
        errors.into_result()
    }
}

impl From<CreditDto> for NewCredit {
    fn from(dto: CreditDto) -> Self {
        Self {
            credit_value: dto.credit_value,
            day_first_installment: dto.day_first_installment,
            number_of_installments: dto.number_of_installments,
            customer_id: dto.customer_id,
        }
    }
}

impl CreditView {
    pub fn new(credit: Credit, owner: &Customer) -> Self {
        Self {
            credit_code: credit.credit_code,
            credit_value: credit.credit_value,
            number_of_installment: credit.number_of_installments,
            status: credit.status.to_string(),
            email_customer: owner.email.clone(),
            income_customer: owner.income,
        }
    }
}

impl From<Credit> for CreditViewList {
    fn from(credit: Credit) -> Self {
        Self {
            credit_code: credit.credit_code,
            credit_value: credit.credit_value,
            number_of_installments: credit.number_of_installments,
        }
    }
}

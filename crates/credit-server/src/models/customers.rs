//! Customer request/response DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use credit::{fits_money_scale, Address, Customer, CustomerUpdate, MONEY_SCALE};

use super::FieldErrors;
use crate::password::hash_password;

/// Create Customer request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub first_name: String,
    pub last_name: String,
    /// National tax identifier
    pub cpf: String,
    #[schema(value_type = String, example = "1000.0")]
    pub income: Decimal,
    pub email: String,
    pub password: String,
    pub zip_code: String,
    pub street: String,
}

/// Update Customer request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdateDto {
    pub first_name: String,
    pub last_name: String,
    #[schema(value_type = String, example = "5000.0")]
    pub income: Decimal,
    pub zip_code: String,
    pub street: String,
}

/// Customer response (never includes the credential)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerView {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    #[schema(value_type = String)]
    pub income: Decimal,
    pub email: String,
    pub zip_code: String,
    pub street: String,
}

fn check_income(errors: &mut FieldErrors, income: Decimal) {
    errors.check(income >= Decimal::ZERO, "income", "must not be negative");
    errors.check(
        fits_money_scale(income),
        "income",
        &format!("must have at most {MONEY_SCALE} decimal places"),
    );
}

impl CustomerDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("firstName", &self.first_name);
        errors.require("lastName", &self.last_name);
        errors.require("cpf", &self.cpf);
        errors.require("email", &self.email);
        errors.check(self.email.contains('@'), "email", "must be a valid email");
        errors.require("password", &self.password);
        check_income(&mut errors, self.income);
        errors.require("zipCode", &self.zip_code);
        errors.require("street", &self.street);
        errors.into_result()
    }

    /// Convert to a new Customer, hashing the password
    pub fn into_entity(self) -> Result<Customer, argon2::password_hash::Error> {
        let password_hash = hash_password(&self.password)?;

        Ok(Customer::new(
            self.first_name,
            self.last_name,
            self.cpf,
            self.email,
            self.income,
            password_hash,
            Address::new(self.zip_code, self.street),
        ))
    }
}

impl CustomerUpdateDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("firstName", &self.first_name);
        errors.require("lastName", &self.last_name);
        check_income(&mut errors, self.income);
        errors.require("zipCode", &self.zip_code);
        errors.require("street", &self.street);
        errors.into_result()
    }
}

impl From<CustomerUpdateDto> for CustomerUpdate {
    fn from(dto: CustomerUpdateDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            income: dto.income,
            zip_code: dto.zip_code,
            street: dto.street,
        }
    }
}

impl From<Customer> for CustomerView {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            cpf: customer.cpf,
            income: customer.income,
            email: customer.email,
            zip_code: customer.address.zip_code,
            street: customer.address.street,
        }
    }
}

//! Shared test fixtures

use chrono::NaiveDate;
use credit::{Address, Customer};
use rust_decimal::Decimal;

/// Fixed "today" used by date-sensitive tests
pub fn today() -> NaiveDate {
    date(2023, 7, 25)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn build_customer(cpf: &str) -> Customer {
    Customer::new(
        "Wilson".to_string(),
        "Silva".to_string(),
        cpf.to_string(),
        "wilson@gmail.com".to_string(),
        Decimal::new(1000, 0),
        "$argon2id$placeholder".to_string(),
        Address::new("12345", "Rua do Wilson, 123"),
    )
}

//! Credit - Loan application
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::CreditStatus;

/// Credit - Application owned by exactly one Customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit {
    /// Assigned by the store on insert
    pub id: Option<i64>,
    pub credit_code: Uuid,
    pub credit_value: Decimal,
    pub day_first_installment: NaiveDate,
    pub number_of_installments: i32,
    pub status: CreditStatus,
    pub customer_id: i64,
}

/// Caller-supplied credit application, before code and status are assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCredit {
    pub credit_value: Decimal,
    pub day_first_installment: NaiveDate,
    pub number_of_installments: i32,
    pub customer_id: i64,
}

impl Credit {
    /// Create a new Credit with a generated code in `IN_PROGRESS`
    pub fn new(application: NewCredit) -> Self {
        Self {
            id: None,
            credit_code: Uuid::new_v4(),
            credit_value: application.credit_value,
            day_first_installment: application.day_first_installment,
            number_of_installments: application.number_of_installments,
            status: CreditStatus::InProgress,
            customer_id: application.customer_id,
        }
    }

    pub fn is_owned_by(&self, customer_id: i64) -> bool {
        self.customer_id == customer_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application() -> NewCredit {
        NewCredit {
            credit_value: Decimal::new(1000, 0),
            day_first_installment: NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
            number_of_installments: 15,
            customer_id: 1,
        }
    }

    #[test]
    fn test_new_credit_is_in_progress() {
        let credit = Credit::new(application());
        assert_eq!(credit.status, CreditStatus::InProgress);
        assert!(credit.id.is_none());
        assert_eq!(credit.customer_id, 1);
    }

    #[test]
    fn test_new_credit_codes_are_unique() {
        let a = Credit::new(application());
        let b = Credit::new(application());
        assert_ne!(a.credit_code, b.credit_code);
    }

    #[test]
    fn test_ownership() {
        let credit = Credit::new(application());
        assert!(credit.is_owned_by(1));
        assert!(!credit.is_owned_by(2));
    }
}

//! Credit application rules
//!
//! Checks run before a credit is persisted. Each returns a typed
//! `DomainError` instead of a boolean so callers can propagate with `?`.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{
    errors::DomainError,
    value_objects::{CreditPolicy, InstallmentWindow},
    NewCredit,
};

/// First installment must fall inside the window relative to `today`
pub fn validate_first_installment(
    window: &InstallmentWindow,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<(), DomainError> {
    if window.contains(date, today) {
        return Ok(());
    }

    Err(DomainError::InvalidInstallmentDate {
        date,
        today,
        latest: window.latest(today),
    })
}

/// Number of installments must be within the policy range (inclusive)
pub fn validate_installment_count(policy: &CreditPolicy, count: i32) -> Result<(), DomainError> {
    if (policy.min_installments..=policy.max_installments).contains(&count) {
        return Ok(());
    }

    Err(DomainError::InvalidInstallmentCount {
        count,
        min: policy.min_installments,
        max: policy.max_installments,
    })
}

/// Decimal places a money amount may carry (matches the NUMERIC(19, 2) columns)
pub const MONEY_SCALE: u32 = 2;

/// True when `amount` fits in [`MONEY_SCALE`] decimal places; trailing zeros are ignored
pub fn fits_money_scale(amount: Decimal) -> bool {
    amount.normalize().scale() <= MONEY_SCALE
}

/// Principal must be strictly positive and expressible in cents
pub fn validate_credit_value(value: Decimal) -> Result<(), DomainError> {
    if value <= Decimal::ZERO {
        return Err(DomainError::Validation(format!(
            "credit value must be positive, got {value}"
        )));
    }
    if !fits_money_scale(value) {
        return Err(DomainError::Validation(format!(
            "credit value must have at most {MONEY_SCALE} decimal places, got {value}"
        )));
    }
    Ok(())
}

/// Run every application rule in order: date, installment count, value
pub fn validate_application(
    policy: &CreditPolicy,
    application: &NewCredit,
    today: NaiveDate,
) -> Result<(), DomainError> {
    validate_first_installment(
        &policy.first_installment,
        application.day_first_installment,
        today,
    )?;
    validate_installment_count(policy, application.number_of_installments)?;
    validate_credit_value(application.credit_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn application(day: NaiveDate, installments: i32, value: i64) -> NewCredit {
        NewCredit {
            credit_value: Decimal::new(value, 0),
            day_first_installment: day,
            number_of_installments: installments,
            customer_id: 1,
        }
    }

    #[test]
    fn test_first_installment_today_is_rejected() {
        let today = date(2023, 7, 25);
        let err = validate_first_installment(&InstallmentWindow::default(), today, today)
            .unwrap_err();

        match err {
            DomainError::InvalidInstallmentDate { latest, .. } => {
                assert_eq!(latest, date(2023, 9, 25))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_first_installment_too_far_is_rejected() {
        let today = date(2023, 7, 25);
        assert!(matches!(
            validate_first_installment(&InstallmentWindow::default(), date(2023, 10, 25), today),
            Err(DomainError::InvalidInstallmentDate { .. })
        ));
    }

    #[test]
    fn test_installment_count_range() {
        let policy = CreditPolicy::default();
        assert!(validate_installment_count(&policy, 1).is_ok());
        assert!(validate_installment_count(&policy, 48).is_ok());
        assert!(matches!(
            validate_installment_count(&policy, 0),
            Err(DomainError::InvalidInstallmentCount { count: 0, .. })
        ));
        assert!(matches!(
            validate_installment_count(&policy, 49),
            Err(DomainError::InvalidInstallmentCount { count: 49, .. })
        ));
    }

    #[test]
    fn test_credit_value_must_be_positive() {
        assert!(validate_credit_value(Decimal::new(1, 2)).is_ok());
        assert!(matches!(
            validate_credit_value(Decimal::ZERO),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_credit_value_rejects_sub_cent_amounts() {
        for raw in ["0.001", "1000.125"] {
            let value: Decimal = raw.parse().unwrap();
            assert!(
                matches!(validate_credit_value(value), Err(DomainError::Validation(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_credit_value_ignores_trailing_zeros() {
        let value: Decimal = "1000.1000".parse().unwrap();
        assert!(validate_credit_value(value).is_ok());
        assert!(fits_money_scale("12.34".parse().unwrap()));
    }

    #[test]
    fn test_application_checks_date_first() {
        let today = date(2023, 7, 25);
        let result = validate_application(
            &CreditPolicy::default(),
            &application(today, 99, -5),
            today,
        );
        assert!(matches!(
            result,
            Err(DomainError::InvalidInstallmentDate { .. })
        ));
    }

    #[test]
    fn test_valid_application() {
        let today = date(2023, 7, 25);
        assert!(validate_application(
            &CreditPolicy::default(),
            &application(date(2023, 9, 24), 15, 1000),
            today,
        )
        .is_ok());
    }
}

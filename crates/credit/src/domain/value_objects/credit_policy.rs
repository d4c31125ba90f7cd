//! CreditPolicy - Limits applied to every credit application

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Whether the last permitted first-installment date is itself allowed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UpperBound {
    #[default]
    Inclusive,
    Exclusive,
}

impl std::fmt::Display for UpperBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpperBound::Inclusive => write!(f, "inclusive"),
            UpperBound::Exclusive => write!(f, "exclusive"),
        }
    }
}

impl std::str::FromStr for UpperBound {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inclusive" => Ok(UpperBound::Inclusive),
            "exclusive" => Ok(UpperBound::Exclusive),
            _ => Err(format!("Unknown upper bound policy: {}", s)),
        }
    }
}

/// Window for the first installment date, relative to today
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstallmentWindow {
    pub max_months_ahead: u32,
    pub upper_bound: UpperBound,
}

impl InstallmentWindow {
    pub const DEFAULT_MAX_MONTHS_AHEAD: u32 = 2;

    pub fn new(max_months_ahead: u32, upper_bound: UpperBound) -> Self {
        Self {
            max_months_ahead,
            upper_bound,
        }
    }

    /// Last calendar date of the window (clamped to month end)
    pub fn latest(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_months(Months::new(self.max_months_ahead))
            .unwrap_or(NaiveDate::MAX)
    }

    /// `today < date <= latest` (or `< latest` when exclusive)
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        let latest = self.latest(today);
        let below_upper = match self.upper_bound {
            UpperBound::Inclusive => date <= latest,
            UpperBound::Exclusive => date < latest,
        };
        date > today && below_upper
    }
}

impl Default for InstallmentWindow {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_MONTHS_AHEAD, UpperBound::default())
    }
}

/// Limits for credit applications
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreditPolicy {
    pub first_installment: InstallmentWindow,
    pub min_installments: i32,
    pub max_installments: i32,
}

impl CreditPolicy {
    pub const MIN_INSTALLMENTS: i32 = 1;
    pub const MAX_INSTALLMENTS: i32 = 48;

    pub fn with_first_installment(mut self, window: InstallmentWindow) -> Self {
        self.first_installment = window;
        self
    }

    pub fn with_max_installments(mut self, max: i32) -> Self {
        self.max_installments = max;
        self
    }
}

impl Default for CreditPolicy {
    fn default() -> Self {
        Self {
            first_installment: InstallmentWindow::default(),
            min_installments: Self::MIN_INSTALLMENTS,
            max_installments: Self::MAX_INSTALLMENTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_bounds() {
        let today = date(2023, 7, 25);
        let window = InstallmentWindow::default();

        assert_eq!(window.latest(today), date(2023, 9, 25));
        assert!(!window.contains(today, today));
        assert!(window.contains(date(2023, 7, 26), today));
        assert!(window.contains(date(2023, 9, 24), today));
        assert!(window.contains(date(2023, 9, 25), today));
        assert!(!window.contains(date(2023, 10, 25), today));
        assert!(!window.contains(date(2023, 7, 1), today));
    }

    #[test]
    fn test_exclusive_upper_bound() {
        let today = date(2023, 7, 25);
        let window = InstallmentWindow::new(2, UpperBound::Exclusive);

        assert!(window.contains(date(2023, 9, 24), today));
        assert!(!window.contains(date(2023, 9, 25), today));
    }

    #[test]
    fn test_month_end_clamps() {
        let window = InstallmentWindow::default();
        assert_eq!(window.latest(date(2023, 12, 31)), date(2024, 2, 29));
    }

    #[test]
    fn test_upper_bound_parse() {
        assert_eq!("Exclusive".parse::<UpperBound>().unwrap(), UpperBound::Exclusive);
        assert!("open".parse::<UpperBound>().is_err());
    }

    #[test]
    fn test_default_policy() {
        let policy = CreditPolicy::default();
        assert_eq!(policy.min_installments, 1);
        assert_eq!(policy.max_installments, 48);
        assert_eq!(policy.first_installment.max_months_ahead, 2);
    }
}

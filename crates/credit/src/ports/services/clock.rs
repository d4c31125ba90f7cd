//! Clock Port
//!
//! Source of the current calendar date, so date rules can be
//! evaluated against a fixed day.

use chrono::NaiveDate;

/// Provides "today"
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Clock pinned to a single date (test support, behind the `test-util` feature)
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

#[cfg(any(test, feature = "test-util"))]
impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_pinned_date() {
        let day = NaiveDate::from_ymd_opt(2023, 7, 25).unwrap();
        let clock: &dyn Clock = &FixedClock(day);
        assert_eq!(clock.today(), day);
    }
}

//! System clock

use chrono::{NaiveDate, Utc};

use credit::Clock;

/// Clock backed by the system time (UTC calendar date)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

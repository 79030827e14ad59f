//! Clock abstraction so every date computation is a pure function of its inputs
//!
//! Production wiring binds `SystemClock`; tests bind `FixedClock` to a known
//! date so results are reproducible.

use chrono::{Local, NaiveDate};

/// Source of "today" for all period computations
pub trait Clock {
    /// Current calendar day
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation used in production wiring
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Fixed-instant clock for deterministic tests and date overrides
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_its_date() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 6).unwrap();
        assert_eq!(FixedClock(day).today(), day);
        assert_eq!(FixedClock(day).today(), day);
    }
}

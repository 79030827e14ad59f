//! Exact-day reminder trigger rule
//!
//! A reminder fires on exactly one calendar day: `deadline - offset_days`.
//! There is no "on or after" recovery; a scheduler that misses its run on
//! that day never fires for that deadline. Known fragility, kept as-is
//! because downstream deduplication relies on the single-day semantics.

use chrono::{Duration, NaiveDate};

/// Whether `now` is exactly `offset_days` before `deadline`
///
/// Calendar-day equality only; time of day plays no part.
pub fn should_trigger(deadline: NaiveDate, offset_days: i64, now: NaiveDate) -> bool {
    let target = deadline - Duration::days(offset_days);
    now == target
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_fires_only_on_the_exact_day() {
        let deadline = d(2025, 3, 10);
        assert!(should_trigger(deadline, 4, d(2025, 3, 6)));
        assert!(!should_trigger(deadline, 4, d(2025, 3, 5)));
        assert!(!should_trigger(deadline, 4, d(2025, 3, 7)));
    }

    #[test]
    fn test_zero_offset_fires_on_the_deadline_itself() {
        let deadline = d(2025, 3, 10);
        assert!(should_trigger(deadline, 0, deadline));
        assert!(!should_trigger(deadline, 0, d(2025, 3, 9)));
    }

    #[test]
    fn test_offset_crosses_month_boundary() {
        assert!(should_trigger(d(2025, 3, 2), 4, d(2025, 2, 26)));
        assert!(should_trigger(d(2024, 3, 2), 4, d(2024, 2, 27)));
    }
}

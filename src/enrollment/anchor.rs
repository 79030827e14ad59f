//! Renewal anchor: which academic year a beneficiary's renewal hangs on
//!
//! Picks the most relevant enrollment period (ongoing first, else the one
//! started last), derives a reference date from it, and maps that date to a
//! Sept 1 anchor.
//!
//! Two quirks inherited from long-standing production behavior, kept exactly:
//! - the year derivation flips in **October** (`month > 9`), not September
//!   like `calendar::year_of`; the two thresholds are intentionally not
//!   unified because recomputed anchors must match historical values;
//! - when today falls in July or August, the reference date is pushed one
//!   year forward, so the summer gap counts toward the upcoming year.

use crate::calendar::TimeInterval;
use crate::clock::Clock;
use crate::error::PeriodError;
use chrono::{Datelike, NaiveDate};
use std::cmp::Ordering;

/// Sept 1 of the academic year that should anchor a renewal calculation
///
/// Fails only on an empty enrollment list; there is nothing to anchor on.
pub fn anchor_year_start(
    enrollments: &[TimeInterval],
    clock: &impl Clock,
) -> Result<NaiveDate, PeriodError> {
    let mut sorted: Vec<&TimeInterval> = enrollments.iter().collect();
    sorted.sort_by(|a, b| match (a.end, b.end) {
        // Ongoing enrollment is always the most relevant
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        _ => b.start.cmp(&a.start),
    });

    let latest = *sorted.first().ok_or(PeriodError::EmptyEnrollments)?;

    let today = clock.today();
    let reference = latest.end.unwrap_or(today);

    let month = reference.month();
    let mut year = reference.year();
    // Today in Jul–Aug: the summer gap belongs to the upcoming academic year
    if today.month() > 6 && today.month() < 9 {
        year += 1;
    }

    // October threshold, unlike calendar::year_of
    let label = if month > 9 { year } else { year - 1 };
    Ok(NaiveDate::from_ymd_opt(label, 9, 1).expect("valid calendar date"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn closed(start: NaiveDate, end: NaiveDate) -> TimeInterval {
        TimeInterval::closed(start, end).unwrap()
    }

    #[test]
    fn test_single_closed_enrollment_outside_summer() {
        let enrollments = vec![closed(d(2024, 9, 1), d(2025, 6, 30))];
        let clock = FixedClock(d(2025, 3, 1));
        assert_eq!(anchor_year_start(&enrollments, &clock).unwrap(), d(2024, 9, 1));
    }

    #[test]
    fn test_empty_list_is_invalid_input() {
        let clock = FixedClock(d(2025, 3, 1));
        assert_eq!(
            anchor_year_start(&[], &clock).unwrap_err(),
            PeriodError::EmptyEnrollments
        );
    }

    #[test]
    fn test_ongoing_enrollment_wins_over_later_closed_one() {
        let enrollments = vec![
            closed(d(2024, 9, 1), d(2025, 6, 30)),
            TimeInterval::open_ended(d(2023, 9, 1)),
        ];
        // Ongoing period uses today as reference: Mar 2025, Oct rule -> 2024
        let clock = FixedClock(d(2025, 3, 1));
        assert_eq!(anchor_year_start(&enrollments, &clock).unwrap(), d(2024, 9, 1));
    }

    #[test]
    fn test_closed_enrollments_pick_latest_start() {
        let enrollments = vec![
            closed(d(2022, 9, 1), d(2023, 6, 30)),
            closed(d(2024, 9, 1), d(2025, 6, 30)),
            closed(d(2023, 9, 1), d(2024, 6, 30)),
        ];
        let clock = FixedClock(d(2025, 10, 1));
        assert_eq!(anchor_year_start(&enrollments, &clock).unwrap(), d(2024, 9, 1));
    }

    #[test]
    fn test_october_threshold_on_reference_month() {
        // End in October: the year has flipped under the enrollment rule
        let enrollments = vec![closed(d(2025, 9, 1), d(2025, 10, 15))];
        let clock = FixedClock(d(2025, 11, 1));
        assert_eq!(anchor_year_start(&enrollments, &clock).unwrap(), d(2025, 9, 1));

        // End in September: still the previous year, unlike calendar::year_of
        let enrollments = vec![closed(d(2025, 9, 1), d(2025, 9, 15))];
        assert_eq!(anchor_year_start(&enrollments, &clock).unwrap(), d(2024, 9, 1));
    }

    #[test]
    fn test_summer_gap_advances_the_anchor() {
        let enrollments = vec![closed(d(2024, 9, 1), d(2025, 6, 30))];
        // Same enrollment, evaluated in July: anchor moves one year forward
        let clock = FixedClock(d(2025, 7, 15));
        assert_eq!(anchor_year_start(&enrollments, &clock).unwrap(), d(2025, 9, 1));
        // Aug 31 still counts as summer, Sept 1 no longer does
        let clock = FixedClock(d(2025, 8, 31));
        assert_eq!(anchor_year_start(&enrollments, &clock).unwrap(), d(2025, 9, 1));
        let clock = FixedClock(d(2025, 9, 1));
        assert_eq!(anchor_year_start(&enrollments, &clock).unwrap(), d(2024, 9, 1));
    }

    #[test]
    fn test_ongoing_enrollment_in_summer() {
        let enrollments = vec![TimeInterval::open_ended(d(2024, 9, 1))];
        // Today Jul 2025 is both the reference and the summer trigger:
        // reference 2025-07, advanced to 2026-07, Oct rule -> 2025
        let clock = FixedClock(d(2025, 7, 10));
        assert_eq!(anchor_year_start(&enrollments, &clock).unwrap(), d(2025, 9, 1));
    }

    #[test]
    fn test_referential_transparency() {
        let enrollments = vec![closed(d(2024, 9, 1), d(2025, 6, 30))];
        let clock = FixedClock(d(2025, 3, 1));
        let first = anchor_year_start(&enrollments, &clock).unwrap();
        let second = anchor_year_start(&enrollments, &clock).unwrap();
        assert_eq!(first, second);
    }
}

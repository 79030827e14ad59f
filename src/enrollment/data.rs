//! Beneficiary enrollment records

use super::anchor::anchor_year_start;
use crate::calendar::TimeInterval;
use crate::clock::Clock;
use crate::error::PeriodError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One period during which a person is eligible for accommodations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeneficiaryEnrollment {
    /// Identifier of the beneficiary this period belongs to
    pub beneficiary_id: u32,

    /// Eligibility period; open-ended while the file is still active
    #[serde(flatten)]
    pub period: TimeInterval,
}

impl BeneficiaryEnrollment {
    /// Attach an eligibility period to a beneficiary
    pub fn new(beneficiary_id: u32, period: TimeInterval) -> Self {
        Self {
            beneficiary_id,
            period,
        }
    }

    /// Whether the beneficiary is eligible on `day`
    pub fn is_active_on(&self, day: NaiveDate) -> bool {
        self.period.contains(day)
    }

    /// Sept 1 anchoring the renewal of a beneficiary's file
    ///
    /// All of `enrollments` are expected to belong to the same beneficiary.
    pub fn renewal_anchor(
        enrollments: &[BeneficiaryEnrollment],
        clock: &impl Clock,
    ) -> Result<NaiveDate, PeriodError> {
        let periods: Vec<TimeInterval> = enrollments.iter().map(|e| e.period).collect();
        anchor_year_start(&periods, clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_renewal_anchor_delegates_to_periods() {
        let enrollments = vec![
            BeneficiaryEnrollment::new(7, TimeInterval::closed(d(2024, 9, 1), d(2025, 6, 30)).unwrap()),
            BeneficiaryEnrollment::new(7, TimeInterval::closed(d(2023, 9, 1), d(2024, 6, 30)).unwrap()),
        ];
        let clock = FixedClock(d(2025, 3, 1));
        let anchor = BeneficiaryEnrollment::renewal_anchor(&enrollments, &clock).unwrap();
        assert_eq!(anchor, d(2024, 9, 1));
    }

    #[test]
    fn test_is_active_on() {
        let enrollment =
            BeneficiaryEnrollment::new(7, TimeInterval::closed(d(2024, 9, 1), d(2025, 6, 30)).unwrap());
        assert!(enrollment.is_active_on(d(2025, 1, 15)));
        assert!(!enrollment.is_active_on(d(2025, 7, 1)));
    }
}

//! Domain error type
//!
//! Almost everything in this crate degrades to `None` on "no match" rather
//! than erroring; the error enum covers the few genuinely invalid inputs.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by period computations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    /// Renewal anchor requested for a beneficiary with no enrollment at all
    #[error("cannot derive an anchor year from an empty enrollment list")]
    EmptyEnrollments,

    /// Interval constructed with `end` before `start`
    #[error("interval end {end} precedes start {start}")]
    InvertedInterval { start: NaiveDate, end: NaiveDate },
}

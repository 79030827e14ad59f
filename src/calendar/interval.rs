//! Time intervals with an optional open end
//!
//! `end == None` means "still active": campaign windows still accepting
//! requests and enrollments that have not been closed out.

use crate::error::PeriodError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A calendar interval, inclusive on both bounds, possibly open-ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    /// First day of the interval
    pub start: NaiveDate,

    /// Last day of the interval; `None` while the interval is still active
    pub end: Option<NaiveDate>,
}

impl TimeInterval {
    /// Build an interval, rejecting `end < start`
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Result<Self, PeriodError> {
        if let Some(end) = end {
            if end < start {
                return Err(PeriodError::InvertedInterval { start, end });
            }
        }
        Ok(Self { start, end })
    }

    /// Closed interval covering `start..=end`
    pub fn closed(start: NaiveDate, end: NaiveDate) -> Result<Self, PeriodError> {
        Self::new(start, Some(end))
    }

    /// Interval that started and has not ended
    pub fn open_ended(start: NaiveDate) -> Self {
        Self { start, end: None }
    }

    /// Whether the interval has no end date yet
    pub fn is_open_ended(&self) -> bool {
        self.end.is_none()
    }

    /// Whether `day` falls inside the interval (both bounds inclusive)
    ///
    /// An open-ended interval contains every day from `start` onward.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && self.end.map_or(true, |end| day <= end)
    }

    /// Whether the interval closed strictly before `day`
    pub fn ended_before(&self, day: NaiveDate) -> bool {
        self.end.map_or(false, |end| end < day)
    }

    /// Whether the interval opens strictly after `day`
    pub fn starts_after(&self, day: NaiveDate) -> bool {
        self.start > day
    }
}

//! Academic-year arithmetic
//!
//! An academic year runs Sept 1 of its label year through Aug 31 of the
//! following year. The label flips in September: any date from Sept 1 onward
//! belongs to the year starting that September, regardless of day-of-month.
//!
//! Note: the enrollment renewal anchor uses a *different* (October) month
//! threshold, kept deliberately separate in `enrollment::anchor`.

use super::TimeInterval;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// First month of the academic year
const YEAR_START_MONTH: u32 = 9;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Label year of the academic year containing `date`
///
/// September through December map to the current calendar year, January
/// through August to the previous one.
pub fn year_of(date: NaiveDate) -> i32 {
    if date.month() >= YEAR_START_MONTH {
        date.year()
    } else {
        date.year() - 1
    }
}

/// `(Sept 1, Aug 31)` bounds of the academic year containing `date`
pub fn bounds_of(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let year = AcademicYear::containing(date);
    (year.start, year.end)
}

/// Which fixed semester `date` falls in
pub fn semester_of(date: NaiveDate) -> Semester {
    if date.month() >= YEAR_START_MONTH {
        Semester::First
    } else {
        Semester::Second
    }
}

/// One of the two fixed semesters of an academic year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Semester {
    /// Sept 1 through Dec 31 of the label year
    First,
    /// Jan 1 through Aug 31 of the following year
    Second,
}

/// Derived academic-year value: never persisted, always computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicYear {
    /// Calendar year the academic year starts in
    pub label: i32,

    /// Sept 1 of the label year
    pub start: NaiveDate,

    /// Aug 31 of the following year
    pub end: NaiveDate,
}

impl AcademicYear {
    /// Academic year with the given label year
    pub fn from_label(label: i32) -> Self {
        Self {
            label,
            start: ymd(label, 9, 1),
            end: ymd(label + 1, 8, 31),
        }
    }

    /// Academic year containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self::from_label(year_of(date))
    }

    /// Whether `day` falls inside this academic year
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Bounds of one of the two fixed semesters
    pub fn semester(&self, semester: Semester) -> TimeInterval {
        match semester {
            Semester::First => TimeInterval {
                start: self.start,
                end: Some(ymd(self.label, 12, 31)),
            },
            Semester::Second => TimeInterval {
                start: ymd(self.label + 1, 1, 1),
                end: Some(self.end),
            },
        }
    }

    /// Display label, e.g. `2024-2025`
    pub fn display_label(&self) -> String {
        format!("{}-{}", self.label, self.label + 1)
    }
}

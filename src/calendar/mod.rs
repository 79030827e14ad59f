//! Calendar primitives: bounded/open intervals and academic-year arithmetic

mod academic_year;
mod interval;

pub use academic_year::{bounds_of, semester_of, year_of, AcademicYear, Semester};
pub use interval::TimeInterval;

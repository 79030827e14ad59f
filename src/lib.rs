//! Oasis Periods - Academic-period and campaign-window engine for the Oasis platform
//!
//! This library provides:
//! - Academic-year and semester arithmetic (Sept 1 - Aug 31 spans)
//! - Current/previous/next campaign resolution for request-submission windows
//! - Offset-based reminder trigger evaluation and the nightly deadline sweep
//! - Renewal-anchor computation from beneficiary enrollment periods
//!
//! Everything is a pure function of its inputs and an injected clock; the
//! surrounding platform (database, mailer, scheduler, HTTP resources) calls
//! in and consumes the derived values.

pub mod calendar;
pub mod campaign;
pub mod clock;
pub mod enrollment;
pub mod error;
pub mod reminder;

// Re-export commonly used types
pub use calendar::{AcademicYear, Semester, TimeInterval};
pub use campaign::{Campaign, CampaignPartition};
pub use clock::{Clock, FixedClock, SystemClock};
pub use enrollment::BeneficiaryEnrollment;
pub use error::PeriodError;
pub use reminder::DeadlineRecord;

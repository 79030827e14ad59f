//! Nightly sweep deciding which deadline reminders are due today
//!
//! The no-match case is the normal one on most nights; it returns an empty
//! list rather than an error so the scheduler logs stay quiet.

use super::window::should_trigger;
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// One offset-based reminder anchored on a fixed deadline ("date butoir")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineRecord {
    /// Unique record identifier
    pub deadline_id: u32,

    /// What the reminder is about, e.g. "Renouvellement AMENAGEMENT"
    pub label: String,

    /// The anchoring deadline
    pub deadline: NaiveDate,

    /// How many days before the deadline the reminder fires
    pub offset_days: i64,
}

impl DeadlineRecord {
    /// Whether this record's reminder is due on `day`
    pub fn is_due_on(&self, day: NaiveDate) -> bool {
        should_trigger(self.deadline, self.offset_days, day)
    }
}

/// Records from `deadlines` whose trigger day is exactly `today`
///
/// Input order is preserved in the output.
pub fn sweep_due<'a>(deadlines: &'a [DeadlineRecord], today: NaiveDate) -> Vec<&'a DeadlineRecord> {
    let due: Vec<&DeadlineRecord> = deadlines
        .par_iter()
        .filter(|record| record.is_due_on(today))
        .collect();

    if due.is_empty() {
        log::debug!("reminder sweep on {today}: nothing due out of {}", deadlines.len());
    } else {
        log::info!(
            "reminder sweep on {today}: {} of {} deadlines due",
            due.len(),
            deadlines.len()
        );
    }

    due
}

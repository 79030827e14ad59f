//! Campaign records: time-bounded request-submission windows

use crate::calendar::TimeInterval;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A request-submission window tied to a request type
///
/// Several campaigns may exist per request type over the years; under normal
/// data at most one is open at any instant, but nothing in storage enforces
/// that, so the resolver tolerates overlaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    /// Unique campaign identifier
    pub campaign_id: u32,

    /// Human-readable label, e.g. "Campagne 2024-2025"
    pub label: String,

    /// Identifier of the request type this campaign belongs to
    pub request_type: String,

    /// Submission window; open-ended while the closing date is undecided
    #[serde(flatten)]
    pub window: TimeInterval,
}

impl Campaign {
    /// Create a campaign over the given window
    pub fn new(
        campaign_id: u32,
        label: impl Into<String>,
        request_type: impl Into<String>,
        window: TimeInterval,
    ) -> Self {
        Self {
            campaign_id,
            label: label.into(),
            request_type: request_type.into(),
            window,
        }
    }

    /// Whether the submission window is open on `day`
    pub fn is_open_on(&self, day: NaiveDate) -> bool {
        self.window.contains(day)
    }
}

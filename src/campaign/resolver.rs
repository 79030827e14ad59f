//! Partition campaigns into current / previous / next relative to a day
//!
//! Single pass, no allocation. The tie-breaks are iteration-order dependent
//! on malformed data (overlapping "current" windows, equal end or start
//! dates): the last current match wins, the first-found candidate wins ties
//! for previous/next because the comparisons are strict. Callers needing
//! deterministic results must sort their input (by id or start) upstream.

use super::Campaign;
use chrono::NaiveDate;

/// Result of resolving a campaign list against a reference day
///
/// Every slot is `None` when no campaign qualifies; an empty input resolves
/// to all-`None` without error.
#[derive(Debug, Clone, Copy, Default)]
pub struct CampaignPartition<'a> {
    /// Campaign whose window contains the reference day
    pub current: Option<&'a Campaign>,

    /// Closed campaign with the latest end before the reference day
    pub previous: Option<&'a Campaign>,

    /// Upcoming campaign with the earliest start after the reference day
    pub next: Option<&'a Campaign>,
}

/// Resolve `campaigns` against `now`
pub fn resolve(campaigns: &[Campaign], now: NaiveDate) -> CampaignPartition<'_> {
    let mut partition = CampaignPartition::default();

    for campaign in campaigns {
        if campaign.window.contains(now) {
            partition.current = Some(campaign);
            // A current campaign never competes for previous/next
            continue;
        }

        if campaign.window.ended_before(now) {
            let latest_end = partition.previous.and_then(|p| p.window.end);
            if latest_end.is_none() || campaign.window.end > latest_end {
                partition.previous = Some(campaign);
            }
        } else if campaign.window.starts_after(now) {
            match partition.next {
                Some(next) if campaign.window.start >= next.window.start => {}
                _ => partition.next = Some(campaign),
            }
        }
    }

    partition
}

//! CSV-based campaign loader
//!
//! Schedulers and reporting binaries run against flat extracts of the
//! campaign table rather than a live database connection.
//!
//! Expected columns: `campaign_id,label,request_type,start,end`
//! with ISO dates and an empty `end` for a still-open window.
//! Record order is preserved; the resolver's tie-breaks depend on it.

use super::Campaign;
use crate::calendar::TimeInterval;
use chrono::NaiveDate;
use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Default campaign extract location
pub const DEFAULT_CAMPAIGNS_FILE: &str = "data/campaigns.csv";

/// Load campaigns from the default extract
pub fn load_campaigns() -> Result<Vec<Campaign>, Box<dyn Error>> {
    load_campaigns_path(Path::new(DEFAULT_CAMPAIGNS_FILE))
}

/// Load campaigns from a CSV extract at `path`
pub fn load_campaigns_path(path: &Path) -> Result<Vec<Campaign>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut campaigns = Vec::new();

    for result in reader.records() {
        let record = result?;
        let campaign_id: u32 = record[0].parse()?;
        let label = record[1].to_string();
        let request_type = record[2].to_string();
        let start: NaiveDate = record[3].parse()?;
        let end = match record[4].trim() {
            "" => None,
            value => Some(value.parse::<NaiveDate>()?),
        };

        campaigns.push(Campaign::new(
            campaign_id,
            label,
            request_type,
            TimeInterval::new(start, end)?,
        ));
    }

    log::debug!("loaded {} campaigns from {}", campaigns.len(), path.display());
    Ok(campaigns)
}

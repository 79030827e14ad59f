//! Campaign status report across request types
//!
//! Loads a campaign extract, resolves current/previous/next per request
//! type for a reference day, and prints a table or JSON.

use chrono::NaiveDate;
use clap::Parser;
use oasis_periods::calendar::AcademicYear;
use oasis_periods::campaign::{self, load_campaigns_path, Campaign, DEFAULT_CAMPAIGNS_FILE};
use oasis_periods::{Clock, SystemClock};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "campaign_status", about = "Resolve campaign windows per request type")]
struct Args {
    /// Campaign extract to load
    #[arg(long, default_value = DEFAULT_CAMPAIGNS_FILE)]
    campaigns: PathBuf,

    /// Reference day (defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

/// One resolved request type in the JSON output
#[derive(Debug, Serialize)]
struct StatusRow<'a> {
    request_type: &'a str,
    academic_year: String,
    current: Option<&'a Campaign>,
    previous: Option<&'a Campaign>,
    next: Option<&'a Campaign>,
}

fn slot(c: Option<&Campaign>) -> String {
    c.map_or("-".to_string(), |c| c.label.clone())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let today = args.date.unwrap_or_else(|| SystemClock.today());
    let campaigns = load_campaigns_path(&args.campaigns).expect("Failed to load campaigns");

    // Group by request type, preserving extract order within each group
    let mut by_type: BTreeMap<&str, Vec<Campaign>> = BTreeMap::new();
    for campaign in &campaigns {
        by_type
            .entry(campaign.request_type.as_str())
            .or_default()
            .push(campaign.clone());
    }

    let year = AcademicYear::containing(today);

    if args.json {
        let rows: Vec<StatusRow> = by_type
            .iter()
            .map(|(request_type, group)| {
                let partition = campaign::resolve(group, today);
                StatusRow {
                    request_type,
                    academic_year: year.display_label(),
                    current: partition.current,
                    previous: partition.previous,
                    next: partition.next,
                }
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows).expect("serializable report"));
        return;
    }

    println!("Campaign status on {today} (academic year {})", year.display_label());
    println!("{:<16} {:<28} {:<28} {:<28}", "RequestType", "Current", "Previous", "Next");
    println!("{}", "-".repeat(100));
    for (request_type, group) in &by_type {
        let partition = campaign::resolve(group, today);
        println!(
            "{:<16} {:<28} {:<28} {:<28}",
            request_type,
            slot(partition.current),
            slot(partition.previous),
            slot(partition.next),
        );
    }
}

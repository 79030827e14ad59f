//! Nightly reminder sweep over a deadline extract
//!
//! Prints the records due on the reference day; exits quietly when nothing
//! is due, which is the normal case on most nights.

use chrono::NaiveDate;
use clap::Parser;
use oasis_periods::reminder::{load_deadlines_path, sweep_due, DEFAULT_DEADLINES_FILE};
use oasis_periods::{Clock, SystemClock};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "reminder_sweep", about = "List deadline reminders due today")]
struct Args {
    /// Deadline extract to load
    #[arg(long, default_value = DEFAULT_DEADLINES_FILE)]
    deadlines: PathBuf,

    /// Reference day (defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let today = args.date.unwrap_or_else(|| SystemClock.today());
    let deadlines = load_deadlines_path(&args.deadlines).expect("Failed to load deadlines");

    let due = sweep_due(&deadlines, today);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&due).expect("serializable records"));
        return;
    }

    if due.is_empty() {
        println!("No reminders due on {today} ({} deadlines checked)", deadlines.len());
        return;
    }

    println!("Reminders due on {today}:");
    println!("{:<10} {:<36} {:<12} {:>6}", "Id", "Label", "Deadline", "Offset");
    println!("{}", "-".repeat(68));
    for record in due {
        println!(
            "{:<10} {:<36} {:<12} {:>6}",
            record.deadline_id, record.label, record.deadline, record.offset_days,
        );
    }
}

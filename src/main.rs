//! Oasis Periods CLI
//!
//! Quick demonstration of the period engine on sample campaign data

use chrono::NaiveDate;
use oasis_periods::calendar::{self, AcademicYear, Semester};
use oasis_periods::campaign::{self, Campaign};
use oasis_periods::{Clock, SystemClock, TimeInterval};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

fn slot(c: Option<&Campaign>) -> String {
    match c {
        Some(c) => format!(
            "{} ({} .. {})",
            c.label,
            c.window.start,
            c.window.end.map_or("open".to_string(), |e| e.to_string()),
        ),
        None => "-".to_string(),
    }
}

fn main() {
    env_logger::init();

    let today = SystemClock.today();

    println!("Oasis Periods v0.1.0");
    println!("====================\n");

    let year = AcademicYear::containing(today);
    println!("Today: {today}");
    println!(
        "  Academic year: {} ({} .. {})",
        year.display_label(),
        year.start,
        year.end
    );
    println!("  Semester: {:?}", calendar::semester_of(today));
    println!();

    // Sample campaigns for one request type across three academic years
    let campaigns = vec![
        Campaign::new(
            1,
            "Campagne 2023-2024",
            "AMENAGEMENT",
            TimeInterval::closed(date(2023, 9, 1), date(2023, 12, 15)).expect("valid window"),
        ),
        Campaign::new(
            2,
            "Campagne 2024-2025",
            "AMENAGEMENT",
            TimeInterval::closed(date(2024, 9, 1), date(2024, 12, 15)).expect("valid window"),
        ),
        Campaign::new(
            3,
            "Campagne 2025-2026",
            "AMENAGEMENT",
            TimeInterval::closed(date(2025, 9, 1), date(2025, 12, 15)).expect("valid window"),
        ),
    ];

    let partition = campaign::resolve(&campaigns, today);

    println!("Campaigns for AMENAGEMENT relative to {today}:");
    println!("  current:  {}", slot(partition.current));
    println!("  previous: {}", slot(partition.previous));
    println!("  next:     {}", slot(partition.next));
    println!();

    let s1 = year.semester(Semester::First);
    let s2 = year.semester(Semester::Second);
    println!("Semester boundaries for {}:", year.display_label());
    println!("  S1: {} .. {}", s1.start, s1.end.expect("closed semester"));
    println!("  S2: {} .. {}", s2.start, s2.end.expect("closed semester"));
}

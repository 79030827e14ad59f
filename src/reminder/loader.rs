//! CSV-based deadline loader
//!
//! Expected columns: `deadline_id,label,deadline,offset_days`
//! with an ISO deadline date.

use super::DeadlineRecord;
use chrono::NaiveDate;
use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Default deadline extract location
pub const DEFAULT_DEADLINES_FILE: &str = "data/deadlines.csv";

/// Load deadline records from the default extract
pub fn load_deadlines() -> Result<Vec<DeadlineRecord>, Box<dyn Error>> {
    load_deadlines_path(Path::new(DEFAULT_DEADLINES_FILE))
}

/// Load deadline records from a CSV extract at `path`
pub fn load_deadlines_path(path: &Path) -> Result<Vec<DeadlineRecord>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut deadlines = Vec::new();

    for result in reader.records() {
        let record = result?;
        let deadline_id: u32 = record[0].parse()?;
        let label = record[1].to_string();
        let deadline: NaiveDate = record[2].parse()?;
        let offset_days: i64 = record[3].parse()?;

        deadlines.push(DeadlineRecord {
            deadline_id,
            label,
            deadline,
            offset_days,
        });
    }

    log::debug!("loaded {} deadlines from {}", deadlines.len(), path.display());
    Ok(deadlines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_deadlines() {
        let dir = std::env::temp_dir();
        let path = dir.join("oasis_periods_test_deadlines.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "deadline_id,label,deadline,offset_days").unwrap();
        writeln!(file, "1,Renouvellement AMENAGEMENT,2025-03-10,4").unwrap();

        let deadlines = load_deadlines_path(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(deadlines.len(), 1);
        assert_eq!(deadlines[0].offset_days, 4);
        assert_eq!(
            deadlines[0].deadline,
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
        );
    }
}

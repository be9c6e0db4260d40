use crate::store::AttendanceRecord;
use anyhow::Context;
use chrono::{Local, TimeZone};
use std::path::{Path, PathBuf};

pub const CSV_HEADER: &str = "Student Name,Time,Date";

/// Distinct "nothing to export" condition; the caller decides how to surface
/// it (a blocking alert in the frontend).
#[derive(Debug, PartialEq, Eq)]
pub struct NothingToExport;

fn csv_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn local_date_of(timestamp_ms: i64) -> String {
    Local
        .timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.format("%-m/%-d/%Y").to_string())
        .unwrap_or_default()
}

/// Builds the delimited text: fixed header, then one quoted row per record in
/// list order. The Date column is derived from the stored epoch at export
/// time while Time is the string captured at marking time; the two can
/// disagree if the clock or locale changed in between, and that asymmetry is
/// kept as-is.
pub fn to_csv(records: &[AttendanceRecord]) -> Result<String, NothingToExport> {
    if records.is_empty() {
        return Err(NothingToExport);
    }
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for r in records {
        csv.push_str(&format!(
            "{},{},{}\n",
            csv_quote(&r.name),
            csv_quote(&r.time),
            csv_quote(&local_date_of(r.timestamp)),
        ));
    }
    Ok(csv)
}

/// Writes the CSV under the daemon-side rendition of the browser download:
/// `attendance_YYYY-MM-DD.csv` (current local date) inside `out_dir`.
pub fn write_csv_file(out_dir: &Path, csv: &str) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create directory {}", out_dir.to_string_lossy()))?;
    let file_name = format!("attendance_{}.csv", Local::now().format("%Y-%m-%d"));
    let path = out_dir.join(file_name);
    std::fs::write(&path, csv)
        .with_context(|| format!("failed to write {}", path.to_string_lossy()))?;
    Ok(path)
}

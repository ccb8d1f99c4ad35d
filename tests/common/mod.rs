//! Common test helpers and utilities shared across test suite.

use chrono::{Duration, NaiveDate};
use ddcorpus::{generate_filename, scan, ScanConfig, ScanResult};

/// Shorthand for a calendar date.
#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Filenames for every page of one issue held by one library.
#[allow(dead_code)]
pub fn issue_pages(code: &str, day: NaiveDate, pages: u16, library: &str) -> Vec<String> {
    use chrono::Datelike;

    (1..=pages)
        .map(|page| {
            generate_filename(code, day.year(), day.month(), day.day(), page, library, None, "jpg")
                .expect("valid test filename")
        })
        .collect()
}

/// A run of `count` issues, `step_days` apart, each with `pages` pages.
#[allow(dead_code)]
pub fn regular_run(
    code: &str,
    start: NaiveDate,
    step_days: i64,
    count: i64,
    pages: u16,
    library: &str,
) -> Vec<String> {
    (0..count)
        .flat_map(|i| issue_pages(code, start + Duration::days(i * step_days), pages, library))
        .collect()
}

/// A small mixed corpus exercising every analysis.
///
/// - `TID`: weekly, four issues with a 46-day break (5 missing), one issue
///   shared between `SB` and `BL`, one issue missing page 3
/// - `QTN`: a single issue with a duplicated page
/// - `CTN`: daily for two weeks
/// - three rejected filenames (bad date, lowercase code, wrong extension)
#[allow(dead_code)]
pub fn sample_listing() -> Vec<String> {
    let mut listing = Vec::new();
    listing.extend(issue_pages("TID", date(1964, 1, 1), 2, "SB"));
    listing.extend(issue_pages("TID", date(1964, 1, 8), 2, "SB"));
    listing.extend(issue_pages("TID", date(1964, 1, 8), 1, "BL"));
    listing.push("TID_1964_01_15_001_SB.jpg".to_string());
    listing.push("TID_1964_01_15_002_SB.jpg".to_string());
    listing.push("TID_1964_01_15_004_SB.jpg".to_string());
    listing.extend(issue_pages("TID", date(1964, 3, 1), 2, "SB"));
    listing.push("QTN_1965_05_15_001_CU_Zsn128162MR.jpg".to_string());
    listing.push("QTN_1965_05_15_001_CU_Zsn128162MR.pdf".to_string());
    listing.extend(regular_run("CTN", date(1970, 6, 1), 1, 14, 1, "HU"));
    listing.push("TID_1964_13_09_001_SB.jpg".to_string());
    listing.push("td_1964_01_09_001_SB.jpg".to_string());
    listing.push("TID_1964_01_09_001_SB.docx".to_string());
    listing
}

/// Scan [`sample_listing`] with the default configuration.
#[allow(dead_code)]
pub fn sample_scan() -> ScanResult {
    scan(sample_listing(), &ScanConfig::default())
}

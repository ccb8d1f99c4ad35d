//! CSV export of a scanned corpus.
//!
//! Each function renders one table to a `String`; writing it somewhere is up
//! to the caller. Every table starts with a header row, so an empty corpus
//! still produces a well-formed file.
//!
//! # API Patterns
//!
//! - **Page level**: [`pages_to_csv`] - one row per accepted file
//! - **Issue level**: [`issues_to_csv`], [`pivot_to_csv`] - one row per issue
//! - **Newspaper level**: [`missing_issues_to_csv`] - one row per newspaper
//! - **Library level**: [`holdings_to_csv`] - one row per library and newspaper
//! - **Rejections**: [`invalid_to_csv`] - one row per rejected filename
//!
//! # Examples
//!
//! ```
//! use ddcorpus::{csv, scan, ScanConfig};
//!
//! let result = scan(["TID_1964_01_09_001_SB.jpg"], &ScanConfig::default());
//! let table = csv::issues_to_csv(&result.corpus)?;
//! assert!(table.starts_with("Newspaper_Code,"));
//! assert_eq!(table.lines().count(), 2);
//! # Ok::<(), ddcorpus::CorpusError>(())
//! ```

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::catalog;
use crate::completeness;
use crate::error::{CorpusError, Result};
use crate::provenance;
use crate::scan::{Corpus, InvalidFilename};

const PAGE_HEADERS: [&str; 10] = [
    "Newspaper_Code",
    "Newspaper_Name",
    "Date",
    "Year",
    "Month",
    "Day",
    "Page",
    "Library",
    "Shelfmark",
    "Extension",
];

const ISSUE_HEADERS: [&str; 11] = [
    "Newspaper_Code",
    "Newspaper_Name",
    "Date",
    "Year",
    "Month",
    "Day",
    "Total_Files",
    "Distinct_Pages",
    "Max_Page_Number",
    "Has_Missing_Pages",
    "Has_Duplicates",
];

const HOLDING_HEADERS: [&str; 10] = [
    "Library_Code",
    "Library_Name",
    "Newspaper_Code",
    "Newspaper_Name",
    "Total_Issues",
    "Total_Pages",
    "Total_Files",
    "Years_Covered",
    "First_Year",
    "Last_Year",
];

const MISSING_ISSUE_HEADERS: [&str; 9] = [
    "Newspaper_Code",
    "Newspaper_Name",
    "Total_Issues_In_Corpus",
    "Estimated_Frequency",
    "Median_Gap_Days",
    "Average_Gap_Days",
    "Significant_Gaps_Count",
    "Estimated_Missing_Issues",
    "Completeness_Pct",
];

const PIVOT_HEADERS: [&str; 23] = [
    "Date",
    "Year",
    "Month",
    "Day",
    "Quarter",
    "Decade",
    "Newspaper_Code",
    "Newspaper_Name",
    "Region",
    "Publisher_Type",
    "Administrative_Level",
    "Province",
    "Publication_Type",
    "Pages_In_Issue",
    "Has_Missing_Pages",
    "Has_Duplicate_Pages",
    "Primary_Library",
    "All_Libraries",
    "Num_Libraries",
    "Estimated_Frequency",
    "Avg_Gap_Days",
    "Is_Complete_Issue",
    "Page_Completeness_Pct",
];

const INVALID_HEADERS: [&str; 3] = ["Filename", "Reason", "Detail"];

#[derive(Serialize)]
struct PageRow<'a> {
    newspaper_code: &'a str,
    newspaper_name: String,
    date: NaiveDate,
    year: i32,
    month: u32,
    day: u32,
    page: u16,
    library: &'a str,
    shelfmark: Option<&'a str>,
    extension: &'a str,
}

#[derive(Serialize)]
struct IssueRow<'a> {
    newspaper_code: &'a str,
    newspaper_name: String,
    date: NaiveDate,
    year: i32,
    month: u32,
    day: u32,
    total_files: usize,
    distinct_pages: usize,
    max_page_number: u16,
    has_missing_pages: &'static str,
    has_duplicates: &'static str,
}

#[derive(Serialize)]
struct HoldingRow<'a> {
    library_code: &'a str,
    library_name: String,
    newspaper_code: &'a str,
    newspaper_name: String,
    total_issues: usize,
    total_pages: usize,
    total_files: usize,
    years_covered: String,
    first_year: Option<i32>,
    last_year: Option<i32>,
}

#[derive(Serialize)]
struct MissingIssueRow<'a> {
    newspaper_code: &'a str,
    newspaper_name: String,
    total_issues_in_corpus: usize,
    estimated_frequency: String,
    median_gap_days: Option<f64>,
    average_gap_days: Option<f64>,
    significant_gaps_count: usize,
    estimated_missing_issues: Option<u64>,
    completeness_pct: Option<f64>,
}

#[derive(Serialize)]
struct PivotRow<'a> {
    date: NaiveDate,
    year: i32,
    month: u32,
    day: u32,
    quarter: String,
    decade: String,
    newspaper_code: &'a str,
    newspaper_name: String,
    region: &'static str,
    publisher_type: &'static str,
    administrative_level: &'static str,
    province: &'static str,
    publication_type: &'static str,
    pages_in_issue: usize,
    has_missing_pages: &'static str,
    has_duplicate_pages: &'static str,
    primary_library: String,
    all_libraries: String,
    num_libraries: usize,
    estimated_frequency: String,
    avg_gap_days: Option<f64>,
    is_complete_issue: &'static str,
    page_completeness_pct: f64,
}

#[derive(Serialize)]
struct InvalidRow<'a> {
    filename: &'a str,
    reason: &'static str,
    detail: &'a str,
}

/// Page-level table: one row per accepted file, in index order.
///
/// # Errors
///
/// Returns an error if the CSV cannot be written.
pub fn pages_to_csv(corpus: &Corpus) -> Result<String> {
    let rows = corpus.index().records().map(|record| PageRow {
        newspaper_code: &record.newspaper_code,
        newspaper_name: catalog::newspaper_display_name(&record.newspaper_code),
        date: record.date,
        year: record.year(),
        month: record.month(),
        day: record.day(),
        page: record.page_number,
        library: &record.library_code,
        shelfmark: record.shelfmark.as_deref(),
        extension: &record.extension,
    });
    write_table(&PAGE_HEADERS, rows)
}

/// Issue-level table with missing and duplicate page flags.
///
/// # Errors
///
/// Returns an error if the CSV cannot be written.
pub fn issues_to_csv(corpus: &Corpus) -> Result<String> {
    let index = corpus.index();
    let mut rows = Vec::new();
    for newspaper in index.newspapers() {
        let name = catalog::newspaper_display_name(newspaper);
        for issue in index.issues_of(newspaper) {
            let check = completeness::check(&issue);
            let date = issue.date();
            rows.push(IssueRow {
                newspaper_code: newspaper,
                newspaper_name: name.clone(),
                date,
                year: date.year(),
                month: date.month(),
                day: date.day(),
                total_files: check.record_count,
                distinct_pages: check.present_pages,
                max_page_number: check.expected_pages,
                has_missing_pages: yes_no(check.has_missing_pages()),
                has_duplicates: yes_no(check.has_duplicates()),
            });
        }
    }
    write_table(&ISSUE_HEADERS, rows)
}

/// Library holdings: one row per library and newspaper.
///
/// # Errors
///
/// Returns an error if the CSV cannot be written.
pub fn holdings_to_csv(corpus: &Corpus) -> Result<String> {
    let index = corpus.index();
    let rows = index.libraries().flat_map(|library| {
        index.holdings_of(library).values().map(move |holding| HoldingRow {
            library_code: library,
            library_name: catalog::library_display_name(library),
            newspaper_code: &holding.newspaper_code,
            newspaper_name: catalog::newspaper_display_name(&holding.newspaper_code),
            total_issues: holding.issue_count(),
            total_pages: holding.pages,
            total_files: holding.records,
            years_covered: holding
                .years
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            first_year: holding.first_year(),
            last_year: holding.last_year(),
        })
    });
    write_table(&HOLDING_HEADERS, rows)
}

/// Missing-issue estimates: one row per newspaper with at least two issues.
///
/// Irregular newspapers are listed with empty estimate columns.
///
/// # Errors
///
/// Returns an error if the CSV cannot be written.
pub fn missing_issues_to_csv(corpus: &Corpus) -> Result<String> {
    let index = corpus.index();
    let mut rows = Vec::new();
    for newspaper in index.newspapers() {
        let estimate = corpus.frequency(newspaper);
        if estimate.insufficient_data {
            continue;
        }
        let analysis = corpus.gaps(newspaper);
        rows.push(MissingIssueRow {
            newspaper_code: newspaper,
            newspaper_name: catalog::newspaper_display_name(newspaper),
            total_issues_in_corpus: index.issue_count_of(newspaper),
            estimated_frequency: estimate.class.to_string(),
            median_gap_days: estimate.median_gap_days.map(round2),
            average_gap_days: estimate.mean_gap_days.map(round2),
            significant_gaps_count: analysis.gaps().len(),
            estimated_missing_issues: analysis.total_estimated_missing(),
            completeness_pct: corpus
                .completeness_percentage(newspaper)
                .map(|share| round1(share * 100.0)),
        });
    }
    write_table(&MISSING_ISSUE_HEADERS, rows)
}

/// Issue-level table with every dimension useful for pivoting.
///
/// Combines catalog metadata, page completeness, provenance and the
/// newspaper's inferred frequency on each row.
///
/// # Errors
///
/// Returns an error if the CSV cannot be written.
pub fn pivot_to_csv(corpus: &Corpus) -> Result<String> {
    let index = corpus.index();
    let mut rows = Vec::new();
    for newspaper in index.newspapers() {
        let name = catalog::newspaper_display_name(newspaper);
        let info = catalog::newspaper_info(newspaper);
        let estimate = corpus.frequency(newspaper);
        for issue in index.issues_of(newspaper) {
            let check = completeness::check(&issue);
            let provenance = provenance::resolve(&issue);
            let date = issue.date();
            rows.push(PivotRow {
                date,
                year: date.year(),
                month: date.month(),
                day: date.day(),
                quarter: format!("Q{}", (date.month() - 1) / 3 + 1),
                decade: format!("{}s", date.year().div_euclid(10) * 10),
                newspaper_code: newspaper,
                newspaper_name: name.clone(),
                region: info.map_or("", |i| i.region),
                publisher_type: info.map_or("", |i| i.publisher),
                administrative_level: info.and_then(|i| i.level).unwrap_or(""),
                province: info.and_then(|i| i.province).unwrap_or(""),
                publication_type: info.map_or("", |i| i.publication_type),
                pages_in_issue: check.record_count,
                has_missing_pages: yes_no(check.has_missing_pages()),
                has_duplicate_pages: yes_no(check.has_duplicates()),
                primary_library: provenance.primary_library.clone().unwrap_or_default(),
                all_libraries: provenance.library_codes().join("; "),
                num_libraries: provenance.num_libraries,
                estimated_frequency: estimate.class.to_string(),
                avg_gap_days: estimate.mean_gap_days.map(round1),
                is_complete_issue: yes_no(check.is_complete),
                page_completeness_pct: round1(check.page_coverage() * 100.0),
            });
        }
    }
    write_table(&PIVOT_HEADERS, rows)
}

/// Rejected filenames with their reason codes.
///
/// # Errors
///
/// Returns an error if the CSV cannot be written.
pub fn invalid_to_csv(invalid: &[InvalidFilename]) -> Result<String> {
    let rows = invalid.iter().map(|entry| InvalidRow {
        filename: &entry.filename,
        reason: entry.reason_code(),
        detail: &entry.error.detail,
    });
    write_table(&INVALID_HEADERS, rows)
}

fn write_table<T: Serialize>(headers: &[&str], rows: impl IntoIterator<Item = T>) -> Result<String> {
    let mut writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(headers)?;
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CorpusError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

//! JSON report of a scanned corpus.
//!
//! [`corpus_to_json`] produces one document with four sections:
//!
//! - `summary`: corpus-wide totals
//! - `newspapers`: per title metadata, totals, frequency, gaps and completeness
//! - `by_year`: pages, issues and active titles per year
//! - `libraries`: per library holdings, broken down by newspaper
//!
//! # Examples
//!
//! ```
//! use ddcorpus::{json, scan, ScanConfig};
//!
//! let result = scan(["TID_1964_01_09_001_SB.jpg"], &ScanConfig::default());
//! let report = json::corpus_to_json(&result.corpus)?;
//! assert_eq!(report["summary"]["total_pages"], 1);
//! assert_eq!(report["newspapers"]["TID"]["frequency"]["class"], "Irregular");
//! # Ok::<(), ddcorpus::CorpusError>(())
//! ```

use serde_json::{json, Map, Value};

use crate::catalog;
use crate::error::Result;
use crate::scan::Corpus;

/// Build the JSON report for a corpus.
///
/// # Errors
///
/// Returns an error if any component fails to serialize.
pub fn corpus_to_json(corpus: &Corpus) -> Result<Value> {
    let index = corpus.index();

    let mut newspapers = Map::new();
    for code in index.newspapers() {
        newspapers.insert(code.to_string(), newspaper_to_json(corpus, code)?);
    }

    let mut libraries = Map::new();
    for code in index.libraries() {
        let holdings = index.holdings_of(code);
        libraries.insert(
            code.to_string(),
            json!({
                "name": catalog::library_display_name(code),
                "total_pages": holdings.values().map(|h| h.pages).sum::<usize>(),
                "newspapers": serde_json::to_value(holdings)?,
            }),
        );
    }

    Ok(json!({
        "summary": serde_json::to_value(index.summary())?,
        "newspapers": newspapers,
        "by_year": serde_json::to_value(index.yearly_statistics())?,
        "libraries": libraries,
    }))
}

fn newspaper_to_json(corpus: &Corpus, code: &str) -> Result<Value> {
    let index = corpus.index();
    let timeline = index.timeline_of(code);

    Ok(json!({
        "name": catalog::newspaper_display_name(code),
        "metadata": serde_json::to_value(catalog::newspaper_info(code))?,
        "total_pages": index.pages_of(code),
        "total_files": index.records_of(code),
        "total_issues": index.issue_count_of(code),
        "first_issue": timeline.first(),
        "last_issue": timeline.last(),
        "years": index.years_of(code),
        "pages_by_year": serde_json::to_value(index.pages_by_newspaper_year(code))?,
        "libraries": index.libraries_holding(code),
        "frequency": serde_json::to_value(corpus.frequency(code))?,
        "gaps": serde_json::to_value(corpus.gaps(code))?,
        "coverage_gaps": serde_json::to_value(corpus.coverage_gaps(code))?,
        "completeness_pct": corpus.completeness_percentage(code),
        "issue_completeness": serde_json::to_value(corpus.newspaper_completeness(code))?,
    }))
}

//! One-shot corpus scanning and the query façade over its result.
//!
//! [`scan`] takes a listing of filenames, parses each one, and builds a
//! [`CorpusIndex`] from the accepted records. Rejected filenames are kept
//! with their [`ValidationError`] rather than aborting the scan. The result
//! is wrapped in a [`Corpus`], which answers the per-newspaper, per-issue and
//! per-library questions the analysis modules know how to compute.
//!
//! # Examples
//!
//! ```
//! use ddcorpus::{scan, ScanConfig};
//! use ddcorpus::frequency::FrequencyClass;
//!
//! let listing = [
//!     "TID_1964_01_01_001_SB.jpg",
//!     "TID_1964_01_08_001_SB.jpg",
//!     "TID_1964_01_15_001_SB.jpg",
//!     "TID_1964_03_01_001_SB.jpg",
//!     "notes.txt",
//! ];
//! let result = scan(listing, &ScanConfig::default());
//!
//! assert_eq!(result.invalid.len(), 1);
//! assert_eq!(result.corpus.frequency("TID").class, FrequencyClass::Weekly);
//! assert_eq!(result.corpus.gaps("TID").total_estimated_missing(), Some(5));
//! ```

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::completeness::{self, CompletenessRecord, NewspaperCompleteness};
use crate::config::ScanConfig;
use crate::filename::{FilenameParser, PageRecord, ValidationError};
use crate::frequency::{self, FrequencyEstimate};
use crate::gaps::{self, CoverageGap, GapAnalysis, SkipReason};
use crate::index::{CorpusIndex, LibraryHolding};
use crate::provenance::{self, ProvenanceRecord};

/// A filename rejected during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidFilename {
    /// The filename as listed
    pub filename: String,
    /// Why it was rejected
    pub error: ValidationError,
}

impl InvalidFilename {
    /// Machine-readable rejection reason (`"DateError"` and so on).
    #[must_use]
    pub fn reason_code(&self) -> &'static str {
        self.error.kind.reason_code()
    }
}

/// Output of [`scan`].
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Index over the accepted filenames
    pub corpus: Corpus,
    /// Rejected filenames in listing order
    pub invalid: Vec<InvalidFilename>,
}

/// Scan a flat listing of filenames.
///
/// Never fails: each filename is either indexed or reported in
/// [`ScanResult::invalid`]. With [`ScanConfig::parallel`] set, parsing runs
/// on the rayon thread pool; the resulting index is the same either way.
///
/// A configuration that fails [`ScanConfig::validate`] is logged and used
/// as far as it goes: a non-positive coverage threshold falls back to the
/// default, and an empty extension list rejects every filename.
pub fn scan<I, S>(filenames: I, config: &ScanConfig) -> ScanResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if let Err(err) = config.validate() {
        warn!("Scanning with {}", err);
    }
    let parser = FilenameParser::new(config);
    let names: Vec<S> = filenames.into_iter().collect();

    let parsed: Vec<std::result::Result<PageRecord, ValidationError>> = if config.parallel {
        let names: Vec<&str> = names.iter().map(|name| name.as_ref()).collect();
        names.par_iter().map(|name| parser.parse(name)).collect()
    } else {
        names.iter().map(|name| parser.parse(name.as_ref())).collect()
    };

    let mut index = CorpusIndex::new();
    let mut invalid = Vec::new();
    for (name, outcome) in names.iter().zip(parsed) {
        match outcome {
            Ok(record) => index.ingest(std::iter::once(record)),
            Err(error) => {
                debug!("Rejected {}: {}", name.as_ref(), error);
                invalid.push(InvalidFilename {
                    filename: name.as_ref().to_string(),
                    error,
                });
            },
        }
    }

    info!(
        "Scanned {} filenames: {} accepted, {} rejected, {} newspapers",
        names.len(),
        index.record_count(),
        invalid.len(),
        index.newspapers().count()
    );

    ScanResult {
        corpus: Corpus::new(index, config.clone()),
        invalid,
    }
}

/// A scanned corpus: the index plus the configuration it was built with.
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    index: CorpusIndex,
    config: ScanConfig,
}

impl Corpus {
    /// Wrap an existing index.
    #[must_use]
    pub fn new(index: CorpusIndex, config: ScanConfig) -> Self {
        Corpus { index, config }
    }

    /// The underlying index.
    #[must_use]
    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    /// The configuration used for the scan.
    #[must_use]
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Inferred publication frequency of a newspaper.
    #[must_use]
    pub fn frequency(&self, newspaper: &str) -> FrequencyEstimate {
        let estimate = frequency::estimate(&self.index.timeline_of(newspaper));
        debug!(
            "Frequency of {}: {} (median gap {:?} days over {} gaps)",
            newspaper, estimate.class, estimate.median_gap_days, estimate.gap_count
        );
        estimate
    }

    /// Inferred frequency of every newspaper, keyed by code.
    #[must_use]
    pub fn frequencies(&self) -> BTreeMap<String, FrequencyEstimate> {
        self.index
            .newspapers()
            .map(|code| (code.to_string(), self.frequency(code)))
            .collect()
    }

    /// Gap analysis of a newspaper against its inferred frequency.
    #[must_use]
    pub fn gaps(&self, newspaper: &str) -> GapAnalysis {
        let estimate = self.frequency(newspaper);
        if estimate.insufficient_data {
            return GapAnalysis::Skipped {
                reason: SkipReason::InsufficientData,
            };
        }
        gaps::find_gaps(&self.index.timeline_of(newspaper), estimate.class)
    }

    /// Share of expected issues present, `None` when no estimate is possible.
    #[must_use]
    pub fn completeness_percentage(&self, newspaper: &str) -> Option<f64> {
        gaps::completeness_percentage(self.index.issue_count_of(newspaper), &self.gaps(newspaper))
    }

    /// Breaks longer than the configured coverage threshold.
    #[must_use]
    pub fn coverage_gaps(&self, newspaper: &str) -> Vec<CoverageGap> {
        gaps::coverage_gaps(&self.index.timeline_of(newspaper), self.config.coverage_threshold())
    }

    /// Issue-level completeness rolled up over a newspaper.
    #[must_use]
    pub fn newspaper_completeness(&self, newspaper: &str) -> NewspaperCompleteness {
        NewspaperCompleteness::from_issues(self.index.issues_of(newspaper))
    }

    /// Page completeness of one issue, `None` if the issue is not in the corpus.
    #[must_use]
    pub fn completeness(&self, newspaper: &str, date: NaiveDate) -> Option<CompletenessRecord> {
        self.index
            .issue(newspaper, date)
            .map(|issue| completeness::check(&issue))
    }

    /// Library provenance of one issue, `None` if the issue is not in the corpus.
    #[must_use]
    pub fn provenance(&self, newspaper: &str, date: NaiveDate) -> Option<ProvenanceRecord> {
        self.index
            .issue(newspaper, date)
            .map(|issue| provenance::resolve(&issue))
    }

    /// Holdings of one library, keyed by newspaper.
    #[must_use]
    pub fn holdings(&self, library: &str) -> &BTreeMap<String, LibraryHolding> {
        self.index.holdings_of(library)
    }
}

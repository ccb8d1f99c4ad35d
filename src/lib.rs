#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # ddcorpus: newspaper corpus indexing
//!
//! Indexes a digitised newspaper corpus from its filenames alone and infers
//! what the collection does not say outright: how often each title appeared,
//! which issues are probably missing, which pages an issue lacks, and which
//! library an issue chiefly came from.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use ddcorpus::{scan, ScanConfig};
//!
//! let listing = [
//!     "TID_1964_01_09_001_SB.jpg",
//!     "TID_1964_01_09_002_SB.jpg",
//!     "TID_1964_01_09_002_BL.jpg",
//!     "TID_1964_01_16_001_SB_Zsn128162MR.jpg",
//!     "TID_1964_13_09_001_SB.jpg",
//! ];
//! let result = scan(listing, &ScanConfig::default());
//! assert_eq!(result.invalid.len(), 1);
//!
//! let date = NaiveDate::from_ymd_opt(1964, 1, 9).unwrap();
//! let provenance = result.corpus.provenance("TID", date).unwrap();
//! assert_eq!(provenance.primary_library.as_deref(), Some("SB"));
//! ```
//!
//! ## Modules
//!
//! - [`filename`] - Filename grammar, validation and [`PageRecord`]s
//! - [`index`] - The [`CorpusIndex`] and its aggregate queries
//! - [`timeline`] - Sorted issue dates of one newspaper
//! - [`frequency`] - Publication frequency inference
//! - [`gaps`] - Gap detection and missing-issue estimation
//! - [`completeness`] - Missing and duplicate pages per issue
//! - [`provenance`] - Library contributions per issue
//! - [`scan`](mod@scan) - One-shot scanning and the [`Corpus`] query façade
//! - [`catalog`] - Known newspaper and library names
//! - [`json`] - JSON report
//! - [`csv`] - CSV tables
//! - [`config`] - Scan configuration
//! - [`error`] - Error types and result type

pub mod catalog;
pub mod completeness;
pub mod config;
pub mod csv;
pub mod error;
pub mod filename;
pub mod frequency;
pub mod gaps;
pub mod index;
pub mod json;
pub mod provenance;
pub mod scan;
pub mod timeline;

pub use completeness::{CompletenessRecord, NewspaperCompleteness};
pub use config::ScanConfig;
pub use error::{CorpusError, Result};
pub use filename::{
    generate_filename, parse_filename, FilenameParser, PageRecord, ValidationError,
    ValidationErrorKind,
};
pub use frequency::{FrequencyClass, FrequencyEstimate};
pub use gaps::{CoverageGap, Gap, GapAnalysis, SkipReason};
pub use index::{CorpusIndex, CorpusSummary, Issue, LibraryHolding, YearStatistics};
pub use provenance::{LibraryContribution, ProvenanceRecord};
pub use scan::{scan, Corpus, InvalidFilename, ScanResult};
pub use timeline::NewspaperTimeline;

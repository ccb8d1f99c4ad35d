//! The corpus index: every accepted page record, grouped and aggregated.
//!
//! A [`CorpusIndex`] is built once per scan from parsed [`PageRecord`]s and is
//! read-only afterwards. Records are stored inside their issue bucket, kept
//! sorted, so the index contents do not depend on ingestion order.
//!
//! Page totals count distinct `(newspaper, date, page, library)` keys: two
//! files for the same scanned page (say a `jpg` and a `pdf`) are one page. The
//! issue buckets still keep both records so that duplicate detection can see
//! them.
//!
//! # Examples
//!
//! ```
//! use ddcorpus::filename::parse_filename;
//! use ddcorpus::CorpusIndex;
//!
//! let records = ["TID_1964_01_09_001_SB.jpg", "TID_1964_01_09_002_SB.jpg"]
//!     .iter()
//!     .map(|name| parse_filename(name))
//!     .collect::<Result<Vec<_>, _>>()?;
//!
//! let index = CorpusIndex::from_records(records);
//! assert_eq!(index.pages_of("TID"), 2);
//! assert_eq!(index.issues_of("TID").len(), 1);
//! assert!(index.holdings_of("SB").contains_key("TID"));
//! # Ok::<(), ddcorpus::filename::ValidationError>(())
//! ```

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use smallvec::SmallVec;

use crate::filename::PageRecord;
use crate::timeline::NewspaperTimeline;

/// Records of one issue; most issues have a handful of pages.
type IssueBucket = SmallVec<[PageRecord; 4]>;

/// Distinct page identity used for page totals.
type PageKey = (String, NaiveDate, u16, String);

/// All pages sharing one newspaper code and publication date.
///
/// A borrowed view into a [`CorpusIndex`]; records are ordered by page
/// number, then library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Issue<'a> {
    newspaper_code: &'a str,
    date: NaiveDate,
    records: &'a [PageRecord],
}

impl<'a> Issue<'a> {
    /// The newspaper code.
    #[must_use]
    pub fn newspaper_code(&self) -> &'a str {
        self.newspaper_code
    }

    /// The publication date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Every record of this issue, duplicates included.
    #[must_use]
    pub fn records(&self) -> &'a [PageRecord] {
        self.records
    }

    /// Number of records (files) for this issue.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Distinct page numbers present.
    #[must_use]
    pub fn page_numbers(&self) -> BTreeSet<u16> {
        self.records.iter().map(|r| r.page_number).collect()
    }

    /// Highest page number present.
    #[must_use]
    pub fn max_page(&self) -> Option<u16> {
        self.records.iter().map(|r| r.page_number).max()
    }

    /// Distinct libraries contributing pages.
    #[must_use]
    pub fn libraries(&self) -> BTreeSet<&'a str> {
        self.records.iter().map(|r| r.library_code.as_str()).collect()
    }

    /// Number of records per page number.
    #[must_use]
    pub fn page_counts(&self) -> BTreeMap<u16, usize> {
        let mut counts = BTreeMap::new();
        for record in self.records {
            *counts.entry(record.page_number).or_default() += 1;
        }
        counts
    }

    /// Page numbers carried by two or more records, in ascending order.
    #[must_use]
    pub fn duplicate_page_numbers(&self) -> Vec<u16> {
        self.page_counts()
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(page, _)| page)
            .collect()
    }

    /// Page numbers in `1..=max_page` with no record, in ascending order.
    #[must_use]
    pub fn missing_page_numbers(&self) -> Vec<u16> {
        let present = self.page_numbers();
        let max = self.max_page().unwrap_or(0);
        (1..=max).filter(|page| !present.contains(page)).collect()
    }
}

/// A library's holdings of one newspaper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryHolding {
    /// Holding library
    pub library_code: String,
    /// Newspaper held
    pub newspaper_code: String,
    /// Distinct pages contributed
    pub pages: usize,
    /// Files contributed, duplicates included
    pub records: usize,
    /// Issue dates with at least one page from this library
    pub issue_dates: BTreeSet<NaiveDate>,
    /// Years with at least one page from this library
    pub years: BTreeSet<i32>,
    /// Distinct pages per year
    pub pages_by_year: BTreeMap<i32, usize>,
    /// Shelfmarks seen in this library's filenames
    pub shelfmarks: BTreeSet<String>,
}

impl LibraryHolding {
    fn new(library_code: &str, newspaper_code: &str) -> Self {
        LibraryHolding {
            library_code: library_code.to_string(),
            newspaper_code: newspaper_code.to_string(),
            pages: 0,
            records: 0,
            issue_dates: BTreeSet::new(),
            years: BTreeSet::new(),
            pages_by_year: BTreeMap::new(),
            shelfmarks: BTreeSet::new(),
        }
    }

    fn add(&mut self, record: &PageRecord, new_page: bool) {
        self.records += 1;
        self.issue_dates.insert(record.date);
        self.years.insert(record.year());
        if let Some(shelfmark) = &record.shelfmark {
            self.shelfmarks.insert(shelfmark.clone());
        }
        if new_page {
            self.pages += 1;
            *self.pages_by_year.entry(record.year()).or_default() += 1;
        }
    }

    /// Number of distinct issues held.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.issue_dates.len()
    }

    /// Number of distinct issues held for one year.
    #[must_use]
    pub fn issues_in_year(&self, year: i32) -> usize {
        self.issue_dates.iter().filter(|d| d.year() == year).count()
    }

    /// Earliest year held.
    #[must_use]
    pub fn first_year(&self) -> Option<i32> {
        self.years.first().copied()
    }

    /// Latest year held.
    #[must_use]
    pub fn last_year(&self) -> Option<i32> {
        self.years.last().copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct NewspaperTally {
    pages: usize,
    records: usize,
    pages_by_year: BTreeMap<i32, usize>,
}

/// Corpus-wide totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusSummary {
    /// Distinct newspaper codes
    pub total_newspapers: usize,
    /// Distinct `(newspaper, date)` issues
    pub total_issues: usize,
    /// Distinct pages
    pub total_pages: usize,
    /// Accepted files, duplicates included
    pub total_records: usize,
    /// Earliest and latest publication year
    pub year_range: Option<(i32, i32)>,
    /// `total_pages / total_issues`, if there are any issues
    pub average_pages_per_issue: Option<f64>,
}

/// Per-year totals across the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearStatistics {
    /// Publication year
    pub year: i32,
    /// Distinct pages published that year
    pub pages: usize,
    /// Issues published that year, all newspapers
    pub issues: usize,
    /// Newspapers with at least one issue that year
    pub newspapers: usize,
}

/// Index over all accepted page records of one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusIndex {
    /// newspaper -> year -> date -> records (sorted)
    issues: BTreeMap<String, BTreeMap<i32, BTreeMap<NaiveDate, IssueBucket>>>,
    timelines: BTreeMap<String, BTreeSet<NaiveDate>>,
    newspapers: BTreeMap<String, NewspaperTally>,
    /// library -> newspaper -> holding
    holdings: BTreeMap<String, BTreeMap<String, LibraryHolding>>,
    distinct_pages: BTreeSet<PageKey>,
    record_count: usize,
}

impl CorpusIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from records in any order.
    pub fn from_records(records: impl IntoIterator<Item = PageRecord>) -> Self {
        let mut index = Self::new();
        index.ingest(records);
        index
    }

    /// Add records to the index.
    pub fn ingest(&mut self, records: impl IntoIterator<Item = PageRecord>) {
        for record in records {
            self.ingest_one(record);
        }
    }

    fn ingest_one(&mut self, record: PageRecord) {
        let year = record.year();
        let new_page = self.distinct_pages.insert((
            record.newspaper_code.clone(),
            record.date,
            record.page_number,
            record.library_code.clone(),
        ));

        self.timelines
            .entry(record.newspaper_code.clone())
            .or_default()
            .insert(record.date);

        let tally = self.newspapers.entry(record.newspaper_code.clone()).or_default();
        tally.records += 1;
        if new_page {
            tally.pages += 1;
            *tally.pages_by_year.entry(year).or_default() += 1;
        }

        self.holdings
            .entry(record.library_code.clone())
            .or_default()
            .entry(record.newspaper_code.clone())
            .or_insert_with(|| LibraryHolding::new(&record.library_code, &record.newspaper_code))
            .add(&record, new_page);

        let bucket = self
            .issues
            .entry(record.newspaper_code.clone())
            .or_default()
            .entry(year)
            .or_default()
            .entry(record.date)
            .or_default();
        let position = bucket.partition_point(|existing| existing <= &record);
        bucket.insert(position, record);

        self.record_count += 1;
    }

    /// True if no record has been ingested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// Number of accepted records, duplicates included.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Every record, ordered by newspaper, date, page, library.
    pub fn records(&self) -> impl Iterator<Item = &PageRecord> + '_ {
        self.issues
            .values()
            .flat_map(BTreeMap::values)
            .flat_map(BTreeMap::values)
            .flat_map(|bucket| bucket.iter())
    }

    /// Newspaper codes present, sorted.
    pub fn newspapers(&self) -> impl Iterator<Item = &str> + '_ {
        self.issues.keys().map(String::as_str)
    }

    /// Library codes present, sorted.
    pub fn libraries(&self) -> impl Iterator<Item = &str> + '_ {
        self.holdings.keys().map(String::as_str)
    }

    /// All issues of a newspaper in chronological order.
    #[must_use]
    pub fn issues_of(&self, newspaper: &str) -> Vec<Issue<'_>> {
        let Some((code, years)) = self.issues.get_key_value(newspaper) else {
            return Vec::new();
        };
        years
            .values()
            .flat_map(|dates| dates.iter())
            .map(|(date, bucket)| Issue {
                newspaper_code: code.as_str(),
                date: *date,
                records: bucket.as_slice(),
            })
            .collect()
    }

    /// A single issue, if any page of it was ingested.
    #[must_use]
    pub fn issue(&self, newspaper: &str, date: NaiveDate) -> Option<Issue<'_>> {
        let (code, years) = self.issues.get_key_value(newspaper)?;
        let bucket = years.get(&date.year())?.get(&date)?;
        Some(Issue {
            newspaper_code: code.as_str(),
            date,
            records: bucket.as_slice(),
        })
    }

    /// Distinct pages of a newspaper (0 if unknown).
    #[must_use]
    pub fn pages_of(&self, newspaper: &str) -> usize {
        self.newspapers.get(newspaper).map_or(0, |tally| tally.pages)
    }

    /// Files of a newspaper, duplicates included (0 if unknown).
    #[must_use]
    pub fn records_of(&self, newspaper: &str) -> usize {
        self.newspapers.get(newspaper).map_or(0, |tally| tally.records)
    }

    /// Number of distinct issues of a newspaper.
    #[must_use]
    pub fn issue_count_of(&self, newspaper: &str) -> usize {
        self.timelines.get(newspaper).map_or(0, BTreeSet::len)
    }

    /// Holdings of one library, keyed by newspaper (empty if unknown).
    #[must_use]
    pub fn holdings_of(&self, library: &str) -> &BTreeMap<String, LibraryHolding> {
        static EMPTY: BTreeMap<String, LibraryHolding> = BTreeMap::new();
        self.holdings.get(library).unwrap_or(&EMPTY)
    }

    /// One library's holding of one newspaper.
    #[must_use]
    pub fn holding(&self, library: &str, newspaper: &str) -> Option<&LibraryHolding> {
        self.holdings.get(library)?.get(newspaper)
    }

    /// Libraries holding at least one page of a newspaper, sorted.
    #[must_use]
    pub fn libraries_holding(&self, newspaper: &str) -> Vec<&str> {
        self.holdings
            .iter()
            .filter(|(_, by_newspaper)| by_newspaper.contains_key(newspaper))
            .map(|(library, _)| library.as_str())
            .collect()
    }

    /// The sorted issue dates of a newspaper (empty if unknown).
    #[must_use]
    pub fn timeline_of(&self, newspaper: &str) -> NewspaperTimeline {
        NewspaperTimeline::new(
            newspaper,
            self.timelines.get(newspaper).into_iter().flatten().copied(),
        )
    }

    /// Issue dates of a newspaper within `[from, to]`.
    #[must_use]
    pub fn issues_in_range(&self, newspaper: &str, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
        match self.timelines.get(newspaper) {
            Some(dates) if from <= to => dates.range(from..=to).copied().collect(),
            _ => Vec::new(),
        }
    }

    /// Years in which a newspaper has at least one issue.
    #[must_use]
    pub fn years_of(&self, newspaper: &str) -> Vec<i32> {
        self.issues
            .get(newspaper)
            .map(|years| years.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Distinct pages per year for one newspaper.
    #[must_use]
    pub fn pages_by_newspaper_year(&self, newspaper: &str) -> BTreeMap<i32, usize> {
        self.newspapers
            .get(newspaper)
            .map(|tally| tally.pages_by_year.clone())
            .unwrap_or_default()
    }

    /// Issues per year for one newspaper.
    #[must_use]
    pub fn issues_by_year(&self, newspaper: &str) -> BTreeMap<i32, usize> {
        self.issues
            .get(newspaper)
            .map(|years| years.iter().map(|(year, dates)| (*year, dates.len())).collect())
            .unwrap_or_default()
    }

    /// Distinct pages per year across all newspapers.
    #[must_use]
    pub fn pages_by_year(&self) -> BTreeMap<i32, usize> {
        let mut totals = BTreeMap::new();
        for tally in self.newspapers.values() {
            for (year, pages) in &tally.pages_by_year {
                *totals.entry(*year).or_default() += pages;
            }
        }
        totals
    }

    /// Per-year pages, issues and active newspapers.
    #[must_use]
    pub fn yearly_statistics(&self) -> Vec<YearStatistics> {
        let mut by_year: BTreeMap<i32, YearStatistics> = BTreeMap::new();
        for (year, pages) in self.pages_by_year() {
            by_year.insert(
                year,
                YearStatistics {
                    year,
                    pages,
                    issues: 0,
                    newspapers: 0,
                },
            );
        }
        for years in self.issues.values() {
            for (year, dates) in years {
                if let Some(stats) = by_year.get_mut(year) {
                    stats.issues += dates.len();
                    stats.newspapers += 1;
                }
            }
        }
        by_year.into_values().collect()
    }

    /// Distinct pages per `(year, month)` and newspaper.
    #[must_use]
    pub fn monthly_pages(&self) -> BTreeMap<(i32, u32), BTreeMap<String, usize>> {
        let mut monthly: BTreeMap<(i32, u32), BTreeMap<String, usize>> = BTreeMap::new();
        for (newspaper, date, _, _) in &self.distinct_pages {
            *monthly
                .entry((date.year(), date.month()))
                .or_default()
                .entry(newspaper.clone())
                .or_default() += 1;
        }
        monthly
    }

    /// Corpus-wide totals.
    #[must_use]
    pub fn summary(&self) -> CorpusSummary {
        let total_issues: usize = self.timelines.values().map(BTreeSet::len).sum();
        let total_pages = self.distinct_pages.len();
        let years: BTreeSet<i32> = self.issues.values().flat_map(|y| y.keys().copied()).collect();

        #[allow(clippy::cast_precision_loss)]
        let average_pages_per_issue =
            (total_issues > 0).then(|| total_pages as f64 / total_issues as f64);

        CorpusSummary {
            total_newspapers: self.issues.len(),
            total_issues,
            total_pages,
            total_records: self.record_count,
            year_range: years.first().zip(years.last()).map(|(a, b)| (*a, *b)),
            average_pages_per_issue,
        }
    }
}

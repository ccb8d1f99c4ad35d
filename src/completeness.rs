//! Page-level completeness and duplicate detection for issues.
//!
//! The corpus has no independent record of how many pages an issue had, so
//! the highest page number present is taken as the expected page count. This
//! makes missing-page detection a lower bound: an issue of six pages where
//! pages 5 and 6 were never scanned looks identical to a complete four-page
//! issue.

use serde::Serialize;

use crate::index::Issue;

/// Completeness facts for one issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletenessRecord {
    /// Highest page number present (the expected-pages proxy)
    pub expected_pages: u16,
    /// Distinct page numbers present
    pub present_pages: usize,
    /// Files for this issue, duplicates included
    pub record_count: usize,
    /// Page numbers in `1..=expected_pages` with no file, ascending
    pub missing_page_numbers: Vec<u16>,
    /// Page numbers with two or more files (any library), ascending
    pub duplicate_page_numbers: Vec<u16>,
    /// No missing pages and at least one page
    pub is_complete: bool,
}

impl CompletenessRecord {
    /// True if any page number has more than one file.
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        !self.duplicate_page_numbers.is_empty()
    }

    /// True if any page in `1..=expected_pages` is missing.
    #[must_use]
    pub fn has_missing_pages(&self) -> bool {
        !self.missing_page_numbers.is_empty()
    }

    /// Share of expected pages present, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn page_coverage(&self) -> f64 {
        if self.expected_pages == 0 {
            return 0.0;
        }
        self.present_pages as f64 / f64::from(self.expected_pages)
    }
}

/// Check one issue for missing and duplicate pages.
///
/// ```
/// use ddcorpus::completeness::check;
/// use ddcorpus::filename::parse_filename;
/// use ddcorpus::CorpusIndex;
///
/// let index = CorpusIndex::from_records(
///     ["TID_1964_01_09_001_SB.jpg", "TID_1964_01_09_003_SB.jpg"]
///         .map(|n| parse_filename(n).unwrap()),
/// );
/// let issue = index.issues_of("TID")[0];
/// let record = check(&issue);
/// assert_eq!(record.missing_page_numbers, vec![2]);
/// assert!(!record.is_complete);
/// ```
#[must_use]
pub fn check(issue: &Issue<'_>) -> CompletenessRecord {
    let expected_pages = issue.max_page().unwrap_or(0);
    let missing_page_numbers = issue.missing_page_numbers();

    CompletenessRecord {
        expected_pages,
        present_pages: issue.page_numbers().len(),
        record_count: issue.record_count(),
        is_complete: missing_page_numbers.is_empty() && expected_pages >= 1,
        missing_page_numbers,
        duplicate_page_numbers: issue.duplicate_page_numbers(),
    }
}

/// Issue completeness rolled up over one newspaper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewspaperCompleteness {
    /// Issues examined
    pub total_issues: usize,
    /// Issues with no missing pages
    pub complete_issues: usize,
    /// Issues with at least one missing page
    pub issues_with_missing_pages: usize,
    /// Issues with at least one duplicated page
    pub issues_with_duplicates: usize,
}

impl NewspaperCompleteness {
    /// Tally a sequence of issues.
    pub fn from_issues<'a>(issues: impl IntoIterator<Item = Issue<'a>>) -> Self {
        let mut rollup = Self::default();
        for issue in issues {
            let record = check(&issue);
            rollup.total_issues += 1;
            if record.is_complete {
                rollup.complete_issues += 1;
            }
            if record.has_missing_pages() {
                rollup.issues_with_missing_pages += 1;
            }
            if record.has_duplicates() {
                rollup.issues_with_duplicates += 1;
            }
        }
        rollup
    }

    /// Share of complete issues, `None` for a newspaper without issues.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn complete_share(&self) -> Option<f64> {
        (self.total_issues > 0).then(|| self.complete_issues as f64 / self.total_issues as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filename::parse_filename;
    use crate::index::CorpusIndex;

    fn index_of(names: &[&str]) -> CorpusIndex {
        CorpusIndex::from_records(names.iter().map(|n| parse_filename(n).unwrap()))
    }

    #[test]
    fn test_missing_and_duplicate_pages() {
        let index = index_of(&[
            "TID_1964_01_09_001_SB.jpg",
            "TID_1964_01_09_002_SB.jpg",
            "TID_1964_01_09_002_BL.jpg",
            "TID_1964_01_09_004_SB.jpg",
        ]);
        let record = check(&index.issues_of("TID")[0]);
        assert_eq!(record.expected_pages, 4);
        assert_eq!(record.present_pages, 3);
        assert_eq!(record.record_count, 4);
        assert_eq!(record.missing_page_numbers, vec![3]);
        assert_eq!(record.duplicate_page_numbers, vec![2]);
        assert!(!record.is_complete);
        assert!((record.page_coverage() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_complete_issue_with_duplicate_is_still_complete() {
        let index = index_of(&[
            "TID_1964_01_09_001_SB.jpg",
            "TID_1964_01_09_001_SB.pdf",
            "TID_1964_01_09_002_SB.jpg",
        ]);
        let record = check(&index.issues_of("TID")[0]);
        assert!(record.is_complete);
        assert!(record.has_duplicates());
        assert_eq!(record.page_coverage(), 1.0);
    }

    #[test]
    fn test_issue_starting_late() {
        let index = index_of(&["TID_1964_01_09_003_SB.jpg"]);
        let record = check(&index.issues_of("TID")[0]);
        assert_eq!(record.expected_pages, 3);
        assert_eq!(record.missing_page_numbers, vec![1, 2]);
    }

    #[test]
    fn test_newspaper_rollup() {
        let index = index_of(&[
            "TID_1964_01_09_001_SB.jpg",
            "TID_1964_01_09_002_SB.jpg",
            "TID_1964_01_16_002_SB.jpg",
            "TID_1964_01_23_001_SB.jpg",
            "TID_1964_01_23_001_BL.jpg",
        ]);
        let rollup = NewspaperCompleteness::from_issues(index.issues_of("TID"));
        assert_eq!(rollup.total_issues, 3);
        assert_eq!(rollup.complete_issues, 2);
        assert_eq!(rollup.issues_with_missing_pages, 1);
        assert_eq!(rollup.issues_with_duplicates, 1);
        assert!((rollup.complete_share().unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(NewspaperCompleteness::default().complete_share(), None);
    }
}

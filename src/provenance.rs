//! Resolution of multi-library contributions to a single issue.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::index::Issue;

/// One library's contribution to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryContribution {
    /// Library code
    pub library_code: String,
    /// Distinct pages contributed
    pub pages: usize,
}

/// Which libraries hold an issue, strongest contributor first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvenanceRecord {
    /// Library contributing the most pages (lowest code on ties)
    pub primary_library: Option<String>,
    /// All contributors, page count descending then code ascending
    pub all_libraries: Vec<LibraryContribution>,
    /// Number of contributing libraries
    pub num_libraries: usize,
}

impl ProvenanceRecord {
    /// Contributing library codes in ranking order.
    #[must_use]
    pub fn library_codes(&self) -> Vec<&str> {
        self.all_libraries.iter().map(|c| c.library_code.as_str()).collect()
    }

    /// Libraries other than the primary one, in ranking order.
    #[must_use]
    pub fn secondary_libraries(&self) -> &[LibraryContribution] {
        self.all_libraries.get(1..).unwrap_or(&[])
    }
}

/// Rank the libraries contributing to an issue.
#[must_use]
pub fn resolve(issue: &Issue<'_>) -> ProvenanceRecord {
    let mut pages_by_library: BTreeMap<&str, BTreeSet<u16>> = BTreeMap::new();
    for record in issue.records() {
        pages_by_library
            .entry(record.library_code.as_str())
            .or_default()
            .insert(record.page_number);
    }

    let mut all_libraries: Vec<LibraryContribution> = pages_by_library
        .into_iter()
        .map(|(library, pages)| LibraryContribution {
            library_code: library.to_string(),
            pages: pages.len(),
        })
        .collect();
    all_libraries.sort_by(|a, b| {
        b.pages
            .cmp(&a.pages)
            .then_with(|| a.library_code.cmp(&b.library_code))
    });

    ProvenanceRecord {
        primary_library: all_libraries.first().map(|c| c.library_code.clone()),
        num_libraries: all_libraries.len(),
        all_libraries,
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
    fn test_primary_is_largest_contributor() {
        let index = index_of(&[
            "TID_1964_01_09_001_SB.jpg",
            "TID_1964_01_09_002_SB.jpg",
            "TID_1964_01_09_003_SB.jpg",
            "TID_1964_01_09_003_BL.jpg",
        ]);
        let provenance = resolve(&index.issues_of("TID")[0]);
        assert_eq!(provenance.primary_library.as_deref(), Some("SB"));
        assert_eq!(provenance.library_codes(), vec!["SB", "BL"]);
        assert_eq!(provenance.num_libraries, 2);
        assert_eq!(provenance.secondary_libraries()[0].pages, 1);
    }

    #[test]
    fn test_ties_break_on_code() {
        let index = index_of(&[
            "TID_1964_01_09_001_SB.jpg",
            "TID_1964_01_09_002_CU.jpg",
            "TID_1964_01_09_003_BL.jpg",
        ]);
        let provenance = resolve(&index.issues_of("TID")[0]);
        assert_eq!(provenance.primary_library.as_deref(), Some("BL"));
        assert_eq!(provenance.library_codes(), vec!["BL", "CU", "SB"]);
    }

    #[test]
    fn test_duplicate_files_do_not_inflate_count() {
        let index = index_of(&[
            "TID_1964_01_09_001_CU.jpg",
            "TID_1964_01_09_001_CU.pdf",
            "TID_1964_01_09_001_CU.tif",
            "TID_1964_01_09_001_BL.jpg",
            "TID_1964_01_09_002_BL.jpg",
        ]);
        let provenance = resolve(&index.issues_of("TID")[0]);
        assert_eq!(provenance.primary_library.as_deref(), Some("BL"));
    }

    #[test]
    fn test_single_library() {
        let index = index_of(&["TID_1964_01_09_001_SB.jpg"]);
        let provenance = resolve(&index.issues_of("TID")[0]);
        assert_eq!(provenance.num_libraries, 1);
        assert!(provenance.secondary_libraries().is_empty());
    }
}

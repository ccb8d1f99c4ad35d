//! Sorted issue-date sequences for a single newspaper.

use chrono::NaiveDate;
use serde::Serialize;

/// The sorted, deduplicated publication dates of one newspaper's issues.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NewspaperTimeline {
    newspaper_code: String,
    dates: Vec<NaiveDate>,
}

impl NewspaperTimeline {
    /// Build a timeline from dates in any order; duplicates are dropped.
    pub fn new(newspaper_code: impl Into<String>, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        let mut dates: Vec<NaiveDate> = dates.into_iter().collect();
        dates.sort_unstable();
        dates.dedup();
        NewspaperTimeline {
            newspaper_code: newspaper_code.into(),
            dates,
        }
    }

    /// The newspaper this timeline belongs to.
    #[must_use]
    pub fn newspaper_code(&self) -> &str {
        &self.newspaper_code
    }

    /// Issue dates in chronological order.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Number of distinct issue dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// True if no issue is known for this newspaper.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Earliest issue date.
    #[must_use]
    pub fn first(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    /// Latest issue date.
    #[must_use]
    pub fn last(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Consecutive date pairs with their separation in days.
    pub fn intervals(&self) -> impl Iterator<Item = (NaiveDate, NaiveDate, i64)> + '_ {
        self.dates
            .windows(2)
            .map(|pair| (pair[0], pair[1], (pair[1] - pair[0]).num_days()))
    }

    /// Day separations between consecutive issues.
    #[must_use]
    pub fn day_gaps(&self) -> Vec<i64> {
        self.intervals().map(|(_, _, days)| days).collect()
    }
}

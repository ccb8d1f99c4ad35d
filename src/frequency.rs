//! Publication frequency inference from observed issue dates.
//!
//! The estimator looks at the day gaps between consecutive issues and takes
//! their median, which stays close to the true rhythm even when a run of
//! issues is missing from the corpus (a few very long gaps would drag a mean
//! upward). The median is then matched against the nominal interval of each
//! [`FrequencyClass`] with a ±50% tolerance, smallest interval first.

use std::fmt;

use serde::Serialize;

use crate::timeline::NewspaperTimeline;

/// Relative tolerance around a nominal interval.
pub const TOLERANCE: f64 = 0.5;

/// Inferred publication rhythm of a newspaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FrequencyClass {
    /// Nominal interval 1 day
    Daily,
    /// Nominal interval 7 days
    Weekly,
    /// Nominal interval 14 days
    Biweekly,
    /// Nominal interval 30 days
    Monthly,
    /// No nominal interval fits; gap estimation is not possible
    Irregular,
}

impl FrequencyClass {
    /// Classes with a nominal interval, smallest interval first.
    pub const REGULAR: [FrequencyClass; 4] = [
        FrequencyClass::Daily,
        FrequencyClass::Weekly,
        FrequencyClass::Biweekly,
        FrequencyClass::Monthly,
    ];

    /// Nominal days between issues; `None` for [`Irregular`](Self::Irregular).
    #[must_use]
    pub const fn nominal_interval_days(&self) -> Option<i64> {
        match self {
            Self::Daily => Some(1),
            Self::Weekly => Some(7),
            Self::Biweekly => Some(14),
            Self::Monthly => Some(30),
            Self::Irregular => None,
        }
    }

    /// Inclusive range of gap lengths accepted for this class.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn tolerance_band(&self) -> Option<(f64, f64)> {
        self.nominal_interval_days().map(|n| {
            let n = n as f64;
            (n * (1.0 - TOLERANCE), n * (1.0 + TOLERANCE))
        })
    }

    /// Classify a median gap; smallest matching interval wins.
    #[must_use]
    pub fn classify(median_gap_days: f64) -> Self {
        Self::REGULAR
            .into_iter()
            .find(|class| {
                class
                    .tolerance_band()
                    .is_some_and(|(low, high)| (low..=high).contains(&median_gap_days))
            })
            .unwrap_or(Self::Irregular)
    }

    /// True for [`Irregular`](Self::Irregular).
    #[must_use]
    pub const fn is_irregular(&self) -> bool {
        matches!(self, Self::Irregular)
    }
}

impl fmt::Display for FrequencyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "Daily"),
            Self::Weekly => write!(f, "Weekly"),
            Self::Biweekly => write!(f, "Bi-weekly"),
            Self::Monthly => write!(f, "Monthly"),
            Self::Irregular => write!(f, "Irregular"),
        }
    }
}

/// Result of frequency inference for one newspaper.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyEstimate {
    /// Inferred class
    pub class: FrequencyClass,
    /// Set when fewer than two distinct issue dates were available
    pub insufficient_data: bool,
    /// Number of gaps between consecutive issues
    pub gap_count: usize,
    /// Median gap in days
    pub median_gap_days: Option<f64>,
    /// Mean gap in days
    pub mean_gap_days: Option<f64>,
    /// Shortest gap in days
    pub min_gap_days: Option<i64>,
    /// Longest gap in days
    pub max_gap_days: Option<i64>,
}

impl FrequencyEstimate {
    fn insufficient() -> Self {
        FrequencyEstimate {
            class: FrequencyClass::Irregular,
            insufficient_data: true,
            gap_count: 0,
            median_gap_days: None,
            mean_gap_days: None,
            min_gap_days: None,
            max_gap_days: None,
        }
    }
}

/// Infer the publication frequency of a timeline.
///
/// With fewer than two issue dates the result is
/// [`Irregular`](FrequencyClass::Irregular) with `insufficient_data` set.
///
/// ```
/// use chrono::NaiveDate;
/// use ddcorpus::frequency::{estimate, FrequencyClass};
/// use ddcorpus::NewspaperTimeline;
///
/// let dates = [(1, 1), (1, 8), (1, 15), (3, 1)]
///     .map(|(m, d)| NaiveDate::from_ymd_opt(1964, m, d).unwrap());
/// let result = estimate(&NewspaperTimeline::new("TID", dates));
/// assert_eq!(result.class, FrequencyClass::Weekly);
/// assert_eq!(result.median_gap_days, Some(7.0));
/// ```
#[must_use]
pub fn estimate(timeline: &NewspaperTimeline) -> FrequencyEstimate {
    let mut gaps = timeline.day_gaps();
    if gaps.is_empty() {
        return FrequencyEstimate::insufficient();
    }
    gaps.sort_unstable();

    let median = median_of_sorted(&gaps);
    #[allow(clippy::cast_precision_loss)]
    let mean = gaps.iter().sum::<i64>() as f64 / gaps.len() as f64;

    FrequencyEstimate {
        class: FrequencyClass::classify(median),
        insufficient_data: false,
        gap_count: gaps.len(),
        median_gap_days: Some(median),
        mean_gap_days: Some(mean),
        min_gap_days: gaps.first().copied(),
        max_gap_days: gaps.last().copied(),
    }
}

#[allow(clippy::cast_precision_loss)]
fn median_of_sorted(sorted: &[i64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    } else {
        sorted[mid] as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn every(start: NaiveDate, step: i64, count: i64) -> NewspaperTimeline {
        NewspaperTimeline::new("TST", (0..count).map(|i| start + Duration::days(i * step)))
    }

    #[test]
    fn test_weekly_with_gap() {
        let timeline = NewspaperTimeline::new(
            "TID",
            [d(1964, 1, 1), d(1964, 1, 8), d(1964, 1, 15), d(1964, 3, 1)],
        );
        let result = estimate(&timeline);
        assert_eq!(result.class, FrequencyClass::Weekly);
        assert!(!result.insufficient_data);
        assert_eq!(result.gap_count, 3);
        assert_eq!(result.min_gap_days, Some(7));
        // 1964 is a leap year: 15 January to 1 March spans 46 days
        assert_eq!(result.max_gap_days, Some(46));
        assert_eq!(result.mean_gap_days, Some(20.0));
    }

    #[test]
    fn test_regular_rhythms() {
        assert_eq!(estimate(&every(d(1960, 1, 1), 1, 30)).class, FrequencyClass::Daily);
        assert_eq!(estimate(&every(d(1960, 1, 1), 7, 10)).class, FrequencyClass::Weekly);
        assert_eq!(estimate(&every(d(1960, 1, 1), 14, 10)).class, FrequencyClass::Biweekly);
        assert_eq!(estimate(&every(d(1960, 1, 1), 30, 10)).class, FrequencyClass::Monthly);
        assert_eq!(estimate(&every(d(1960, 1, 1), 90, 5)).class, FrequencyClass::Irregular);
    }

    #[test]
    fn test_median_resists_long_gaps() {
        // weekly run with two very long breaks pulling the mean above 70 days
        let mut dates: Vec<NaiveDate> = (0..6).map(|i| d(1960, 1, 1) + Duration::days(i * 7)).collect();
        dates.push(d(1960, 9, 1));
        dates.push(d(1961, 6, 1));
        let result = estimate(&NewspaperTimeline::new("TST", dates));
        assert_eq!(result.class, FrequencyClass::Weekly);
        assert!(result.mean_gap_days.unwrap() > 45.0);
    }

    #[test]
    fn test_even_gap_count_median() {
        let timeline = NewspaperTimeline::new("TST", [d(1960, 1, 1), d(1960, 1, 2), d(1960, 1, 5)]);
        let result = estimate(&timeline);
        assert_eq!(result.median_gap_days, Some(2.0));
        // 2 days is outside both the daily (0.5-1.5) and weekly (3.5-10.5) bands
        assert_eq!(result.class, FrequencyClass::Irregular);
    }

    #[test]
    fn test_overlapping_bands_prefer_smaller_interval() {
        // 8 days falls in both the weekly and the bi-weekly band
        assert_eq!(FrequencyClass::classify(8.0), FrequencyClass::Weekly);
        assert_eq!(FrequencyClass::classify(10.5), FrequencyClass::Weekly);
        assert_eq!(FrequencyClass::classify(11.0), FrequencyClass::Biweekly);
        assert_eq!(FrequencyClass::classify(21.5), FrequencyClass::Monthly);
        assert_eq!(FrequencyClass::classify(45.0), FrequencyClass::Monthly);
        assert_eq!(FrequencyClass::classify(45.5), FrequencyClass::Irregular);
        assert_eq!(FrequencyClass::classify(1.5), FrequencyClass::Daily);
        assert_eq!(FrequencyClass::classify(3.0), FrequencyClass::Irregular);
    }

    #[test]
    fn test_insufficient_data() {
        let single = NewspaperTimeline::new("TID", [d(1964, 1, 1)]);
        let result = estimate(&single);
        assert_eq!(result.class, FrequencyClass::Irregular);
        assert!(result.insufficient_data);
        assert_eq!(result.median_gap_days, None);

        let empty = NewspaperTimeline::new("TID", []);
        assert!(estimate(&empty).insufficient_data);
    }

    #[test]
    fn test_nominal_intervals() {
        assert_eq!(FrequencyClass::Daily.nominal_interval_days(), Some(1));
        assert_eq!(FrequencyClass::Monthly.nominal_interval_days(), Some(30));
        assert_eq!(FrequencyClass::Irregular.nominal_interval_days(), None);
        assert_eq!(FrequencyClass::Weekly.tolerance_band(), Some((3.5, 10.5)));
        assert_eq!(FrequencyClass::Biweekly.to_string(), "Bi-weekly");
    }
}

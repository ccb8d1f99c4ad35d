//! Gap detection and missing-issue estimation.
//!
//! Given a newspaper's timeline and its inferred frequency, any pair of
//! consecutive issues further apart than twice the nominal interval is a
//! [`Gap`], and the number of issues that should have appeared in between is
//! estimated as `floor(days / interval) - 1`.
//!
//! Irregular newspapers have no interval to measure against. For them the
//! analysis is [`GapAnalysis::Skipped`] and the completeness percentage is
//! `None`, never zero.

use chrono::NaiveDate;
use serde::Serialize;

use crate::frequency::FrequencyClass;
use crate::timeline::NewspaperTimeline;

/// Multiple of the nominal interval above which a separation is a gap.
pub const GAP_FACTOR: i64 = 2;

/// A significant break between two consecutive issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gap {
    /// Last issue before the break
    pub from: NaiveDate,
    /// First issue after the break
    pub to: NaiveDate,
    /// Days between the two issues
    pub observed_days: i64,
    /// Issues presumed missing inside the break
    pub estimated_missing_issues: u64,
}

/// Why gap estimation was not performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// Fewer than two issues, so no frequency could be inferred
    InsufficientData,
    /// Issue spacing matches no nominal interval
    IrregularFrequency,
}

/// Outcome of gap analysis for one newspaper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GapAnalysis {
    /// Gaps measured against a nominal interval.
    Estimated {
        /// Frequency the gaps were measured against
        frequency: FrequencyClass,
        /// Nominal interval in days
        nominal_interval_days: i64,
        /// Gaps in chronological order
        gaps: Vec<Gap>,
    },
    /// No estimate is possible.
    Skipped {
        /// Why estimation was skipped
        reason: SkipReason,
    },
}

impl GapAnalysis {
    /// The gaps found; empty when estimation was skipped.
    #[must_use]
    pub fn gaps(&self) -> &[Gap] {
        match self {
            Self::Estimated { gaps, .. } => gaps,
            Self::Skipped { .. } => &[],
        }
    }

    /// True if no estimate was made.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }

    /// Sum of estimated missing issues, or `None` when skipped.
    #[must_use]
    pub fn total_estimated_missing(&self) -> Option<u64> {
        match self {
            Self::Estimated { gaps, .. } => {
                Some(gaps.iter().map(|g| g.estimated_missing_issues).sum())
            },
            Self::Skipped { .. } => None,
        }
    }

    /// Threshold in days above which a separation counted as a gap.
    #[must_use]
    pub fn threshold_days(&self) -> Option<i64> {
        match self {
            Self::Estimated {
                nominal_interval_days,
                ..
            } => Some(nominal_interval_days * GAP_FACTOR),
            Self::Skipped { .. } => None,
        }
    }
}

/// Find significant gaps in a timeline for a given frequency.
///
/// ```
/// use chrono::NaiveDate;
/// use ddcorpus::frequency::FrequencyClass;
/// use ddcorpus::gaps::find_gaps;
/// use ddcorpus::NewspaperTimeline;
///
/// let dates = [(1, 1), (1, 8), (1, 15), (3, 1)]
///     .map(|(m, d)| NaiveDate::from_ymd_opt(1964, m, d).unwrap());
/// let analysis = find_gaps(&NewspaperTimeline::new("TID", dates), FrequencyClass::Weekly);
/// assert_eq!(analysis.gaps().len(), 1);
/// assert_eq!(analysis.gaps()[0].estimated_missing_issues, 5);
/// ```
#[must_use]
pub fn find_gaps(timeline: &NewspaperTimeline, frequency: FrequencyClass) -> GapAnalysis {
    let Some(interval) = frequency.nominal_interval_days() else {
        return GapAnalysis::Skipped {
            reason: SkipReason::IrregularFrequency,
        };
    };

    let gaps = timeline
        .intervals()
        .filter(|(_, _, days)| *days > interval * GAP_FACTOR)
        .map(|(from, to, days)| Gap {
            from,
            to,
            observed_days: days,
            estimated_missing_issues: estimate_missing(days, interval),
        })
        .collect();

    GapAnalysis::Estimated {
        frequency,
        nominal_interval_days: interval,
        gaps,
    }
}

/// `floor(days / interval) - 1`, clamped at zero.
#[must_use]
pub fn estimate_missing(observed_days: i64, nominal_interval_days: i64) -> u64 {
    if nominal_interval_days <= 0 {
        return 0;
    }
    u64::try_from(observed_days / nominal_interval_days - 1).unwrap_or(0)
}

/// Share of expected issues present: `observed / (observed + missing)`.
///
/// Clamped to `[0, 1]`. `None` when the analysis was skipped or there is
/// nothing to measure.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn completeness_percentage(observed_issue_count: usize, analysis: &GapAnalysis) -> Option<f64> {
    let missing = analysis.total_estimated_missing()?;
    let observed = observed_issue_count as f64;
    let expected = observed + missing as f64;
    if expected <= 0.0 {
        return None;
    }
    Some((observed / expected).clamp(0.0, 1.0))
}

/// A stretch without issues longer than a fixed threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoverageGap {
    /// Last issue before the break
    pub from: NaiveDate,
    /// First issue after the break
    pub to: NaiveDate,
    /// Days between the two issues
    pub days: i64,
}

/// Frequency-independent breaks in coverage longer than `threshold_days`.
///
/// Useful for irregular newspapers, where [`find_gaps`] cannot estimate
/// anything but long silences are still worth reporting.
#[must_use]
pub fn coverage_gaps(timeline: &NewspaperTimeline, threshold_days: i64) -> Vec<CoverageGap> {
    timeline
        .intervals()
        .filter(|(_, _, days)| *days > threshold_days)
        .map(|(from, to, days)| CoverageGap { from, to, days })
        .collect()
}

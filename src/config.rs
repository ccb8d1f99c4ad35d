//! Configuration options for corpus scanning.
//!
//! This module provides the [`ScanConfig`] struct which controls which file
//! extensions are admitted, whether filename parsing runs in parallel, and
//! the threshold used for frequency-independent coverage gaps.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CorpusError, Result};

/// Extensions admitted when no configuration is supplied.
pub const DEFAULT_EXTENSIONS: [&str; 4] = ["jpg", "png", "tif", "pdf"];

/// Default day threshold for [`coverage_gaps`](crate::gaps::coverage_gaps).
pub const DEFAULT_COVERAGE_GAP_DAYS: i64 = 60;

/// Configuration for a corpus scan.
///
/// # Examples
///
/// ```
/// use ddcorpus::ScanConfig;
///
/// // Default configuration (jpg/png/tif/pdf, sequential parsing)
/// let config = ScanConfig::default();
/// assert!(config.allows_extension("JPG"));
///
/// // Accept TIFF spelled out and parse in parallel
/// let config = ScanConfig::default()
///     .with_extension("tiff")
///     .with_parallel(true);
/// assert!(config.allows_extension("tiff"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Lowercase file extensions (without the dot) accepted by the parser.
    pub allowed_extensions: Vec<String>,

    /// Parse filenames on the rayon thread pool.
    ///
    /// The resulting index is identical to a sequential scan.
    pub parallel: bool,

    /// Minimum separation, in days, reported by coverage-gap analysis.
    pub coverage_gap_days: i64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
            parallel: false,
            coverage_gap_days: DEFAULT_COVERAGE_GAP_DAYS,
        }
    }
}

impl ScanConfig {
    /// Parse a configuration from a JSON document.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::Json`] for malformed JSON and
    /// [`CorpusError::InvalidConfig`] if the result fails [`validate`](Self::validate).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut config: ScanConfig = serde_json::from_str(json)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be read, otherwise the same
    /// errors as [`from_json_str`](Self::from_json_str).
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Add an accepted extension (case-insensitive, leading dot optional).
    #[must_use]
    pub fn with_extension(mut self, extension: &str) -> Self {
        let ext = normalize_extension(extension);
        if !ext.is_empty() && !self.allowed_extensions.contains(&ext) {
            self.allowed_extensions.push(ext);
        }
        self
    }

    /// Replace the accepted extension list.
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_extensions = extensions
            .into_iter()
            .map(|e| normalize_extension(e.as_ref()))
            .collect();
        self.normalize();
        self
    }

    /// Enable or disable parallel filename parsing.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the coverage-gap threshold in days.
    ///
    /// A non-positive value leaves the threshold unchanged.
    #[must_use]
    pub fn with_coverage_gap_days(mut self, days: i64) -> Self {
        if days > 0 {
            self.coverage_gap_days = days;
        }
        self
    }

    /// The coverage-gap threshold actually applied: `coverage_gap_days`, or
    /// [`DEFAULT_COVERAGE_GAP_DAYS`] when that is not positive.
    #[must_use]
    pub fn coverage_threshold(&self) -> i64 {
        if self.coverage_gap_days > 0 {
            self.coverage_gap_days
        } else {
            DEFAULT_COVERAGE_GAP_DAYS
        }
    }

    /// Check whether `extension` (without dot) is accepted.
    ///
    /// Both sides compare case-insensitively, so a list built by hand with
    /// `"JPG"` behaves like one loaded from JSON.
    #[must_use]
    pub fn allows_extension(&self, extension: &str) -> bool {
        let ext = normalize_extension(extension);
        self.allowed_extensions
            .iter()
            .any(|allowed| normalize_extension(allowed) == ext)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::InvalidConfig`] if no extension is accepted or the
    /// coverage-gap threshold is not positive.
    pub fn validate(&self) -> Result<()> {
        if self.allowed_extensions.is_empty() {
            return Err(CorpusError::InvalidConfig(
                "allowed_extensions must not be empty".to_string(),
            ));
        }
        if self.coverage_gap_days <= 0 {
            return Err(CorpusError::InvalidConfig(format!(
                "coverage_gap_days must be positive, got {}",
                self.coverage_gap_days
            )));
        }
        Ok(())
    }

    fn normalize(&mut self) {
        let mut seen = Vec::with_capacity(self.allowed_extensions.len());
        for ext in self.allowed_extensions.drain(..) {
            let ext = normalize_extension(&ext);
            if !ext.is_empty() && !seen.contains(&ext) {
                seen.push(ext);
            }
        }
        self.allowed_extensions = seen;
    }
}

pub(crate) fn normalize_extension(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extensions() {
        let config = ScanConfig::default();
        assert_eq!(config.allowed_extensions, vec!["jpg", "png", "tif", "pdf"]);
        assert!(config.allows_extension("PDF"));
        assert!(!config.allows_extension("jpeg"));
        assert!(!config.parallel);
        assert_eq!(config.coverage_gap_days, 60);
    }

    #[test]
    fn test_with_extension_normalizes() {
        let config = ScanConfig::default().with_extension(".TIFF").with_extension("jpg");
        assert!(config.allows_extension("tiff"));
        assert_eq!(
            config.allowed_extensions.iter().filter(|e| *e == "jpg").count(),
            1
        );
    }

    #[test]
    fn test_hand_built_extension_list() {
        let config = ScanConfig {
            allowed_extensions: vec!["JPG".to_string()],
            ..ScanConfig::default()
        };
        assert!(config.allows_extension("jpg"));
        assert!(config.allows_extension("JPG"));
        assert!(!config.allows_extension("png"));
    }

    #[test]
    fn test_non_positive_coverage_threshold_ignored() {
        let config = ScanConfig::default().with_coverage_gap_days(90).with_coverage_gap_days(-1);
        assert_eq!(config.coverage_gap_days, 90);
        assert!(config.validate().is_ok());

        let config = ScanConfig {
            coverage_gap_days: 0,
            ..ScanConfig::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.coverage_threshold(), DEFAULT_COVERAGE_GAP_DAYS);
        assert_eq!(ScanConfig::default().with_coverage_gap_days(5).coverage_threshold(), 5);
    }

    #[test]
    fn test_from_json_partial() {
        let config = ScanConfig::from_json_str(r#"{"parallel": true}"#).unwrap();
        assert!(config.parallel);
        assert_eq!(config.allowed_extensions.len(), 4);
    }

    #[test]
    fn test_from_json_normalizes_extensions() {
        let config =
            ScanConfig::from_json_str(r#"{"allowed_extensions": [".JPG", "jpeg", "jpg"]}"#)
                .unwrap();
        assert_eq!(config.allowed_extensions, vec!["jpg", "jpeg"]);
    }

    #[test]
    fn test_from_json_rejects_empty_extensions() {
        let err = ScanConfig::from_json_str(r#"{"allowed_extensions": []}"#).unwrap_err();
        assert!(matches!(err, CorpusError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_json_rejects_zero_threshold() {
        let err = ScanConfig::from_json_str(r#"{"coverage_gap_days": 0}"#).unwrap_err();
        assert!(matches!(err, CorpusError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = ScanConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CorpusError::Json(_)));
    }
}

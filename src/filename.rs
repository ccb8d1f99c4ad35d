//! Filename parsing and validation for corpus page scans.
//!
//! Every page scan in the corpus is named
//! `CCC_YYYY_MM_DD_PPP_LL[_SHELFMARK].EXT`:
//!
//! | Part | Meaning |
//! |------|---------|
//! | `CCC` | newspaper code, 3 uppercase letters |
//! | `YYYY_MM_DD` | zero-padded publication date |
//! | `PPP` | page number, 3 digits, `001`-`999` |
//! | `LL` | holding library code, 2 uppercase letters |
//! | `SHELFMARK` | optional opaque archival identifier (may contain `_`) |
//! | `EXT` | file extension from the configured allow-list |
//!
//! Validation checks the parts in a fixed order and reports only the first
//! failure, so each rejected filename carries exactly one cause.
//!
//! # Examples
//!
//! ```
//! use ddcorpus::filename::{parse_filename, ValidationErrorKind};
//!
//! let record = parse_filename("TID_1964_01_09_001_SB_Zsn128162MR.jpg")?;
//! assert_eq!(record.newspaper_code, "TID");
//! assert_eq!(record.page_number, 1);
//! assert_eq!(record.shelfmark.as_deref(), Some("Zsn128162MR"));
//!
//! let err = parse_filename("TID_1964_13_09_001_SB.jpg").unwrap_err();
//! assert_eq!(err.kind, ValidationErrorKind::Date);
//! # Ok::<(), ddcorpus::filename::ValidationError>(())
//! ```

use std::fmt;

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{normalize_extension, ScanConfig};

/// Number of underscore-separated parts before the optional shelfmark.
const REQUIRED_PARTS: usize = 6;

lazy_static! {
    static ref DEFAULT_PARSER: FilenameParser = FilenameParser::default();
    static ref FIXABLE_NAME: Option<Regex> = Regex::new(
        r"^([A-Za-z]{3})_([0-9]{4})_([0-9]{1,2})_([0-9]{1,2})_([0-9]{1,3})_([A-Za-z]{2})(?:_(.+))?$",
    )
    .ok();
}

/// One page scan, as described by its filename.
///
/// Records are created once by [`FilenameParser::parse`] and never mutated.
/// The derived ordering sorts by newspaper, date, page, then library.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PageRecord {
    /// Three-letter newspaper code (e.g. `TID`)
    pub newspaper_code: String,
    /// Publication date of the issue
    pub date: NaiveDate,
    /// Page number within the issue (1-999)
    pub page_number: u16,
    /// Two-letter code of the holding library (e.g. `SB`)
    pub library_code: String,
    /// Archival shelfmark, if the filename carries one
    pub shelfmark: Option<String>,
    /// File extension as written in the filename, without the dot
    pub extension: String,
}

impl PageRecord {
    /// Publication year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Publication month (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Publication day of month.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// The `(newspaper, date)` pair identifying the issue this page belongs to.
    #[must_use]
    pub fn issue_key(&self) -> (&str, NaiveDate) {
        (&self.newspaper_code, self.date)
    }

    /// Re-serialize the record into its canonical filename.
    ///
    /// ```
    /// use ddcorpus::filename::parse_filename;
    ///
    /// let name = "QTN_1965_05_15_012_CU_Box_4.pdf";
    /// assert_eq!(parse_filename(name)?.to_filename(), name);
    /// # Ok::<(), ddcorpus::filename::ValidationError>(())
    /// ```
    #[must_use]
    pub fn to_filename(&self) -> String {
        let mut name = format!(
            "{}_{:04}_{:02}_{:02}_{:03}_{}",
            self.newspaper_code,
            self.date.year(),
            self.date.month(),
            self.date.day(),
            self.page_number,
            self.library_code
        );
        if let Some(shelfmark) = &self.shelfmark {
            name.push('_');
            name.push_str(shelfmark);
        }
        name.push('.');
        name.push_str(&self.extension);
        name
    }
}

impl fmt::Display for PageRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_filename())
    }
}

/// The rule a filename failed, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Overall shape is wrong: missing extension, too few parts, empty part or shelfmark
    Structure,
    /// Newspaper code is not 3 uppercase letters
    Code,
    /// Year/month/day malformed or not a calendar date
    Date,
    /// Page number not 3 digits or outside 001-999
    Page,
    /// Library code is not 2 uppercase letters
    Library,
    /// Extension not in the allow-list
    Extension,
}

impl ValidationErrorKind {
    /// Stable reason code used in exports (e.g. `"DateError"`).
    #[must_use]
    pub const fn reason_code(&self) -> &'static str {
        match self {
            Self::Structure => "StructureError",
            Self::Code => "CodeError",
            Self::Date => "DateError",
            Self::Page => "PageError",
            Self::Library => "LibraryError",
            Self::Extension => "ExtensionError",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason_code())
    }
}

/// A filename rejected by the parser, with the single rule it failed.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{kind}: {detail}")]
pub struct ValidationError {
    /// Which rule failed
    pub kind: ValidationErrorKind,
    /// Human-readable description naming the offending part
    pub detail: String,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, detail: impl Into<String>) -> Self {
        ValidationError {
            kind,
            detail: detail.into(),
        }
    }
}

/// Parser for corpus filenames.
///
/// Holds the extension allow-list, lowercased; everything else about the
/// pattern is fixed.
#[derive(Debug, Clone)]
pub struct FilenameParser {
    allowed_extensions: Vec<String>,
}

impl Default for FilenameParser {
    fn default() -> Self {
        Self::new(&ScanConfig::default())
    }
}

impl FilenameParser {
    /// Create a parser using the extension allow-list of `config`.
    #[must_use]
    pub fn new(config: &ScanConfig) -> Self {
        let mut allowed_extensions: Vec<String> = Vec::new();
        for ext in config.allowed_extensions.iter().map(|e| normalize_extension(e)) {
            if !ext.is_empty() && !allowed_extensions.contains(&ext) {
                allowed_extensions.push(ext);
            }
        }
        FilenameParser { allowed_extensions }
    }

    /// Parse a filename into a [`PageRecord`].
    ///
    /// Any directory prefix is ignored; only the basename is interpreted.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule, checked in the order structure, code,
    /// date, page, library, extension.
    pub fn parse(&self, filename: &str) -> Result<PageRecord, ValidationError> {
        let name = basename(filename);
        let (stem, extension) = split_extension(name)?;

        // the shelfmark is whatever follows the sixth part, underscores included
        let parts: Vec<&str> = stem.splitn(REQUIRED_PARTS + 1, '_').collect();
        if parts.len() < REQUIRED_PARTS {
            return Err(ValidationError::new(
                ValidationErrorKind::Structure,
                format!(
                    "expected at least {REQUIRED_PARTS} underscore-separated parts, got {}",
                    parts.len()
                ),
            ));
        }
        if let Some(position) = parts[..REQUIRED_PARTS].iter().position(|p| p.is_empty()) {
            return Err(ValidationError::new(
                ValidationErrorKind::Structure,
                format!("part {} is empty", position + 1),
            ));
        }
        let shelfmark = parts.get(REQUIRED_PARTS).copied();
        if shelfmark == Some("") {
            return Err(ValidationError::new(
                ValidationErrorKind::Structure,
                "shelfmark is empty (trailing '_')",
            ));
        }

        let newspaper_code = check_letters(parts[0], 3, ValidationErrorKind::Code, "newspaper code")?;
        let date = check_date(parts[1], parts[2], parts[3])?;
        let page_number = check_page(parts[4])?;
        let library_code = check_letters(parts[5], 2, ValidationErrorKind::Library, "library code")?;
        self.check_extension(extension)?;

        Ok(PageRecord {
            newspaper_code: newspaper_code.to_string(),
            date,
            page_number,
            library_code: library_code.to_string(),
            shelfmark: shelfmark.map(str::to_string),
            extension: extension.to_string(),
        })
    }

    /// Check whether a filename would be accepted.
    #[must_use]
    pub fn is_valid(&self, filename: &str) -> bool {
        self.parse(filename).is_ok()
    }

    /// Propose a corrected filename for common naming mistakes.
    ///
    /// Upper-cases the newspaper and library codes and zero-pads the date and
    /// page parts. Returns `None` if the name is already canonical, is too
    /// malformed to guess at, or would still be rejected after correction.
    ///
    /// ```
    /// use ddcorpus::filename::FilenameParser;
    ///
    /// let parser = FilenameParser::default();
    /// assert_eq!(
    ///     parser.suggest_fix("tid_1964_1_9_1_sb.jpg").as_deref(),
    ///     Some("TID_1964_01_09_001_SB.jpg")
    /// );
    /// assert_eq!(parser.suggest_fix("TID_1964_01_09_001_SB.jpg"), None);
    /// ```
    #[must_use]
    pub fn suggest_fix(&self, filename: &str) -> Option<String> {
        let name = basename(filename);
        let (stem, extension) = split_extension(name).ok()?;

        let caps = FIXABLE_NAME.as_ref()?.captures(stem)?;

        let number = |i: usize| caps.get(i)?.as_str().parse::<u32>().ok();
        let mut suggested = format!(
            "{}_{:04}_{:02}_{:02}_{:03}_{}",
            caps.get(1)?.as_str().to_ascii_uppercase(),
            number(2)?,
            number(3)?,
            number(4)?,
            number(5)?,
            caps.get(6)?.as_str().to_ascii_uppercase()
        );
        if let Some(shelfmark) = caps.get(7) {
            suggested.push('_');
            suggested.push_str(shelfmark.as_str());
        }
        suggested.push('.');
        suggested.push_str(extension);

        (suggested != name && self.is_valid(&suggested)).then_some(suggested)
    }

    fn check_extension<'a>(&self, extension: &'a str) -> Result<&'a str, ValidationError> {
        let lower = extension.to_ascii_lowercase();
        if self.allowed_extensions.iter().any(|allowed| *allowed == lower) {
            Ok(extension)
        } else {
            Err(ValidationError::new(
                ValidationErrorKind::Extension,
                format!(
                    "extension '{extension}' is not one of: {}",
                    self.allowed_extensions.join(", ")
                ),
            ))
        }
    }
}

/// Parse a filename with the default configuration.
///
/// # Errors
///
/// See [`FilenameParser::parse`].
pub fn parse_filename(filename: &str) -> Result<PageRecord, ValidationError> {
    DEFAULT_PARSER.parse(filename)
}

/// Build a canonical filename from its parts, validated by the default parser.
///
/// `extension` may be given with or without a leading dot.
///
/// # Errors
///
/// Returns the [`ValidationError`] the assembled name fails, e.g. a `Page`
/// error for page 0 or a `Date` error for 31 April.
///
/// ```
/// use ddcorpus::filename::generate_filename;
///
/// let name = generate_filename("TID", 1964, 1, 9, 1, "SB", Some("Zsn128162MR"), ".jpg")?;
/// assert_eq!(name, "TID_1964_01_09_001_SB_Zsn128162MR.jpg");
/// # Ok::<(), ddcorpus::filename::ValidationError>(())
/// ```
#[allow(clippy::too_many_arguments)]
pub fn generate_filename(
    newspaper_code: &str,
    year: i32,
    month: u32,
    day: u32,
    page: u16,
    library_code: &str,
    shelfmark: Option<&str>,
    extension: &str,
) -> Result<String, ValidationError> {
    if !(0..=9999).contains(&year) {
        return Err(ValidationError::new(
            ValidationErrorKind::Date,
            format!("year {year} cannot be written with 4 digits"),
        ));
    }
    let mut name =
        format!("{newspaper_code}_{year:04}_{month:02}_{day:02}_{page:03}_{library_code}");
    if let Some(shelfmark) = shelfmark.filter(|s| !s.is_empty()) {
        name.push('_');
        name.push_str(shelfmark);
    }
    name.push('.');
    name.push_str(extension.trim_start_matches('.'));

    // Over-wide numbers (month 123) format into extra digits; the parser
    // rejects them as malformed parts.
    parse_filename(&name)?;
    Ok(name)
}

fn basename(filename: &str) -> &str {
    filename
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(filename)
}

fn split_extension(name: &str) -> Result<(&str, &str), ValidationError> {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Ok((stem, ext)),
        _ => Err(ValidationError::new(
            ValidationErrorKind::Structure,
            format!("'{name}' has no file extension"),
        )),
    }
}

fn check_letters<'a>(
    part: &'a str,
    len: usize,
    kind: ValidationErrorKind,
    what: &str,
) -> Result<&'a str, ValidationError> {
    if part.len() == len && part.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(part)
    } else {
        Err(ValidationError::new(
            kind,
            format!("invalid {what} '{part}' (must be {len} uppercase letters)"),
        ))
    }
}

fn check_digits(part: &str, len: usize) -> Option<u32> {
    if part.len() == len && part.bytes().all(|b| b.is_ascii_digit()) {
        part.parse().ok()
    } else {
        None
    }
}

fn check_date(year: &str, month: &str, day: &str) -> Result<NaiveDate, ValidationError> {
    let date_error = |detail: String| ValidationError::new(ValidationErrorKind::Date, detail);

    let y = check_digits(year, 4)
        .ok_or_else(|| date_error(format!("invalid year '{year}' (must be 4 digits)")))?;
    let m = check_digits(month, 2)
        .ok_or_else(|| date_error(format!("invalid month '{month}' (must be 2 digits)")))?;
    let d = check_digits(day, 2)
        .ok_or_else(|| date_error(format!("invalid day '{day}' (must be 2 digits)")))?;

    if !(1..=12).contains(&m) {
        return Err(date_error(format!("month '{month}' is not in 01-12")));
    }

    let y = i32::try_from(y).map_err(|_| date_error(format!("year '{year}' overflows")))?;
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| date_error(format!("day '{day}' does not exist in {year}-{month}")))
}

fn check_page(part: &str) -> Result<u16, ValidationError> {
    match check_digits(part, 3) {
        Some(0) => Err(ValidationError::new(
            ValidationErrorKind::Page,
            "page number '000' is out of range (001-999)",
        )),
        Some(page) => u16::try_from(page).map_err(|_| {
            ValidationError::new(ValidationErrorKind::Page, format!("page number '{part}' overflows"))
        }),
        None => Err(ValidationError::new(
            ValidationErrorKind::Page,
            format!("invalid page number '{part}' (must be 3 digits)"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(filename: &str) -> ValidationErrorKind {
        parse_filename(filename).unwrap_err().kind
    }

    #[test]
    fn test_parse_full_filename() {
        let record = parse_filename("TID_1964_01_09_001_SB_Zsn128162MR.jpg").unwrap();
        assert_eq!(record.newspaper_code, "TID");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(1964, 1, 9).unwrap());
        assert_eq!(record.page_number, 1);
        assert_eq!(record.library_code, "SB");
        assert_eq!(record.shelfmark.as_deref(), Some("Zsn128162MR"));
        assert_eq!(record.extension, "jpg");
        assert_eq!((record.year(), record.month(), record.day()), (1964, 1, 9));
    }

    #[test]
    fn test_parse_without_shelfmark() {
        let record = parse_filename("QTN_1965_05_15_001_CU.pdf").unwrap();
        assert_eq!(record.shelfmark, None);
        assert_eq!(record.extension, "pdf");
    }

    #[test]
    fn test_shelfmark_keeps_underscores() {
        let record = parse_filename("TIM_1950_03_01_004_LT_Box_12_folder_3.tif").unwrap();
        assert_eq!(record.shelfmark.as_deref(), Some("Box_12_folder_3"));
    }

    #[test]
    fn test_shelfmark_is_opaque() {
        let name = "TID_1964_01_09_001_SB_Box__1.jpg";
        let record = parse_filename(name).unwrap();
        assert_eq!(record.shelfmark.as_deref(), Some("Box__1"));
        assert_eq!(record.to_filename(), name);

        let record = parse_filename("TID_1964_01_09_001_SB__Box_.jpg").unwrap();
        assert_eq!(record.shelfmark.as_deref(), Some("_Box_"));

        let err = parse_filename("TID_1964_01_09_001_SB_.jpg").unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::Structure);
        assert!(err.detail.contains("shelfmark"));
    }

    #[test]
    fn test_directory_prefix_ignored() {
        let record = parse_filename("corpus/TID/1964/TID_1964_01_09_002_SB.jpg").unwrap();
        assert_eq!(record.page_number, 2);
        let record = parse_filename(r"C:\scans\TID_1964_01_09_003_SB.jpg").unwrap();
        assert_eq!(record.page_number, 3);
    }

    #[test]
    fn test_structure_errors() {
        assert_eq!(kind_of("TID_1964_01_09_001_SB"), ValidationErrorKind::Structure);
        assert_eq!(kind_of("TID_1964_01_09_001.jpg"), ValidationErrorKind::Structure);
        assert_eq!(kind_of("TID_1964__09_001_SB.jpg"), ValidationErrorKind::Structure);
        assert_eq!(kind_of("TID_1964_01_09_001_SB_.jpg"), ValidationErrorKind::Structure);
        assert_eq!(kind_of(".jpg"), ValidationErrorKind::Structure);
        assert_eq!(kind_of(""), ValidationErrorKind::Structure);
    }

    #[test]
    fn test_code_errors() {
        assert_eq!(kind_of("td_1964_01_09_001_SB.jpg"), ValidationErrorKind::Code);
        assert_eq!(kind_of("ABCD_1964_01_09_001_SB.jpg"), ValidationErrorKind::Code);
        assert_eq!(kind_of("T1D_1964_01_09_001_SB.jpg"), ValidationErrorKind::Code);
    }

    #[test]
    fn test_date_errors() {
        assert_eq!(kind_of("TID_1964_13_09_001_SB.jpg"), ValidationErrorKind::Date);
        assert_eq!(kind_of("TID_1964_00_09_001_SB.jpg"), ValidationErrorKind::Date);
        assert_eq!(kind_of("TID_64_01_09_001_SB.jpg"), ValidationErrorKind::Date);
        assert_eq!(kind_of("TID_1964_1_09_001_SB.jpg"), ValidationErrorKind::Date);
        assert_eq!(kind_of("TID_1964_04_31_001_SB.jpg"), ValidationErrorKind::Date);
        assert_eq!(kind_of("TID_1964_01_00_001_SB.jpg"), ValidationErrorKind::Date);
    }

    #[test]
    fn test_leap_years() {
        assert!(parse_filename("TID_1964_02_29_001_SB.jpg").is_ok());
        assert_eq!(kind_of("TID_1965_02_29_001_SB.jpg"), ValidationErrorKind::Date);
        assert!(parse_filename("TID_2000_02_29_001_SB.jpg").is_ok());
        assert_eq!(kind_of("TID_1900_02_29_001_SB.jpg"), ValidationErrorKind::Date);
    }

    #[test]
    fn test_page_errors() {
        assert_eq!(kind_of("TID_1964_01_09_000_SB.jpg"), ValidationErrorKind::Page);
        assert_eq!(kind_of("TID_1964_01_09_01_SB.jpg"), ValidationErrorKind::Page);
        assert_eq!(kind_of("TID_1964_01_09_1000_SB.jpg"), ValidationErrorKind::Page);
        assert_eq!(kind_of("TID_1964_01_09_0a1_SB.jpg"), ValidationErrorKind::Page);
        assert!(parse_filename("TID_1964_01_09_999_SB.jpg").is_ok());
    }

    #[test]
    fn test_library_errors() {
        assert_eq!(kind_of("TID_1964_01_09_001_sb.jpg"), ValidationErrorKind::Library);
        assert_eq!(kind_of("TID_1964_01_09_001_SBX.jpg"), ValidationErrorKind::Library);
    }

    #[test]
    fn test_extension_errors() {
        assert_eq!(kind_of("TID_1964_01_09_001_SB.gif"), ValidationErrorKind::Extension);
        assert_eq!(kind_of("TID_1964_01_09_001_SB.jpeg"), ValidationErrorKind::Extension);
        let record = parse_filename("TID_1964_01_09_001_SB.JPG").unwrap();
        assert_eq!(record.extension, "JPG");
    }

    #[test]
    fn test_custom_extensions() {
        let parser = FilenameParser::new(&ScanConfig::default().with_extension("jpeg"));
        assert!(parser.is_valid("TID_1964_01_09_001_SB.jpeg"));
        assert!(!DEFAULT_PARSER.is_valid("TID_1964_01_09_001_SB.jpeg"));
    }

    #[test]
    fn test_extension_list_case_insensitive() {
        let config = ScanConfig {
            allowed_extensions: vec!["JPG".to_string(), ".Tif".to_string()],
            ..ScanConfig::default()
        };
        let parser = FilenameParser::new(&config);
        assert!(parser.is_valid("TID_1964_01_09_001_SB.jpg"));
        assert!(parser.is_valid("TID_1964_01_09_001_SB.JPG"));
        assert!(parser.is_valid("TID_1964_01_09_001_SB.tif"));
        let err = parser.parse("TID_1964_01_09_001_SB.png").unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::Extension);
        assert!(err.detail.ends_with("jpg, tif"));
    }

    #[test]
    fn test_first_failure_wins() {
        // every part is wrong; the code check comes first after structure
        assert_eq!(kind_of("td_1964_13_09_000_s.gif"), ValidationErrorKind::Code);
        // date and page both wrong
        assert_eq!(kind_of("TID_1964_13_09_000_SB.jpg"), ValidationErrorKind::Date);
        // library and extension both wrong
        assert_eq!(kind_of("TID_1964_01_09_001_s.gif"), ValidationErrorKind::Library);
    }

    #[test]
    fn test_error_message_names_cause() {
        let err = parse_filename("TID_1964_13_09_001_SB.jpg").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("DateError"));
        assert!(message.contains("13"));
    }

    #[test]
    fn test_round_trip() {
        for name in [
            "TID_1964_01_09_001_SB_Zsn128162MR.jpg",
            "QTN_1965_05_15_012_CU.pdf",
            "TIM_1950_03_01_004_LT_Box_12.TIF",
        ] {
            assert_eq!(parse_filename(name).unwrap().to_filename(), name);
        }
    }

    #[test]
    fn test_generate_filename() {
        let name = generate_filename("TID", 1964, 1, 9, 1, "SB", Some("Zsn128162MR"), ".jpg")
            .unwrap();
        assert_eq!(name, "TID_1964_01_09_001_SB_Zsn128162MR.jpg");

        let name = generate_filename("QTN", 1965, 5, 15, 12, "CU", None, "pdf").unwrap();
        assert_eq!(name, "QTN_1965_05_15_012_CU.pdf");

        let err = generate_filename("TID", 1964, 4, 31, 1, "SB", None, "jpg").unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::Date);
        let err = generate_filename("TID", 1964, 4, 1, 0, "SB", None, "jpg").unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::Page);
        let err = generate_filename("TIDE", 1964, 4, 1, 1, "SB", None, "jpg").unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::Code);
    }

    #[test]
    fn test_suggest_fix() {
        let parser = FilenameParser::default();
        assert_eq!(
            parser.suggest_fix("tid_1964_01_09_001_sb_Zsn1.jpg").as_deref(),
            Some("TID_1964_01_09_001_SB_Zsn1.jpg")
        );
        assert_eq!(
            parser.suggest_fix("TID_1964_1_9_12_SB.png").as_deref(),
            Some("TID_1964_01_09_012_SB.png")
        );
        // not fixable
        assert_eq!(parser.suggest_fix("TID_1964_13_09_001_SB.jpg"), None);
        assert_eq!(parser.suggest_fix("TIDE_1964_01_09_001_SB.jpg"), None);
        assert_eq!(parser.suggest_fix("tid_1964_01_09_001_sb.gif"), None);
        assert_eq!(parser.suggest_fix("notes.txt"), None);
        // the shelfmark is carried over untouched
        assert_eq!(
            parser.suggest_fix("tid_1964_01_09_001_sb_Box__1.jpg").as_deref(),
            Some("TID_1964_01_09_001_SB_Box__1.jpg")
        );
    }

    #[test]
    fn test_reason_codes() {
        assert_eq!(ValidationErrorKind::Structure.reason_code(), "StructureError");
        assert_eq!(ValidationErrorKind::Extension.to_string(), "ExtensionError");
    }
}

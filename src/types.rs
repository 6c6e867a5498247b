//! Core value types shared by the normalization pipeline.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// DialCode
// =============================================================================

/// Error when parsing a dial code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialCodeError {
    /// Dial code contains non-digit characters.
    #[error("dial code must contain only digits")]
    NonDigit,
    /// Dial code is empty.
    #[error("dial code cannot be empty")]
    Empty,
}

/// Country calling code (e.g., "1" for the NANP countries, "44" for the UK).
///
/// Calling codes are stored without the leading '+' sign. They are not unique
/// per country: several catalog entries may share one.
///
/// # Example
///
/// ```rust
/// use intl_tel_input::DialCode;
///
/// let dc = DialCode::new("+34").unwrap();
/// assert_eq!(dc.to_string(), "34");
/// assert_eq!(dc.with_plus(), "+34");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DialCode(String);

impl DialCode {
    /// Create a new DialCode from a string.
    ///
    /// The input can include a leading '+' which will be stripped.
    pub fn new(s: impl AsRef<str>) -> Result<Self, DialCodeError> {
        let n = s.as_ref().trim().trim_start_matches('+');
        if n.is_empty() {
            return Err(DialCodeError::Empty);
        }
        if !n.chars().all(|c| c.is_ascii_digit()) {
            return Err(DialCodeError::NonDigit);
        }
        Ok(Self(n.to_string()))
    }

    /// Build a dial code from the numeric value reported by the grammar engine.
    pub fn from_value(value: u16) -> Self {
        Self(value.to_string())
    }

    /// Get the dial code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Dial code prefixed with '+', ready to be glued in front of a national number.
    pub fn with_plus(&self) -> String {
        format!("+{}", self.0)
    }
}

impl FromStr for DialCode {
    type Err = DialCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for DialCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for DialCode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        DialCode::new(raw).map_err(de::Error::custom)
    }
}

impl Serialize for DialCode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

// =============================================================================
// RegionCode
// =============================================================================

/// Error when parsing a region code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionCodeError {
    /// Region code is not exactly two characters long.
    #[error("region code must be exactly two letters, got '{0}'")]
    InvalidLength(String),
    /// Region code contains something other than ASCII letters.
    #[error("region code must contain only ASCII letters, got '{0}'")]
    NonAlphabetic(String),
}

/// ISO 3166-1 alpha-2 region code, normalized to upper case.
///
/// This is the primary key of a catalog snapshot.
///
/// ```rust
/// use intl_tel_input::RegionCode;
///
/// let es = RegionCode::new("es").unwrap();
/// assert_eq!(es.as_str(), "ES");
/// assert_eq!(es.to_lowercase(), "es");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionCode(String);

impl RegionCode {
    /// Create a new RegionCode, accepting either case.
    pub fn new(s: impl AsRef<str>) -> Result<Self, RegionCodeError> {
        let raw = s.as_ref().trim();
        if raw.chars().count() != 2 {
            return Err(RegionCodeError::InvalidLength(raw.to_string()));
        }
        if !raw.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(RegionCodeError::NonAlphabetic(raw.to_string()));
        }
        Ok(Self(raw.to_ascii_uppercase()))
    }

    /// Get the upper-case region code.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-case form, as used for CSS classes and html ids.
    pub fn to_lowercase(&self) -> String {
        self.0.to_ascii_lowercase()
    }

    /// Case-insensitive comparison against an arbitrary string.
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl FromStr for RegionCode {
    type Err = RegionCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for RegionCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RegionCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for RegionCode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        RegionCode::new(raw).map_err(de::Error::custom)
    }
}

impl Serialize for RegionCode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

// =============================================================================
// FormatKind
// =============================================================================

/// Target display style for a formatted number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormatKind {
    /// `+34678906543`
    E164,
    /// `+34 678 90 65 43`
    #[default]
    International,
    /// `678 90 65 43`
    National,
    /// `tel:+34-678-90-65-43`
    Rfc3966,
}

impl FormatKind {
    /// Whether the formatted output carries the calling code.
    pub fn includes_dial_code(self) -> bool {
        !matches!(self, Self::National)
    }
}

impl Display for FormatKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::E164 => "E164",
            Self::International => "INTERNATIONAL",
            Self::National => "NATIONAL",
            Self::Rfc3966 => "RFC3966",
        };
        f.write_str(name)
    }
}

// =============================================================================
// NumberKind
// =============================================================================

/// Number types the max-length policy samples example numbers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Mobile,
    FixedLine,
    FixedLineOrMobile,
}

impl NumberKind {
    /// Kinds inspected when estimating a country's national number length.
    pub const SAMPLED: [NumberKind; 3] = [Self::Mobile, Self::FixedLine, Self::FixedLineOrMobile];
}

#[cfg(test)]
mod tests {
    use super::*;

    // DialCode tests
    #[test]
    fn test_dial_code_valid() {
        assert!(DialCode::new("1").is_ok());
        assert!(DialCode::new("380").is_ok());
        assert!(DialCode::new("1684").is_ok());
    }

    #[test]
    fn test_dial_code_with_plus() {
        let dc = DialCode::new("+34").unwrap();
        assert_eq!(dc.as_str(), "34");
        assert_eq!(dc.with_plus(), "+34");
    }

    #[test]
    fn test_dial_code_errors() {
        assert_eq!(DialCode::new(""), Err(DialCodeError::Empty));
        assert_eq!(DialCode::new("  + "), Err(DialCodeError::Empty));
        assert_eq!(DialCode::new("4a"), Err(DialCodeError::NonDigit));
    }

    #[test]
    fn test_dial_code_from_value() {
        assert_eq!(DialCode::from_value(44), DialCode::new("44").unwrap());
    }

    #[test]
    fn test_dial_code_serde() {
        let dc: DialCode = serde_json::from_str(r#""+41""#).unwrap();
        assert_eq!(dc.as_str(), "41");
        assert_eq!(serde_json::to_string(&dc).unwrap(), r#""41""#);
    }

    // RegionCode tests
    #[test]
    fn test_region_code_normalizes_case() {
        let rc = RegionCode::new(" gb ").unwrap();
        assert_eq!(rc.as_str(), "GB");
        assert!(rc.matches("gb"));
        assert!(!rc.matches("gd"));
    }

    #[test]
    fn test_region_code_errors() {
        assert!(matches!(
            RegionCode::new("USA"),
            Err(RegionCodeError::InvalidLength(_))
        ));
        assert!(matches!(
            RegionCode::new("1A"),
            Err(RegionCodeError::NonAlphabetic(_))
        ));
    }

    // FormatKind tests
    #[test]
    fn test_format_kind_serde_names() {
        let kind: FormatKind = serde_json::from_str(r#""RFC3966""#).unwrap();
        assert_eq!(kind, FormatKind::Rfc3966);
        assert_eq!(
            serde_json::to_string(&FormatKind::National).unwrap(),
            r#""NATIONAL""#
        );
        assert_eq!(FormatKind::default(), FormatKind::International);
    }

    #[test]
    fn test_format_kind_includes_dial_code() {
        assert!(FormatKind::E164.includes_dial_code());
        assert!(!FormatKind::National.includes_dial_code());
    }
}

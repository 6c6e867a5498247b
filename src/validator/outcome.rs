//! Validation results.

use crate::types::RegionCode;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Verdict of a single validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationOutcome {
    /// Empty, or a grammar-valid number within the length policy.
    Valid,
    /// Unparseable, or rejected by the grammar's validity rules.
    InvalidNumber,
    /// Grammar-valid, but longer than the country's digit limit.
    NumberTooLong,
}

impl ValidationOutcome {
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Error key as used by form layers (`invalidNumber`, `numberTooLong`).
    pub fn error_key(self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::InvalidNumber => Some("invalidNumber"),
            Self::NumberTooLong => Some("numberTooLong"),
        }
    }
}

impl Display for ValidationOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Valid => "valid",
            Self::InvalidNumber => "invalid number",
            Self::NumberTooLong => "number too long",
        };
        f.write_str(name)
    }
}

/// Everything a caller needs to update its field after validating.
///
/// `display` and `output` always describe the same input: on
/// [`ValidationOutcome::InvalidNumber`] the display is the raw text and there
/// is no output; otherwise both are freshly formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub outcome: ValidationOutcome,
    /// Text for the national number field.
    pub display: String,
    /// Canonical value in the configured output format.
    pub output: Option<String>,
    /// Selected country after inference.
    pub country: Option<RegionCode>,
    /// Inference picked a different country than the one passed in.
    pub country_changed: bool,
}

impl Validation {
    pub(crate) fn empty(country: Option<RegionCode>) -> Self {
        Self {
            outcome: ValidationOutcome::Valid,
            display: String::new(),
            output: Some(String::new()),
            country,
            country_changed: false,
        }
    }

    pub(crate) fn invalid(raw: &str, country: Option<RegionCode>, country_changed: bool) -> Self {
        Self {
            outcome: ValidationOutcome::InvalidNumber,
            display: raw.to_string(),
            output: None,
            country,
            country_changed,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.outcome.is_valid()
    }
}

//! Field-level validation errors.

use super::labels::TextLabels;
use crate::validator::ValidationOutcome;
use std::fmt::{self, Display, Formatter};

/// Why the phone field is currently not acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    /// The field is required, was edited, and is empty.
    Required,
    /// The value is not a valid phone number.
    InvalidNumber,
    /// The value is valid but longer than the country allows.
    NumberTooLong,
}

impl FieldError {
    /// Error key as used by form layers.
    pub fn key(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::InvalidNumber => "invalidNumber",
            Self::NumberTooLong => "numberTooLong",
        }
    }

    /// Message for this error from the configured labels.
    pub fn message(self, labels: &TextLabels) -> &str {
        match self {
            Self::Required => &labels.required_error,
            Self::InvalidNumber => &labels.invalid_number_error,
            Self::NumberTooLong => &labels.number_too_long_error,
        }
    }

    pub(crate) fn from_outcome(outcome: ValidationOutcome) -> Option<Self> {
        match outcome {
            ValidationOutcome::Valid => None,
            ValidationOutcome::InvalidNumber => Some(Self::InvalidNumber),
            ValidationOutcome::NumberTooLong => Some(Self::NumberTooLong),
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

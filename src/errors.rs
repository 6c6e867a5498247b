//! Error types for the grammar and catalog boundaries.
//!
//! The normalization pipeline itself never returns these: parse failures are
//! folded into [`ValidationOutcome::InvalidNumber`](crate::ValidationOutcome)
//! and catalog misses into `None`. They surface only from the fallible
//! collaborators (the phone grammar engine and the catalog loader).

use crate::types::{DialCodeError, RegionCodeError};
use thiserror::Error;

/// Failure reported by a [`PhoneGrammar`](crate::PhoneGrammar) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// The text cannot be interpreted as any phone number shape.
    #[error("cannot parse '{input}' as a phone number: {reason}")]
    Unparseable { input: String, reason: String },

    /// The grammar engine has no metadata for the region.
    #[error("no numbering metadata for region '{region}'")]
    UnknownRegion { region: String },

    /// The grammar engine panicked; the panic was contained at the boundary.
    #[error("phone grammar engine panicked during {operation}")]
    Panicked { operation: &'static str },
}

impl GrammarError {
    pub(crate) fn unparseable(input: &str, reason: impl ToString) -> Self {
        Self::Unparseable {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Failure while mapping raw catalog rows into [`Country`](crate::Country) records.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document is not valid JSON.
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A row does not have the expected tuple shape.
    #[error("catalog row {index} is malformed: {reason}")]
    MalformedRow { index: usize, reason: String },

    /// A row carries an unusable calling code.
    #[error("catalog row {index} has an invalid dial code: {source}")]
    DialCode {
        index: usize,
        #[source]
        source: DialCodeError,
    },

    /// A row carries an unusable ISO2 code.
    #[error("catalog row {index} has an invalid region code: {source}")]
    Region {
        index: usize,
        #[source]
        source: RegionCodeError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_error_display() {
        let err = GrammarError::unparseable("abc", "not a number");
        assert_eq!(
            err.to_string(),
            "cannot parse 'abc' as a phone number: not a number"
        );

        let err = GrammarError::Panicked { operation: "parse" };
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::DialCode {
            index: 3,
            source: DialCodeError::NonDigit,
        };
        assert!(err.to_string().contains("row 3"));
        assert!(err.to_string().contains("only digits"));
    }
}

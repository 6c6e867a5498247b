//! Phone grammar adapter.
//!
//! The pipeline never parses phone numbers itself. It talks to a numbering-plan
//! engine through [`PhoneGrammar`] and only ever looks at the calling code and
//! national digits of what comes back. [`LibPhoneNumber`] is the production
//! implementation; tests plug in deterministic stand-ins.

mod libphonenumber;

pub use libphonenumber::LibPhoneNumber;

use crate::errors::GrammarError;
use crate::types::{DialCode, FormatKind, NumberKind, RegionCode};
use std::fmt::Debug;

/// The two facts the pipeline reads out of a parsed number.
pub trait ParsedNumber: Clone + Debug + Send + Sync {
    /// Numeric country calling code, e.g. `34`.
    fn calling_code(&self) -> DialCode;

    /// National significant number digits, leading zeros included.
    fn national_number(&self) -> String;
}

/// Numbering-plan engine the normalization pipeline orchestrates.
///
/// Implementations must not panic; a failing engine reports
/// [`GrammarError`] and the pipeline turns that into a validation outcome.
///
/// # Example
///
/// ```rust
/// use intl_tel_input::{FormatKind, LibPhoneNumber, PhoneGrammar, RegionCode};
///
/// let grammar = LibPhoneNumber::new();
/// let es = RegionCode::new("ES").unwrap();
/// let number = grammar.parse("678906543", Some(&es)).unwrap();
/// assert!(grammar.is_valid(&number));
/// assert_eq!(
///     grammar.format(&number, FormatKind::International).unwrap(),
///     "+34 678 90 65 43"
/// );
/// ```
pub trait PhoneGrammar: Send + Sync {
    /// Parsed number representation of this engine.
    type Number: ParsedNumber;

    /// Parse free text, optionally hinting the region used for national input.
    fn parse(&self, text: &str, region: Option<&RegionCode>) -> Result<Self::Number, GrammarError>;

    /// Render a parsed number in the given style.
    fn format(&self, number: &Self::Number, kind: FormatKind) -> Result<String, GrammarError>;

    /// Whether the number is valid according to the engine's per-region rules.
    fn is_valid(&self, number: &Self::Number) -> bool;

    /// Example number of the given type for a region, if the engine has one.
    fn example_number(&self, region: &RegionCode, kind: NumberKind) -> Option<Self::Number>;
}

impl<G: PhoneGrammar + ?Sized> PhoneGrammar for &G {
    type Number = G::Number;

    fn parse(&self, text: &str, region: Option<&RegionCode>) -> Result<Self::Number, GrammarError> {
        (**self).parse(text, region)
    }

    fn format(&self, number: &Self::Number, kind: FormatKind) -> Result<String, GrammarError> {
        (**self).format(number, kind)
    }

    fn is_valid(&self, number: &Self::Number) -> bool {
        (**self).is_valid(number)
    }

    fn example_number(&self, region: &RegionCode, kind: NumberKind) -> Option<Self::Number> {
        (**self).example_number(region, kind)
    }
}

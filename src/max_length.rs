//! Adaptive maximum input length.
//!
//! While the user is still typing raw digits the field is kept tight
//! (national digit limit plus a little room). Once the value is a valid,
//! formatted number the limit widens to leave room for separators and the
//! dial code prefix.

use crate::catalog::Country;
use crate::grammar::{ParsedNumber, PhoneGrammar};
use crate::types::{FormatKind, NumberKind, RegionCode};
use crate::validator::international_text;
use once_cell::sync::Lazy;
use regex::Regex;

/// Limit used when no country is selected.
pub const DEFAULT_MAX_LENGTH: usize = 25;

/// National digit limit used when a country has no usable example numbers.
pub const DEFAULT_MAX_DIGITS: usize = 15;

/// Added to the longest observed example to allow for extensions and variants.
const DIGIT_BUFFER: usize = 3;

/// Separator overhead assumed when no example number can be formatted.
const DEFAULT_FORMATTING_OVERHEAD: usize = 4;

static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\-()]").expect("separator pattern"));

/// National digit limit for a region: the longest example number over
/// [`NumberKind::SAMPLED`] plus a buffer of 3.
///
/// Lengths count the national significant number with its leading zeros, so
/// regions whose numbers keep a leading `0` (Italy, for one) get a limit one
/// digit higher than a count over the bare integer would give.
///
/// Falls back to [`DEFAULT_MAX_DIGITS`] for `None` or when the grammar has no
/// examples for the region.
pub fn base_max_digits<G: PhoneGrammar>(grammar: &G, region: Option<&RegionCode>) -> usize {
    let Some(region) = region else {
        return DEFAULT_MAX_DIGITS;
    };

    NumberKind::SAMPLED
        .iter()
        .filter_map(|kind| grammar.example_number(region, *kind))
        .map(|example| example.national_number().chars().count())
        .filter(|len| *len > 0)
        .max()
        .map_or(DEFAULT_MAX_DIGITS, |longest| longest + DIGIT_BUFFER)
}

/// Characters national formatting adds on top of the bare digits, measured
/// on the region's example numbers.
pub fn formatting_overhead<G: PhoneGrammar>(grammar: &G, region: &RegionCode) -> usize {
    NumberKind::SAMPLED
        .iter()
        .filter_map(|kind| grammar.example_number(region, *kind))
        .filter_map(|example| {
            let formatted = grammar.format(&example, FormatKind::National).ok()?;
            let digits = example.national_number().chars().count();
            Some(formatted.chars().count().saturating_sub(digits))
        })
        .max()
        .unwrap_or(DEFAULT_FORMATTING_OVERHEAD)
}

/// Whether `value` already is a complete, formatted number for `country`:
/// at least 3 characters, parseable, valid, and containing a separator.
pub fn looks_formatted<G: PhoneGrammar>(
    grammar: &G,
    country: &Country,
    value: &str,
    include_dial_code: bool,
) -> bool {
    let value = value.trim();
    if value.chars().count() < 3 || !SEPARATOR.is_match(value) {
        return false;
    }

    let text = if include_dial_code || value.starts_with('+') {
        value.to_string()
    } else {
        international_text(&country.dial_code, value)
    };

    grammar
        .parse(&text, Some(&country.iso2))
        .map(|number| grammar.is_valid(&number))
        .unwrap_or(false)
}

/// Extra room for the configured display style once the value is formatted.
fn safety_margin(include_dial_code: bool, output_format: FormatKind) -> usize {
    let dial_code = usize::from(include_dial_code);
    let style = match output_format {
        FormatKind::International => 1,
        FormatKind::Rfc3966 => 2,
        FormatKind::E164 | FormatKind::National => 0,
    };
    1 + dial_code + style
}

/// Room left for typing before the value is recognised as formatted.
fn minimal_buffer(include_dial_code: bool, output_format: FormatKind) -> usize {
    match (include_dial_code, output_format) {
        (true, FormatKind::Rfc3966) => 8,
        (true, _) => 4,
        (false, _) => 2,
    }
}

/// Maximum number of characters the phone field should accept.
///
/// Always at least [`base_max_digits`] for the country, so a valid national
/// number is never cut off.
///
/// # Example
///
/// ```rust
/// use intl_tel_input::{CountryCatalog, FormatKind, LibPhoneNumber, max_length};
///
/// let grammar = LibPhoneNumber::new();
/// let catalog = CountryCatalog::bundled();
/// let spain = catalog.find("ES");
///
/// let typing = max_length::adaptive_max_length(&grammar, spain, "6789", false, FormatKind::International);
/// let formatted = max_length::adaptive_max_length(&grammar, spain, "678 90 65 43", false, FormatKind::International);
/// assert!(formatted > typing);
/// assert_eq!(max_length::adaptive_max_length(&grammar, None, "", false, FormatKind::E164), 25);
/// ```
#[cfg_attr(feature = "tracing", tracing::instrument(
    name = "max_length::adaptive_max_length",
    skip_all,
    fields(country = country.map(|c| c.iso2.as_str()), format = %output_format)
))]
pub fn adaptive_max_length<G: PhoneGrammar>(
    grammar: &G,
    country: Option<&Country>,
    value: &str,
    include_dial_code: bool,
    output_format: FormatKind,
) -> usize {
    let Some(country) = country else {
        return DEFAULT_MAX_LENGTH;
    };

    let base = base_max_digits(grammar, Some(&country.iso2));

    if looks_formatted(grammar, country, value, include_dial_code) {
        base + formatting_overhead(grammar, &country.iso2)
            + safety_margin(include_dial_code, output_format)
    } else {
        base + minimal_buffer(include_dial_code, output_format)
    }
}

//! Normalization validator: parse, infer country, format, check validity and
//! length, all in one total call.

pub(crate) mod config;
pub(crate) mod outcome;

pub use config::{DEFAULT_AREA_CODE_REGION, ValidatorConfig, ValidatorConfigBuilder};
pub use outcome::{Validation, ValidationOutcome};

use crate::catalog::Country;
use crate::grammar::{LibPhoneNumber, ParsedNumber, PhoneGrammar};
use crate::inference::infer_country;
use crate::max_length;
use crate::types::{DialCode, FormatKind, RegionCode};
use once_cell::sync::Lazy;
use regex::Regex;

#[cfg(feature = "tracing")]
use tracing::debug;

/// Visual separators of national formats, e.g. `010-2000-0000`.
static VISUAL_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-().]").expect("visual separator pattern"));

/// National input behind a calling code, with visual separators removed.
///
/// Behind a `+` prefix the engine rejects separated national formats:
/// `+82010-2000-0000` fails to parse, `+8201020000000` does not.
pub(crate) fn international_text(dial_code: &DialCode, national: &str) -> String {
    format!(
        "{}{}",
        dial_code.with_plus(),
        VISUAL_SEPARATOR.replace_all(national.trim(), "")
    )
}

/// Turns raw field text into a validated, formatted phone value.
///
/// Stateless apart from its configuration; one instance can serve any number
/// of fields concurrently.
///
/// # Example
///
/// ```rust
/// use intl_tel_input::{CountryCatalog, NumberValidator, RegionCode, ValidationOutcome};
///
/// let validator = NumberValidator::default();
/// let catalog = CountryCatalog::bundled();
/// let es = RegionCode::new("ES").unwrap();
///
/// let result = validator.validate(Some("678906543"), Some(&es), catalog.countries());
/// assert_eq!(result.outcome, ValidationOutcome::Valid);
/// assert_eq!(result.display, "678 90 65 43");
/// assert_eq!(result.output.as_deref(), Some("+34 678 90 65 43"));
/// ```
#[derive(Debug, Clone)]
pub struct NumberValidator<G: PhoneGrammar = LibPhoneNumber> {
    grammar: G,
    config: ValidatorConfig,
}

impl Default for NumberValidator<LibPhoneNumber> {
    fn default() -> Self {
        Self::new(LibPhoneNumber::new(), ValidatorConfig::default())
    }
}

impl<G: PhoneGrammar> NumberValidator<G> {
    /// Create a validator over a grammar engine.
    pub fn new(grammar: G, config: ValidatorConfig) -> Self {
        Self { grammar, config }
    }

    pub fn grammar(&self) -> &G {
        &self.grammar
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate raw field text against the current selection.
    ///
    /// Never fails: every grammar error becomes
    /// [`ValidationOutcome::InvalidNumber`]. Empty or missing input is valid.
    #[cfg_attr(feature = "tracing", tracing::instrument(
        name = "NumberValidator::validate",
        skip_all,
        fields(selected = selected.map(|iso| iso.as_str()))
    ))]
    pub fn validate(
        &self,
        raw: Option<&str>,
        selected: Option<&RegionCode>,
        countries: &[Country],
    ) -> Validation {
        let raw = raw.unwrap_or_default();
        if raw.trim().is_empty() {
            return Validation::empty(selected.cloned());
        }

        let selected_country =
            selected.and_then(|iso| countries.iter().find(|country| &country.iso2 == iso));

        let text = self.parse_text(raw, selected_country);
        let hint = selected.filter(|iso| !self.config.is_area_code_region(iso));

        let number = match self.grammar.parse(&text, hint) {
            Ok(number) => number,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                debug!(error = %_e, "Input is not a phone number");

                return Validation::invalid(raw, selected.cloned(), false);
            }
        };

        let national = number.national_number();
        let inference = infer_country(&number.calling_code(), &national, countries, selected);
        let country_changed = inference.is_some_and(|inference| inference.is_changed());
        let resolved = inference
            .map(|inference| inference.country().iso2.clone())
            .or_else(|| selected.cloned());

        let formatted = self
            .grammar
            .format(&number, self.display_kind(resolved.as_ref()))
            .and_then(|display| {
                let output = self.grammar.format(&number, self.config.output_format)?;
                Ok((display, output))
            });

        let (display, output) = match formatted {
            Ok(pair) if self.grammar.is_valid(&number) => pair,
            _ => return Validation::invalid(raw, resolved, country_changed),
        };

        let limit = max_length::base_max_digits(&self.grammar, resolved.as_ref());
        let outcome = if national.chars().count() > limit {
            ValidationOutcome::NumberTooLong
        } else {
            ValidationOutcome::Valid
        };

        #[cfg(feature = "tracing")]
        debug!(%outcome, country = ?resolved, country_changed, "Number validated");

        Validation {
            outcome,
            display,
            output: Some(output),
            country: resolved,
            country_changed,
        }
    }

    /// Adaptive maximum input length for the field, see
    /// [`max_length::adaptive_max_length`].
    pub fn max_length(&self, country: Option<&Country>, value: &str) -> usize {
        max_length::adaptive_max_length(
            &self.grammar,
            country,
            value,
            self.config.include_dial_code,
            self.config.output_format,
        )
    }

    /// National digit limit for a region, see [`max_length::base_max_digits`].
    pub fn base_max_digits(&self, region: Option<&RegionCode>) -> usize {
        max_length::base_max_digits(&self.grammar, region)
    }

    /// Text handed to the grammar: international input as typed, national
    /// input behind the selected country's calling code.
    fn parse_text(&self, raw: &str, selected: Option<&Country>) -> String {
        let raw = raw.trim();
        if raw.starts_with('+') || self.config.include_dial_code {
            return raw.to_string();
        }
        match selected {
            Some(country) => international_text(&country.dial_code, raw),
            None => raw.to_string(),
        }
    }

    fn display_kind(&self, country: Option<&RegionCode>) -> FormatKind {
        let international = self.config.include_dial_code
            || country.is_some_and(|iso| self.config.is_international_display_region(iso));
        if international {
            FormatKind::International
        } else {
            FormatKind::National
        }
    }
}

//! Phone input session.

use super::config::PhoneInputConfig;
use super::errors::FieldError;
use super::labels::TextLabels;
use crate::catalog::{Country, CountryCatalog};
use crate::cursor::adjust_cursor;
use crate::geo_ip::GeoLocator;
use crate::grammar::{LibPhoneNumber, PhoneGrammar};
use crate::types::{DialCode, RegionCode};
use crate::validator::{NumberValidator, Validation, ValidationOutcome};

#[cfg(feature = "tracing")]
use tracing::{debug, info, warn};

/// Result of one keystroke, everything the UI needs to redraw the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputUpdate {
    /// New text of the national number field.
    pub display: String,
    /// Caret position in `display`, in chars.
    pub caret: usize,
    /// Selected country after the keystroke.
    pub country: Option<RegionCode>,
    /// The keystroke switched the selected country.
    pub country_changed: bool,
    pub outcome: ValidationOutcome,
    /// Field length limit, when enabled.
    pub max_length: Option<usize>,
}

/// State of one phone field: selected country, current text, canonical
/// output and form flags.
///
/// Each field owns its session; nothing is shared between sessions except the
/// grammar engine's read-only metadata.
///
/// # Example
///
/// ```rust
/// use intl_tel_input::{CountryCatalog, PhoneInput, PhoneInputConfig, RegionCode};
///
/// let config = PhoneInputConfig::builder().auto_selected_country("ES").build();
/// let mut input = PhoneInput::new(CountryCatalog::bundled(), config);
/// input.initialize_offline();
///
/// let update = input.input("678906543", 9);
/// assert_eq!(update.display, "678 90 65 43");
/// assert_eq!(update.caret, 12);
/// assert_eq!(input.output_value(), Some("+34 678 90 65 43"));
/// ```
#[derive(Debug, Clone)]
pub struct PhoneInput<G: PhoneGrammar = LibPhoneNumber> {
    validator: NumberValidator<G>,
    catalog: CountryCatalog,
    config: PhoneInputConfig,
    selected: Option<RegionCode>,
    display: String,
    output: Option<String>,
    outcome: ValidationOutcome,
    dirty: bool,
    focused: bool,
}

impl PhoneInput<LibPhoneNumber> {
    /// Create a session backed by libphonenumber metadata.
    pub fn new(catalog: CountryCatalog, config: PhoneInputConfig) -> Self {
        Self::with_grammar(LibPhoneNumber::new(), catalog, config)
    }
}

impl<G: PhoneGrammar> PhoneInput<G> {
    /// Create a session over a custom grammar engine.
    pub fn with_grammar(grammar: G, catalog: CountryCatalog, config: PhoneInputConfig) -> Self {
        Self {
            validator: NumberValidator::new(grammar, config.validator.clone()),
            catalog,
            config,
            selected: None,
            display: String::new(),
            output: Some(String::new()),
            outcome: ValidationOutcome::Valid,
            dirty: false,
            focused: false,
        }
    }

    /// Pick the initial country: the configured one, then the locator's
    /// guess (bounded by `geo_ip_timeout`), then the catalog default.
    ///
    /// Locator failures are logged and ignored.
    #[cfg_attr(feature = "tracing", tracing::instrument(
        name = "PhoneInput::initialize",
        skip_all,
        fields(countries = self.catalog.len())
    ))]
    pub async fn initialize<L: GeoLocator>(&mut self, locator: &L) -> Option<&Country> {
        if self.config.auto_select_country && !self.select_configured_country() {
            if self.config.auto_ip_lookup
                && let Some(iso) = self.locate(locator).await
            {
                self.select_country(&iso);
            }
        }

        self.select_default_if_unset();
        self.selected_country()
    }

    /// [`initialize`](Self::initialize) without a geo-IP lookup.
    pub fn initialize_offline(&mut self) -> Option<&Country> {
        if self.config.auto_select_country {
            self.select_configured_country();
        }

        self.select_default_if_unset();
        self.selected_country()
    }

    fn select_configured_country(&mut self) -> bool {
        let Some(iso) = self
            .config
            .auto_selected_country
            .as_deref()
            .and_then(|key| self.catalog.find(key))
            .map(|country| country.iso2.clone())
        else {
            return false;
        };

        self.select_country(&iso)
    }

    fn select_default_if_unset(&mut self) {
        if self.selected.is_some() {
            return;
        }
        if let Some(iso) = self.catalog.default_country().map(|c| c.iso2.clone()) {
            self.select_country(&iso);
        }
    }

    async fn locate<L: GeoLocator>(&self, locator: &L) -> Option<RegionCode> {
        match tokio::time::timeout(self.config.geo_ip_timeout, locator.locate()).await {
            Ok(Ok(iso)) => {
                let found = self.catalog.by_iso(&iso).map(|country| country.iso2.clone());

                #[cfg(feature = "tracing")]
                if found.is_none() {
                    debug!(iso = %iso, "Located country is not in the catalog");
                }

                found
            }
            Ok(Err(_e)) => {
                #[cfg(feature = "tracing")]
                warn!(error = %_e, "Geo-IP lookup failed, using default country");

                None
            }
            Err(_) => {
                #[cfg(feature = "tracing")]
                warn!(
                    timeout_ms = self.config.geo_ip_timeout.as_millis() as u64,
                    "Geo-IP lookup timed out, using default country"
                );

                None
            }
        }
    }

    /// Select a country from the catalog and revalidate the current value.
    ///
    /// Returns `false`, leaving the selection untouched, when the country is
    /// not in the catalog.
    pub fn select_country(&mut self, iso2: &RegionCode) -> bool {
        if self.catalog.by_iso(iso2).is_none() {
            return false;
        }

        #[cfg(feature = "tracing")]
        info!(country = %iso2, "Country selected");

        self.selected = Some(iso2.clone());
        if !self.display.is_empty() {
            self.revalidate();
        }
        true
    }

    /// Handle a user edit: `raw` is the field text after the keystroke and
    /// `caret` the caret position within it.
    ///
    /// Marks the session dirty.
    pub fn input(&mut self, raw: &str, caret: isize) -> InputUpdate {
        self.dirty = true;

        let validation =
            self.validator
                .validate(Some(raw), self.selected.as_ref(), self.catalog.countries());
        let country_changed = validation.country_changed;
        self.apply(validation);

        InputUpdate {
            display: self.display.clone(),
            caret: adjust_cursor(caret, raw, &self.display),
            country: self.selected.clone(),
            country_changed,
            outcome: self.outcome,
            max_length: self.max_length(),
        }
    }

    /// Write a value programmatically (e.g. an initial value from a form
    /// model) without marking the session dirty.
    pub fn set_value(&mut self, value: Option<&str>) -> ValidationOutcome {
        let validation =
            self.validator
                .validate(value, self.selected.as_ref(), self.catalog.countries());
        self.apply(validation);
        self.outcome
    }

    fn revalidate(&mut self) {
        let validation = self.validator.validate(
            Some(self.display.as_str()),
            self.selected.as_ref(),
            self.catalog.countries(),
        );
        self.apply(validation);
    }

    /// Display, output and outcome always come from the same validation.
    fn apply(&mut self, validation: Validation) {
        #[cfg(feature = "tracing")]
        if validation.country_changed {
            debug!(country = ?validation.country, "Country corrected from number");
        }

        self.selected = validation.country;
        self.display = validation.display;
        self.output = validation.output;
        self.outcome = validation.outcome;
    }

    /// Current field length limit, `None` when disabled.
    pub fn max_length(&self) -> Option<usize> {
        self.config
            .enable_input_max_length
            .then(|| self.validator.max_length(self.selected_country(), &self.display))
    }

    /// Field errors, in display order.
    pub fn errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.config.required && self.dirty && self.display.trim().is_empty() {
            errors.push(FieldError::Required);
        }
        if self.config.number_validation
            && let Some(error) = FieldError::from_outcome(self.outcome)
        {
            errors.push(error);
        }

        errors
    }

    /// Messages for [`errors`](Self::errors).
    pub fn error_messages<'l>(&self, labels: &'l TextLabels) -> Vec<&'l str> {
        self.errors()
            .into_iter()
            .map(|error| error.message(labels))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// Countries matching a search term, for the country picker.
    pub fn filter_countries(&self, term: &str) -> Vec<&Country> {
        self.catalog.search(term)
    }

    pub fn set_required(&mut self, required: bool) {
        self.config.required = required;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// The user has edited the field.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Canonical value in the configured output format; `None` while the
    /// number is invalid.
    pub fn output_value(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn display_value(&self) -> &str {
        &self.display
    }

    pub fn outcome(&self) -> ValidationOutcome {
        self.outcome
    }

    pub fn selected_country(&self) -> Option<&Country> {
        self.selected.as_ref().and_then(|iso| self.catalog.by_iso(iso))
    }

    pub fn current_dial_code(&self) -> Option<&DialCode> {
        self.selected_country().map(|country| &country.dial_code)
    }

    pub fn current_iso(&self) -> Option<&RegionCode> {
        self.selected.as_ref()
    }

    pub fn catalog(&self) -> &CountryCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &PhoneInputConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::ValidatorConfig;
    use std::time::Duration;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("locator offline")]
    struct Offline;

    struct FixedLocator(Option<&'static str>);

    impl GeoLocator for FixedLocator {
        type Error = Offline;

        async fn locate(&self) -> Result<RegionCode, Offline> {
            self.0
                .map(|iso| RegionCode::new(iso).unwrap())
                .ok_or(Offline)
        }
    }

    struct SlowLocator;

    impl GeoLocator for SlowLocator {
        type Error = Offline;

        async fn locate(&self) -> Result<RegionCode, Offline> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(RegionCode::new("JP").unwrap())
        }
    }

    fn rc(code: &str) -> RegionCode {
        RegionCode::new(code).unwrap()
    }

    fn session(config: PhoneInputConfig) -> PhoneInput {
        PhoneInput::new(CountryCatalog::bundled(), config)
    }

    fn spanish_session() -> PhoneInput {
        let mut input = session(
            PhoneInputConfig::builder()
                .auto_selected_country("ES")
                .build(),
        );
        input.initialize_offline();
        input
    }

    #[tokio::test]
    async fn test_initialize_prefers_configured_country() {
        let mut input = session(
            PhoneInputConfig::builder()
                .auto_selected_country("Switzerland")
                .build(),
        );

        let country = input.initialize(&FixedLocator(Some("DE"))).await.unwrap();
        assert_eq!(country.iso2, rc("CH"));
    }

    #[tokio::test]
    async fn test_initialize_uses_locator() {
        let mut input = session(PhoneInputConfig::default());

        input.initialize(&FixedLocator(Some("de"))).await;
        assert_eq!(input.current_iso(), Some(&rc("DE")));
        assert_eq!(input.current_dial_code().unwrap().as_str(), "49");
    }

    #[tokio::test]
    async fn test_initialize_falls_back_on_locator_error() {
        let mut input = session(PhoneInputConfig::default());

        input.initialize(&FixedLocator(None)).await;
        assert_eq!(
            input.current_iso(),
            input.catalog().default_country().map(|c| &c.iso2)
        );
    }

    #[tokio::test]
    async fn test_initialize_falls_back_on_timeout() {
        let mut input = session(
            PhoneInputConfig::builder()
                .geo_ip_timeout(Duration::from_millis(20))
                .build(),
        );

        input.initialize(&SlowLocator).await;
        assert_ne!(input.current_iso(), Some(&rc("JP")));
        assert!(input.current_iso().is_some());
    }

    #[tokio::test]
    async fn test_initialize_skips_lookup_when_disabled() {
        let mut input = session(PhoneInputConfig::builder().auto_ip_lookup(false).build());

        input.initialize(&FixedLocator(Some("DE"))).await;
        assert_ne!(input.current_iso(), Some(&rc("DE")));
    }

    #[test]
    fn test_input_formats_and_moves_caret() {
        let mut input = spanish_session();

        let update = input.input("678906543", 9);
        assert_eq!(update.display, "678 90 65 43");
        assert_eq!(update.caret, 12);
        assert_eq!(update.outcome, ValidationOutcome::Valid);
        assert!(!update.country_changed);
        assert!(update.max_length.is_some());
        assert!(input.is_dirty());
    }

    #[test]
    fn test_input_switches_country() {
        let mut input = spanish_session();

        let update = input.input("+41781234567", 12);
        assert!(update.country_changed);
        assert_eq!(update.country, Some(rc("CH")));
        assert_eq!(input.output_value(), Some("+41 78 123 45 67"));
    }

    #[test]
    fn test_invalid_input_clears_output() {
        let mut input = spanish_session();
        input.input("678906543", 9);
        assert!(input.output_value().is_some());

        let update = input.input("67890654", 8);
        assert_eq!(update.outcome, ValidationOutcome::InvalidNumber);
        assert_eq!(update.display, "67890654");
        assert_eq!(input.output_value(), None);
        assert_eq!(input.errors(), vec![FieldError::InvalidNumber]);
    }

    #[test]
    fn test_required_only_after_edit() {
        let mut input = spanish_session();
        input.set_required(true);
        assert!(input.errors().is_empty());

        input.input("", 0);
        assert_eq!(input.errors(), vec![FieldError::Required]);
        assert_eq!(
            input.error_messages(&TextLabels::default()),
            vec!["This field is required"]
        );
    }

    #[test]
    fn test_set_value_does_not_mark_dirty() {
        let mut input = spanish_session();

        assert_eq!(input.set_value(Some("678906543")), ValidationOutcome::Valid);
        assert_eq!(input.display_value(), "678 90 65 43");
        assert!(!input.is_dirty());

        assert_eq!(input.set_value(None), ValidationOutcome::Valid);
        assert_eq!(input.output_value(), Some(""));
    }

    #[test]
    fn test_select_country_revalidates() {
        let mut input = spanish_session();
        input.set_value(Some("2015550123"));
        assert_eq!(input.outcome(), ValidationOutcome::InvalidNumber);

        assert!(input.select_country(&rc("US")));
        assert_eq!(input.outcome(), ValidationOutcome::Valid);
        assert_eq!(input.output_value(), Some("+1 201-555-0123"));
    }

    #[test]
    fn test_select_unknown_country() {
        let mut input = spanish_session();
        assert!(!input.select_country(&rc("ZZ")));
        assert_eq!(input.current_iso(), Some(&rc("ES")));
    }

    #[test]
    fn test_number_validation_disabled() {
        let mut input = session(
            PhoneInputConfig::builder()
                .auto_selected_country("ES")
                .number_validation(false)
                .build(),
        );
        input.initialize_offline();

        input.input("123", 3);
        assert_eq!(input.outcome(), ValidationOutcome::InvalidNumber);
        assert!(input.is_valid());
    }

    #[test]
    fn test_max_length_disabled() {
        let mut input = session(
            PhoneInputConfig::builder()
                .enable_input_max_length(false)
                .build(),
        );
        input.initialize_offline();
        assert_eq!(input.max_length(), None);
    }

    #[test]
    fn test_dial_code_in_field() {
        let config = PhoneInputConfig::builder()
            .auto_selected_country("US")
            .validator(ValidatorConfig::default().with_include_dial_code(true))
            .build();
        let mut input = session(config);
        input.initialize_offline();

        let update = input.input("+17672251234", 12);
        assert_eq!(update.country, Some(rc("DM")));
        assert!(update.display.starts_with("+1 767"));
        assert_eq!(update.caret, update.display.chars().count());
    }

    #[test]
    fn test_focus_and_search() {
        let mut input = spanish_session();
        input.set_focused(true);
        assert!(input.is_focused());
        assert!(
            input
                .filter_countries("spa")
                .iter()
                .any(|c| c.iso2 == rc("ES"))
        );
    }
}

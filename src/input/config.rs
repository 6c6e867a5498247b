//! Phone input configuration types.

use crate::validator::ValidatorConfig;
use std::time::Duration;

/// Configuration for a [`PhoneInput`](super::PhoneInput) session.
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneInputConfig {
    /// Parsing and formatting behaviour.
    pub validator: ValidatorConfig,
    /// Report invalid and too long numbers as field errors.
    pub number_validation: bool,
    /// Bound the field with the adaptive max length.
    pub enable_input_max_length: bool,
    /// Pick a country on initialization.
    pub auto_select_country: bool,
    /// ISO2 code or name of the country to pick first.
    pub auto_selected_country: Option<String>,
    /// Ask the geo-IP locator when no configured country matches.
    pub auto_ip_lookup: bool,
    /// Upper bound for the geo-IP lookup.
    pub geo_ip_timeout: Duration,
    /// An edited, empty field is an error.
    pub required: bool,
}

impl Default for PhoneInputConfig {
    fn default() -> Self {
        Self {
            validator: ValidatorConfig::default(),
            number_validation: true,
            enable_input_max_length: true,
            auto_select_country: true,
            auto_selected_country: None,
            auto_ip_lookup: true,
            geo_ip_timeout: Duration::from_secs(5),
            required: false,
        }
    }
}

impl PhoneInputConfig {
    /// Create a new builder for PhoneInputConfig.
    ///
    /// # Example
    ///
    /// ```rust
    /// use intl_tel_input::PhoneInputConfig;
    /// use std::time::Duration;
    ///
    /// let config = PhoneInputConfig::builder()
    ///     .auto_selected_country("ch")
    ///     .geo_ip_timeout(Duration::from_secs(2))
    ///     .required(true)
    ///     .build();
    ///
    /// assert_eq!(config.auto_selected_country.as_deref(), Some("ch"));
    /// assert!(config.required);
    /// ```
    pub fn builder() -> PhoneInputConfigBuilder {
        PhoneInputConfigBuilder::default()
    }

    /// Create a new config with a different validator configuration.
    pub fn with_validator(mut self, validator: ValidatorConfig) -> Self {
        self.validator = validator;
        self
    }

    /// Create a new config with the required flag switched.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// Builder for PhoneInputConfig.
#[derive(Debug, Clone, Default)]
pub struct PhoneInputConfigBuilder {
    config: PhoneInputConfig,
}

impl PhoneInputConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parsing and formatting behaviour.
    pub fn validator(mut self, validator: ValidatorConfig) -> Self {
        self.config.validator = validator;
        self
    }

    /// Default: true
    pub fn number_validation(mut self, enabled: bool) -> Self {
        self.config.number_validation = enabled;
        self
    }

    /// Default: true
    pub fn enable_input_max_length(mut self, enabled: bool) -> Self {
        self.config.enable_input_max_length = enabled;
        self
    }

    /// Default: true
    pub fn auto_select_country(mut self, enabled: bool) -> Self {
        self.config.auto_select_country = enabled;
        self
    }

    /// Country (ISO2 code or name) picked first on initialization.
    pub fn auto_selected_country(mut self, country: impl Into<String>) -> Self {
        self.config.auto_selected_country = Some(country.into());
        self
    }

    /// Default: true
    pub fn auto_ip_lookup(mut self, enabled: bool) -> Self {
        self.config.auto_ip_lookup = enabled;
        self
    }

    /// Default: 5 seconds
    pub fn geo_ip_timeout(mut self, timeout: Duration) -> Self {
        self.config.geo_ip_timeout = timeout;
        self
    }

    /// Default: false
    pub fn required(mut self, required: bool) -> Self {
        self.config.required = required;
        self
    }

    /// Build the PhoneInputConfig.
    pub fn build(self) -> PhoneInputConfig {
        self.config
    }
}

//! Validator configuration types.

use crate::catalog::DEFAULT_INTERNATIONAL_DISPLAY_REGION;
use crate::types::{FormatKind, RegionCode};

/// Region resolved purely by area code; parsed without a region hint.
pub const DEFAULT_AREA_CODE_REGION: &str = "MP";

/// Configuration for the [`NumberValidator`](super::NumberValidator).
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatorConfig {
    /// The user types the calling code into the field themselves.
    pub include_dial_code: bool,
    /// Style of the canonical output value.
    pub output_format: FormatKind,
    /// Selected region that is parsed without forcing a region hint.
    pub area_code_region: Option<RegionCode>,
    /// Region whose numbers are always displayed internationally.
    pub international_display_region: Option<RegionCode>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            include_dial_code: false,
            output_format: FormatKind::International,
            area_code_region: RegionCode::new(DEFAULT_AREA_CODE_REGION).ok(),
            international_display_region: RegionCode::new(DEFAULT_INTERNATIONAL_DISPLAY_REGION)
                .ok(),
        }
    }
}

impl ValidatorConfig {
    /// Create a new builder for ValidatorConfig.
    ///
    /// # Example
    ///
    /// ```rust
    /// use intl_tel_input::{FormatKind, ValidatorConfig};
    ///
    /// let config = ValidatorConfig::builder()
    ///     .include_dial_code(true)
    ///     .output_format(FormatKind::E164)
    ///     .build();
    ///
    /// assert!(config.include_dial_code);
    /// assert_eq!(config.output_format, FormatKind::E164);
    /// ```
    pub fn builder() -> ValidatorConfigBuilder {
        ValidatorConfigBuilder::default()
    }

    /// Create a new config with dial code inclusion switched.
    pub fn with_include_dial_code(mut self, include: bool) -> Self {
        self.include_dial_code = include;
        self
    }

    /// Create a new config with a different output format.
    pub fn with_output_format(mut self, format: FormatKind) -> Self {
        self.output_format = format;
        self
    }

    pub(crate) fn is_area_code_region(&self, iso2: &RegionCode) -> bool {
        self.area_code_region.as_ref() == Some(iso2)
    }

    pub(crate) fn is_international_display_region(&self, iso2: &RegionCode) -> bool {
        self.international_display_region.as_ref() == Some(iso2)
    }
}

/// Builder for ValidatorConfig.
#[derive(Debug, Clone)]
pub struct ValidatorConfigBuilder {
    config: ValidatorConfig,
}

impl Default for ValidatorConfigBuilder {
    fn default() -> Self {
        Self {
            config: ValidatorConfig::default(),
        }
    }
}

impl ValidatorConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the calling code is typed into the field.
    ///
    /// Default: false
    pub fn include_dial_code(mut self, include: bool) -> Self {
        self.config.include_dial_code = include;
        self
    }

    /// Style of the canonical output value.
    ///
    /// Default: [`FormatKind::International`]
    pub fn output_format(mut self, format: FormatKind) -> Self {
        self.config.output_format = format;
        self
    }

    /// Region parsed without a region hint.
    ///
    /// Default: MP (Northern Mariana Islands)
    pub fn area_code_region(mut self, region: Option<RegionCode>) -> Self {
        self.config.area_code_region = region;
        self
    }

    /// Region always displayed in international form.
    ///
    /// Default: MP (Northern Mariana Islands)
    pub fn international_display_region(mut self, region: Option<RegionCode>) -> Self {
        self.config.international_display_region = region;
        self
    }

    /// Build the ValidatorConfig.
    pub fn build(self) -> ValidatorConfig {
        self.config
    }
}

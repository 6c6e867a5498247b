//! Catalog processing options.

use super::names::CountryNames;
use crate::types::RegionCode;

/// Region whose numbers are always displayed in international form.
pub const DEFAULT_INTERNATIONAL_DISPLAY_REGION: &str = "MP";

/// Options applied when turning raw catalog rows into the country list.
#[derive(Debug, Clone)]
pub struct CatalogOptions {
    /// Compute an example-number placeholder per country.
    pub enable_placeholder: bool,
    /// Placeholders carry the calling code (international form).
    pub include_dial_code: bool,
    /// Derive an input mask from the placeholder.
    pub use_mask: bool,
    /// Show the mask placeholder eagerly instead of lazily.
    pub show_mask_placeholder: bool,
    /// When non-empty, only these countries are kept.
    pub visible: Vec<RegionCode>,
    /// Countries moved to the front, keeping catalog order otherwise.
    pub preferred: Vec<RegionCode>,
    /// Countries removed from the list.
    pub excluded: Vec<RegionCode>,
    /// Region whose placeholder is always international.
    pub international_display_region: Option<RegionCode>,
    /// Display name resolution.
    pub names: CountryNames,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            enable_placeholder: true,
            include_dial_code: false,
            use_mask: false,
            show_mask_placeholder: false,
            visible: Vec::new(),
            preferred: Vec::new(),
            excluded: Vec::new(),
            international_display_region: RegionCode::new(DEFAULT_INTERNATIONAL_DISPLAY_REGION)
                .ok(),
            names: CountryNames::default(),
        }
    }
}

impl CatalogOptions {
    /// Create a new builder for CatalogOptions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use intl_tel_input::{CatalogOptions, RegionCode};
    ///
    /// let options = CatalogOptions::builder()
    ///     .preferred(vec![RegionCode::new("CH").unwrap()])
    ///     .enable_placeholder(false)
    ///     .build();
    ///
    /// assert!(!options.enable_placeholder);
    /// assert_eq!(options.preferred.len(), 1);
    /// ```
    pub fn builder() -> CatalogOptionsBuilder {
        CatalogOptionsBuilder::default()
    }

    /// Whether a country survives the visible/excluded filters.
    pub(crate) fn keeps(&self, iso2: &RegionCode) -> bool {
        (self.visible.is_empty() || self.visible.contains(iso2)) && !self.excluded.contains(iso2)
    }

    pub(crate) fn is_preferred(&self, iso2: &RegionCode) -> bool {
        self.preferred.contains(iso2)
    }
}

/// Builder for CatalogOptions.
#[derive(Debug, Clone, Default)]
pub struct CatalogOptionsBuilder {
    options: CatalogOptions,
}

impl CatalogOptionsBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default: true
    pub fn enable_placeholder(mut self, enabled: bool) -> Self {
        self.options.enable_placeholder = enabled;
        self
    }

    /// Default: false
    pub fn include_dial_code(mut self, include: bool) -> Self {
        self.options.include_dial_code = include;
        self
    }

    /// Default: false
    pub fn use_mask(mut self, enabled: bool) -> Self {
        self.options.use_mask = enabled;
        self
    }

    /// Default: false
    pub fn show_mask_placeholder(mut self, show: bool) -> Self {
        self.options.show_mask_placeholder = show;
        self
    }

    pub fn visible(mut self, countries: Vec<RegionCode>) -> Self {
        self.options.visible = countries;
        self
    }

    pub fn preferred(mut self, countries: Vec<RegionCode>) -> Self {
        self.options.preferred = countries;
        self
    }

    pub fn excluded(mut self, countries: Vec<RegionCode>) -> Self {
        self.options.excluded = countries;
        self
    }

    /// Default: MP (Northern Mariana Islands)
    pub fn international_display_region(mut self, region: Option<RegionCode>) -> Self {
        self.options.international_display_region = region;
        self
    }

    pub fn names(mut self, names: CountryNames) -> Self {
        self.options.names = names;
        self
    }

    /// Build the CatalogOptions.
    pub fn build(self) -> CatalogOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rc(code: &str) -> RegionCode {
        RegionCode::new(code).unwrap()
    }

    #[test]
    fn test_catalog_options_default() {
        let options = CatalogOptions::default();
        assert!(options.enable_placeholder);
        assert!(!options.include_dial_code);
        assert_eq!(options.international_display_region, Some(rc("MP")));
    }

    #[test]
    fn test_keeps_visible_and_excluded() {
        let options = CatalogOptions::builder()
            .visible(vec![rc("US"), rc("GB")])
            .excluded(vec![rc("GB")])
            .build();

        assert!(options.keeps(&rc("US")));
        assert!(!options.keeps(&rc("GB")));
        assert!(!options.keeps(&rc("ES")));
    }

    #[test]
    fn test_keeps_everything_by_default() {
        let options = CatalogOptions::default();
        assert!(options.keeps(&rc("ES")));
    }
}

//! Country display names.

use crate::types::RegionCode;
use std::collections::HashMap;

/// Resolves the name shown for a country.
///
/// Lookup order: caller override, then (when enabled) the ISO 3166 short name
/// known to `keshvar`, then the name carried by the catalog row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryNames {
    overrides: HashMap<RegionCode, String>,
    prefer_iso_names: bool,
}

impl CountryNames {
    /// Names as they appear in the catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the name of one country.
    pub fn with_override(mut self, iso2: RegionCode, name: impl Into<String>) -> Self {
        self.overrides.insert(iso2, name.into());
        self
    }

    /// Use ISO 3166 short names instead of the catalog names where known.
    pub fn prefer_iso_names(mut self, enabled: bool) -> Self {
        self.prefer_iso_names = enabled;
        self
    }

    /// Resolve the display name for `iso2`, falling back to `fallback`.
    pub fn resolve(&self, iso2: &RegionCode, fallback: &str) -> String {
        if let Some(name) = self.overrides.get(iso2).filter(|n| !n.trim().is_empty()) {
            return name.clone();
        }

        if self.prefer_iso_names
            && let Some(name) = iso_short_name(iso2)
        {
            return name.to_string();
        }

        if fallback.is_empty() {
            iso_short_name(iso2).map_or_else(|| iso2.to_string(), str::to_string)
        } else {
            fallback.to_string()
        }
    }
}

fn iso_short_name(iso2: &RegionCode) -> Option<&'static str> {
    keshvar::Alpha2::try_from(iso2.as_str())
        .ok()
        .map(|alpha2| alpha2.to_country().iso_short_name())
}

//! Country catalog: the ordered, read-only list of dialable countries.
//!
//! Raw rows `(emoji, name, iso2, dial code, priority?, area codes?)` are mapped
//! once into [`Country`] records. Catalog order matters: it is the tie-break
//! for area-code matches and for countries sharing a calling code.

mod country;
mod names;
mod options;

pub use country::{Country, CountryRecord, InputMask};
pub use names::CountryNames;
pub use options::{CatalogOptions, CatalogOptionsBuilder, DEFAULT_INTERNATIONAL_DISPLAY_REGION};

use crate::errors::CatalogError;
use crate::grammar::PhoneGrammar;
use crate::types::{DialCode, FormatKind, NumberKind, RegionCode};
use once_cell::sync::Lazy;
use regex::Regex;

#[cfg(feature = "tracing")]
use tracing::debug;

/// Country rows embedded at compile time.
static CATALOG_JSON: &str = include_str!("../../assets/countries.json");

static BUNDLED_RECORDS: Lazy<Vec<CountryRecord>> = Lazy::new(|| {
    CountryRecord::parse_rows(CATALOG_JSON).expect("assets/countries.json is invalid")
});

static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("digit pattern"));

/// Rows of the bundled catalog, in catalog order.
pub fn bundled_records() -> &'static [CountryRecord] {
    &BUNDLED_RECORDS
}

/// Ordered list of countries the pipeline selects from.
///
/// # Example
///
/// ```rust
/// use intl_tel_input::{CountryCatalog, DialCode};
///
/// let catalog = CountryCatalog::bundled();
/// let nanp = DialCode::new("1").unwrap();
///
/// assert_eq!(catalog.find("es").unwrap().name, "Spain");
/// assert!(catalog.sharing_dial_code(&nanp).count() > 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryCatalog {
    countries: Vec<Country>,
}

impl CountryCatalog {
    /// Wrap an already mapped country list.
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    /// Every bundled country, without placeholders.
    pub fn bundled() -> Self {
        Self::new(
            bundled_records()
                .iter()
                .map(|record| record.to_country(String::new(), None))
                .collect(),
        )
    }

    /// Map a JSON array of raw rows, without placeholders.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records = CountryRecord::parse_rows(json)?;
        Ok(Self::new(
            records
                .iter()
                .map(|record| record.to_country(String::new(), None))
                .collect(),
        ))
    }

    /// Build the country list shown to the user: filter visible/excluded
    /// countries, resolve names, compute placeholders and masks, then move
    /// preferred countries to the front.
    pub fn process<G: PhoneGrammar>(
        records: &[CountryRecord],
        grammar: &G,
        options: &CatalogOptions,
    ) -> Self {
        let mut countries: Vec<Country> = records
            .iter()
            .filter(|record| options.keeps(&record.iso2))
            .map(|record| {
                let placeholder = if options.enable_placeholder {
                    placeholder(grammar, &record.iso2, options)
                } else {
                    String::new()
                };
                let mask = (options.use_mask && !placeholder.is_empty()).then(|| InputMask {
                    pattern: DIGIT.replace_all(&placeholder, "0").into_owned(),
                    lazy: !options.show_mask_placeholder,
                });

                let mut country = record.to_country(placeholder, mask);
                country.name = options.names.resolve(&record.iso2, &record.name);
                country
            })
            .collect();

        if !options.preferred.is_empty() {
            // Stable: preferred first, catalog order otherwise.
            countries.sort_by_key(|country| !options.is_preferred(&country.iso2));
        }

        #[cfg(feature = "tracing")]
        debug!(
            total = records.len(),
            kept = countries.len(),
            "Country catalog processed"
        );

        Self::new(countries)
    }

    /// All countries, in catalog order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Country> {
        self.countries.iter()
    }

    /// Look up a country by ISO2 code.
    pub fn by_iso(&self, iso2: &RegionCode) -> Option<&Country> {
        self.countries.iter().find(|country| &country.iso2 == iso2)
    }

    /// Look up a country by ISO2 code or by exact (case-insensitive) name.
    pub fn find(&self, key: &str) -> Option<&Country> {
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        self.countries
            .iter()
            .find(|country| country.iso2.matches(key) || country.name.eq_ignore_ascii_case(key))
    }

    /// Countries using `dial_code`, in catalog order.
    pub fn sharing_dial_code<'a>(
        &'a self,
        dial_code: &'a DialCode,
    ) -> impl Iterator<Item = &'a Country> + 'a {
        self.countries
            .iter()
            .filter(move |country| &country.dial_code == dial_code)
    }

    /// Country selected when nothing better is known: the first priority-0
    /// entry, or the first entry at all.
    pub fn default_country(&self) -> Option<&Country> {
        self.countries
            .iter()
            .find(|country| country.priority == 0)
            .or_else(|| self.countries.first())
    }

    /// Countries whose name or ISO2 contains `term` (case-insensitive) or whose
    /// dial code contains it. An empty term returns everything.
    pub fn search(&self, term: &str) -> Vec<&Country> {
        let term = term.trim();
        if term.is_empty() {
            return self.countries.iter().collect();
        }

        let lower = term.to_lowercase();
        let digits = term.trim_start_matches('+');

        self.countries
            .iter()
            .filter(|country| {
                country.name.to_lowercase().contains(&lower)
                    || country.iso2.to_lowercase().contains(&lower)
                    || (!digits.is_empty() && country.dial_code.as_str().contains(digits))
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a CountryCatalog {
    type Item = &'a Country;
    type IntoIter = std::slice::Iter<'a, Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.countries.iter()
    }
}

impl AsRef<[Country]> for CountryCatalog {
    fn as_ref(&self) -> &[Country] {
        &self.countries
    }
}

/// Mobile example number for the region, national form unless dial codes are
/// shown or the region always displays internationally. Empty when unknown.
fn placeholder<G: PhoneGrammar>(grammar: &G, iso2: &RegionCode, options: &CatalogOptions) -> String {
    let international = options.include_dial_code
        || options.international_display_region.as_ref() == Some(iso2);
    let kind = if international {
        FormatKind::International
    } else {
        FormatKind::National
    };

    grammar
        .example_number(iso2, NumberKind::Mobile)
        .and_then(|example| grammar.format(&example, kind).ok())
        .unwrap_or_default()
}

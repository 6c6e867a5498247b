//! Country inference for calling codes shared by several countries.
//!
//! `+1` covers the US, Canada and a couple of dozen Caribbean and Pacific
//! territories; `+44` the UK and the Crown Dependencies; `+7` Russia and
//! Kazakhstan. The national number's leading digits (area code) and the
//! catalog priority decide which one a number belongs to.

use crate::catalog::Country;
use crate::types::{DialCode, RegionCode};

#[cfg(feature = "tracing")]
use tracing::debug;

/// Result of resolving the country of a parsed number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CountryInference<'a> {
    /// The resolved country is the one already selected; nothing to update.
    Unchanged(&'a Country),
    /// A different country than the current selection was resolved.
    Changed(&'a Country),
}

impl<'a> CountryInference<'a> {
    /// The resolved country.
    pub fn country(&self) -> &'a Country {
        match self {
            Self::Unchanged(country) | Self::Changed(country) => country,
        }
    }

    /// Whether the caller has to update its selection.
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }
}

/// Resolve which catalog country a number belongs to.
///
/// 1. Only countries using `calling_code` are considered.
/// 2. The first of them (catalog order) with an area code prefixing
///    `national_number` wins.
/// 3. Otherwise the priority-0 country among those without area codes.
/// 4. Otherwise the first country using the calling code.
///
/// Returns `None` when no country uses the calling code; the caller keeps its
/// current selection.
///
/// # Example
///
/// ```rust
/// use intl_tel_input::{CountryCatalog, DialCode, RegionCode, infer_country};
///
/// let catalog = CountryCatalog::bundled();
/// let nanp = DialCode::new("1").unwrap();
/// let us = RegionCode::new("US").unwrap();
///
/// let dominica = infer_country(&nanp, "7672251234", catalog.countries(), Some(&us)).unwrap();
/// assert!(dominica.is_changed());
/// assert_eq!(dominica.country().iso2.as_str(), "DM");
///
/// let stays = infer_country(&nanp, "2015550123", catalog.countries(), Some(&us)).unwrap();
/// assert!(!stays.is_changed());
/// ```
pub fn infer_country<'a>(
    calling_code: &DialCode,
    national_number: &str,
    countries: &'a [Country],
    current: Option<&RegionCode>,
) -> Option<CountryInference<'a>> {
    let mut sharing = countries
        .iter()
        .filter(|country| &country.dial_code == calling_code)
        .peekable();
    let first = *sharing.peek()?;

    let mut by_priority = None;
    let mut by_area_code = None;
    for country in sharing {
        if country.has_area_codes() {
            if country.matches_area_code(national_number) {
                by_area_code = Some(country);
                break;
            }
        } else if country.priority == 0 && by_priority.is_none() {
            by_priority = Some(country);
        }
    }

    let resolved = by_area_code.or(by_priority).unwrap_or(first);

    if current == Some(&resolved.iso2) {
        return Some(CountryInference::Unchanged(resolved));
    }

    #[cfg(feature = "tracing")]
    debug!(
        calling_code = %calling_code,
        resolved = %resolved.iso2,
        "Country inferred from number"
    );

    Some(CountryInference::Changed(resolved))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CountryCatalog;

    fn catalog() -> CountryCatalog {
        CountryCatalog::from_json(
            r#"[
                ["🇺🇸", "United States", "us", "1", 0],
                ["🇩🇲", "Dominica", "dm", "1", 13, ["767"]],
                ["🇬🇩", "Grenada", "gd", "1", 14, ["473"]],
                ["🇬🇧", "United Kingdom", "gb", "44", 0],
                ["🇬🇬", "Guernsey", "gg", "44", 1, ["1481", "7781"]],
                ["🇧🇶", "Caribbean Netherlands", "bq", "599", 1, ["3", "4", "7"]],
                ["🇨🇼", "Curaçao", "cw", "599", 0],
                ["🇸🇯", "Svalbard & Jan Mayen", "sj", "47", 1, ["79"]],
                ["🇳🇴", "Norway", "no", "47", 2]
            ]"#,
        )
        .unwrap()
    }

    fn dc(code: &str) -> DialCode {
        DialCode::new(code).unwrap()
    }

    fn rc(code: &str) -> RegionCode {
        RegionCode::new(code).unwrap()
    }

    fn infer(code: &str, national: &str, current: Option<&str>) -> Option<String> {
        let catalog = catalog();
        let current = current.map(rc);
        infer_country(&dc(code), national, catalog.countries(), current.as_ref())
            .map(|inference| inference.country().iso2.to_string())
    }

    #[test]
    fn test_area_code_selects_sibling() {
        assert_eq!(infer("1", "7672251234", None).as_deref(), Some("DM"));
        assert_eq!(infer("1", "4734031234", None).as_deref(), Some("GD"));
        assert_eq!(infer("44", "1481123456", None).as_deref(), Some("GG"));
    }

    #[test]
    fn test_priority_zero_without_area_code_match() {
        assert_eq!(infer("1", "2015550123", None).as_deref(), Some("US"));
        assert_eq!(infer("44", "7400123456", None).as_deref(), Some("GB"));
        assert_eq!(infer("599", "95181234", None).as_deref(), Some("CW"));
    }

    #[test]
    fn test_first_sharing_country_when_no_priority_zero() {
        // Norway has priority 2 here, Svalbard has area codes: first entry wins.
        assert_eq!(infer("47", "22123456", None).as_deref(), Some("SJ"));
    }

    #[test]
    fn test_unknown_calling_code() {
        assert_eq!(infer("999", "123456", None), None);
    }

    #[test]
    fn test_unchanged_when_already_selected() {
        let catalog = catalog();
        let us = rc("US");
        let inference =
            infer_country(&dc("1"), "2015550123", catalog.countries(), Some(&us)).unwrap();

        assert!(!inference.is_changed());
        assert!(matches!(inference, CountryInference::Unchanged(_)));
    }

    #[test]
    fn test_changed_when_selection_differs() {
        let catalog = catalog();
        let gb = rc("GB");
        let inference =
            infer_country(&dc("1"), "7672251234", catalog.countries(), Some(&gb)).unwrap();

        assert!(inference.is_changed());
        assert_eq!(inference.country().iso2, rc("DM"));
    }

    #[test]
    fn test_first_area_code_match_wins() {
        let catalog = CountryCatalog::from_json(
            r#"[
                ["🇽🇦", "First", "xa", "1", 1, ["76"]],
                ["🇽🇧", "Second", "xb", "1", 2, ["767"]]
            ]"#,
        )
        .unwrap();

        let inference = infer_country(&dc("1"), "7672251234", catalog.countries(), None).unwrap();
        assert_eq!(inference.country().iso2, rc("XA"));
    }
}

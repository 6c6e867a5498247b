//! Country records and the raw catalog row mapping.

use crate::errors::CatalogError;
use crate::types::{DialCode, RegionCode};
use serde::Serialize;
use serde_json::Value;

/// Input mask derived from a country's placeholder (`0` stands for a digit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputMask {
    /// Mask pattern, e.g. `000 00 00 00`.
    pub pattern: String,
    /// Whether the mask placeholder stays hidden until typed over.
    pub lazy: bool,
}

/// One dialable jurisdiction of the catalog.
///
/// Built once when the catalog is loaded and never edited afterwards: the
/// pipeline selects countries, it does not mutate them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Country {
    /// Unicode flag, e.g. `🇪🇸`.
    pub emoji_flag: String,
    /// Display name.
    pub name: String,
    /// ISO2 code, unique within a catalog.
    pub iso2: RegionCode,
    /// Calling code, shared by several countries in some plans (e.g. "1").
    pub dial_code: DialCode,
    /// Tie-break among countries sharing a calling code; 0 wins.
    pub priority: u32,
    /// National-number prefixes that identify this country among its siblings.
    pub area_codes: Option<Vec<String>>,
    /// `country-code__{iso}` element id.
    pub html_id: String,
    /// `country-code__{iso lower}` CSS class.
    pub flag_class: String,
    /// Example number shown as placeholder; empty when disabled.
    pub placeholder: String,
    /// Optional input mask.
    pub mask: Option<InputMask>,
}

impl Country {
    /// Whether a national number belongs to this country by area code.
    pub fn matches_area_code(&self, national_number: &str) -> bool {
        self.area_codes.as_ref().is_some_and(|codes| {
            codes
                .iter()
                .any(|code| national_number.starts_with(code.as_str()))
        })
    }

    /// Whether the country has any area codes at all.
    pub fn has_area_codes(&self) -> bool {
        self.area_codes.as_ref().is_some_and(|codes| !codes.is_empty())
    }
}

/// Strongly typed form of a raw catalog tuple
/// `(emoji, name, iso2, dial code, priority?, area codes?)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    pub emoji_flag: String,
    pub name: String,
    pub iso2: RegionCode,
    pub dial_code: DialCode,
    pub priority: u32,
    pub area_codes: Option<Vec<String>>,
}

impl CountryRecord {
    /// Map one positional row. `index` is only used for error reporting.
    pub fn from_row(index: usize, row: &[Value]) -> Result<Self, CatalogError> {
        let malformed = |reason: &str| CatalogError::MalformedRow {
            index,
            reason: reason.to_string(),
        };

        if row.len() < 4 {
            return Err(malformed("expected at least 4 fields"));
        }

        let text = |pos: usize, what: &str| {
            row[pos]
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| malformed(&format!("{what} must be a string")))
        };

        let emoji_flag = text(0, "flag")?;
        let name = text(1, "name")?;
        let iso2 = RegionCode::new(text(2, "iso2")?)
            .map_err(|source| CatalogError::Region { index, source })?;
        let dial_code = DialCode::new(text(3, "dial code")?)
            .map_err(|source| CatalogError::DialCode { index, source })?;

        // Priority may be absent, null, a number or a numeric string.
        let priority = match row.get(4) {
            None | Some(Value::Null) => 0,
            Some(Value::Number(n)) => n
                .as_u64()
                .and_then(|p| u32::try_from(p).ok())
                .ok_or_else(|| malformed("priority must be a non-negative integer"))?,
            Some(Value::String(s)) => s
                .trim()
                .parse()
                .map_err(|_| malformed("priority must be a non-negative integer"))?,
            Some(_) => return Err(malformed("priority must be a number")),
        };

        let area_codes = match row.get(5) {
            None | Some(Value::Null) => None,
            Some(Value::Array(codes)) => Some(
                codes
                    .iter()
                    .map(|code| {
                        code.as_str()
                            .filter(|c| !c.is_empty() && c.chars().all(|ch| ch.is_ascii_digit()))
                            .map(str::to_string)
                            .ok_or_else(|| malformed("area codes must be digit strings"))
                    })
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            Some(_) => return Err(malformed("area codes must be an array")),
        };

        Ok(Self {
            emoji_flag,
            name,
            iso2,
            dial_code,
            priority,
            area_codes,
        })
    }

    /// Parse a JSON array of rows.
    pub fn parse_rows(json: &str) -> Result<Vec<Self>, CatalogError> {
        let rows: Vec<Vec<Value>> = serde_json::from_str(json)?;
        rows.iter()
            .enumerate()
            .map(|(index, row)| Self::from_row(index, row))
            .collect()
    }

    /// Build the presentation-complete [`Country`] with the given placeholder.
    pub fn to_country(&self, placeholder: String, mask: Option<InputMask>) -> Country {
        let iso_lower = self.iso2.to_lowercase();
        Country {
            emoji_flag: self.emoji_flag.clone(),
            name: self.name.clone(),
            iso2: self.iso2.clone(),
            dial_code: self.dial_code.clone(),
            priority: self.priority,
            area_codes: self.area_codes.clone(),
            html_id: format!("country-code__{iso_lower}"),
            flag_class: format!("country-code__{iso_lower}"),
            placeholder,
            mask,
        }
    }
}

//! Types for geo-IP responses.

use crate::types::RegionCode;
use serde::{Deserialize, Serialize};

/// Location of the caller's public IP, as reported by ipapi.co.
///
/// Every field is optional; providers differ in what they return.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoData {
    pub ip: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    /// ISO2 code (ipapi also sends it as `country`).
    pub country_code: Option<String>,
    pub country: Option<String>,
    pub country_name: Option<String>,
    /// Calling code with leading '+', e.g. `+41`.
    pub country_calling_code: Option<String>,
    pub timezone: Option<String>,
    pub currency: Option<String>,
    pub languages: Option<String>,
}

impl GeoData {
    /// The ISO2 code of the located country, if present and well-formed.
    pub fn region_code(&self) -> Option<RegionCode> {
        [&self.country_code, &self.country]
            .into_iter()
            .flatten()
            .find_map(|code| RegionCode::new(code).ok())
    }
}

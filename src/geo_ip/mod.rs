//! Geo-IP lookup used to pick the initial country.
//!
//! Talks to an ipapi-compatible JSON endpoint (`https://ipapi.co/json` by
//! default). The result only seeds the country selection; callers fall back
//! to the catalog's default country on any error.

pub mod client;
pub mod errors;
mod response;
pub mod traits;
pub mod types;

pub use client::{DEFAULT_ENDPOINT, GeoIpClient, GeoIpClientBuilder};
pub use errors::{GeoIpError, GeoIpServiceError};
pub use traits::GeoLocator;
pub use types::GeoData;

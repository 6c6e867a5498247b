//! Locator trait definition.

use super::client::GeoIpClient;
use super::errors::GeoIpError;
use crate::types::RegionCode;
use std::error::Error as StdError;
use std::future::Future;

/// Anything that can guess the user's country, used to seed the initial
/// selection of a [`PhoneInput`](crate::PhoneInput).
///
/// # Example
///
/// ```rust
/// use intl_tel_input::{GeoLocator, RegionCode};
/// use std::convert::Infallible;
///
/// struct Fixed(RegionCode);
///
/// impl GeoLocator for Fixed {
///     type Error = Infallible;
///
///     async fn locate(&self) -> Result<RegionCode, Infallible> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait GeoLocator: Send + Sync {
    /// Error type returned by the lookup.
    type Error: StdError + Send + Sync + 'static;

    /// Country of the current user.
    fn locate(&self) -> impl Future<Output = Result<RegionCode, Self::Error>> + Send;
}

impl GeoLocator for GeoIpClient {
    type Error = GeoIpError;

    async fn locate(&self) -> Result<RegionCode, GeoIpError> {
        self.lookup()
            .await?
            .region_code()
            .ok_or(GeoIpError::MissingCountryCode)
    }
}

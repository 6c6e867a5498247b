//! Error types for the geo-IP lookup.

use thiserror::Error;

#[cfg(feature = "tracing")]
use tracing::warn;

/// Error body returned by ipapi-style services with a 200 status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("geo-IP service error: reason={reason}, message={}", message.as_deref().unwrap_or("-"))]
pub struct GeoIpServiceError {
    /// Short machine-readable reason, e.g. `RateLimited`.
    pub reason: String,
    /// Human-readable explanation, when provided.
    pub message: Option<String>,
}

impl GeoIpServiceError {
    pub(crate) fn new(reason: impl Into<String>, message: Option<String>) -> Self {
        let error = Self {
            reason: reason.into(),
            message,
        };

        #[cfg(feature = "tracing")]
        warn!(
            reason = %error.reason,
            message = ?error.message,
            "Geo-IP service returned error"
        );

        error
    }
}

/// Main error type for geo-IP lookups.
#[derive(Debug, Error)]
pub enum GeoIpError {
    /// Failed to build HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    BuildHttpClient(#[source] reqwest::Error),

    /// The endpoint is not a valid URL.
    #[error("Invalid geo-IP endpoint: {0}")]
    InvalidEndpoint(#[source] url::ParseError),

    /// Error building the request query.
    #[error("Error building geo-IP request URL: {0}")]
    BuildRequestUrl(#[source] serde_urlencoded::ser::Error),

    /// Failed to send HTTP request.
    #[error("Failed to send HTTP request: {0}")]
    HttpRequest(#[from] reqwest_middleware::Error),

    /// Failed to read the response body.
    #[error("Failed to parse response: {0}")]
    ParseResponse(#[source] reqwest::Error),

    /// Failed to deserialize JSON response.
    #[error("Failed to deserialize JSON response: {0}")]
    DeserializeJson(#[source] serde_json::Error),

    /// The service answered with an error body.
    #[error("Geo-IP service error: {0}")]
    Service(#[source] GeoIpServiceError),

    /// The response carries no usable ISO2 country code.
    #[error("Geo-IP response has no usable country code")]
    MissingCountryCode,
}

pub type Result<T> = std::result::Result<T, GeoIpError>;

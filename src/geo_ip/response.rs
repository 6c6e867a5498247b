//! Response parsing for ipapi-style services.

use super::errors::GeoIpServiceError;
use super::types::GeoData;
use serde_json::Value;

/// A lookup either locates the caller or reports an error body.
#[derive(Debug)]
pub(crate) enum GeoIpResponse {
    Success(GeoData),
    Error(GeoIpServiceError),
}

impl GeoIpResponse {
    /// Parse a response body.
    ///
    /// ipapi reports failures with a 200 status and a body such as
    /// `{"error": true, "reason": "RateLimited", "message": "..."}`.
    pub(crate) fn from_text(text: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(text)?;

        if value.get("error").and_then(Value::as_bool) == Some(true) {
            let reason = value
                .get("reason")
                .and_then(Value::as_str)
                .unwrap_or("Unknown");
            let message = value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string);
            return Ok(Self::Error(GeoIpServiceError::new(reason, message)));
        }

        Ok(Self::Success(serde_json::from_value(value)?))
    }

    pub(crate) fn into_result(self) -> Result<GeoData, GeoIpServiceError> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Error(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body() {
        let response = GeoIpResponse::from_text(r#"{"country_code": "DE"}"#).unwrap();
        let data = response.into_result().unwrap();
        assert_eq!(data.country_code.as_deref(), Some("DE"));
    }

    #[test]
    fn test_error_body() {
        let response = GeoIpResponse::from_text(
            r#"{"error": true, "reason": "RateLimited", "message": "Visit https://ipapi.co/ratelimited/"}"#,
        )
        .unwrap();

        let error = response.into_result().unwrap_err();
        assert_eq!(error.reason, "RateLimited");
        assert!(error.message.unwrap().contains("ratelimited"));
    }

    #[test]
    fn test_error_false_is_success() {
        let response = GeoIpResponse::from_text(r#"{"error": false, "country": "FR"}"#).unwrap();
        assert!(response.into_result().is_ok());
    }

    #[test]
    fn test_invalid_json() {
        assert!(GeoIpResponse::from_text("<html>busy</html>").is_err());
    }
}

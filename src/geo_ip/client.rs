//! Geo-IP HTTP client.

use super::errors::{GeoIpError, Result};
use super::response::GeoIpResponse;
use super::types::GeoData;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

#[cfg(feature = "tracing")]
use opentelemetry::trace::Status;
#[cfg(feature = "tracing")]
use tracing::Span;
#[cfg(feature = "tracing")]
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// Default geo-IP endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://ipapi.co/json";

/// Default request timeout of the built-in HTTP client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for an ipapi-compatible geo-IP service.
///
/// A lookup is attempted once; failures are reported, never retried.
///
/// # Example
///
/// ```rust,ignore
/// use intl_tel_input::GeoIpClient;
///
/// let client = GeoIpClient::new()?;
/// let data = client.lookup().await?;
/// println!("Located in {:?}", data.country_name);
/// ```
#[derive(Clone)]
pub struct GeoIpClient {
    http_client: ClientWithMiddleware,
    api_key: Option<SecretString>,
    endpoint: Url,
}

impl std::fmt::Debug for GeoIpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeoIpClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Builder for configuring a [`GeoIpClient`].
#[derive(Default)]
pub struct GeoIpClientBuilder {
    api_key: Option<String>,
    endpoint: Option<Url>,
    http_client: Option<ClientWithMiddleware>,
    timeout: Option<Duration>,
}

impl GeoIpClientBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key, sent as the `key` query parameter.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set a custom endpoint.
    pub fn endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Set a custom HTTP client with middleware. The builder timeout is not
    /// applied to a custom client.
    pub fn http_client(mut self, client: ClientWithMiddleware) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set the request timeout of the built-in HTTP client.
    ///
    /// Default: 5 seconds
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the [`GeoIpClient`].
    pub fn build(self) -> Result<GeoIpClient> {
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => Url::parse(DEFAULT_ENDPOINT).map_err(GeoIpError::InvalidEndpoint)?,
        };

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let client = reqwest::Client::builder()
                    .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
                    .build()
                    .map_err(GeoIpError::BuildHttpClient)?;
                ClientBuilder::new(client).build()
            }
        };

        Ok(GeoIpClient {
            http_client,
            api_key: self.api_key.map(SecretString::from),
            endpoint,
        })
    }
}

impl GeoIpClient {
    /// Create a client for the default endpoint, without an API key.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a client for a custom endpoint.
    pub fn with_endpoint(endpoint: impl AsRef<str>) -> Result<Self> {
        let url = Url::parse(endpoint.as_ref()).map_err(GeoIpError::InvalidEndpoint)?;
        Self::builder().endpoint(url).build()
    }

    /// Create a builder for configuring the client.
    pub fn builder() -> GeoIpClientBuilder {
        GeoIpClientBuilder::new()
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn build_request_url(&self) -> Result<Url> {
        let mut endpoint = self.endpoint.clone();

        if let Some(api_key) = &self.api_key {
            let params = [("key", api_key.expose_secret())];
            endpoint.set_query(Some(
                &serde_urlencoded::to_string(params).map_err(GeoIpError::BuildRequestUrl)?,
            ));
        }

        Ok(endpoint)
    }

    async fn send_request(&self, url: Url) -> Result<String> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(GeoIpError::HttpRequest)?;

        response.text().await.map_err(GeoIpError::ParseResponse)
    }

    /// Locate the caller's public IP.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "GeoIpClient::lookup",
            skip_all,
            fields(endpoint = %self.endpoint, country_code)
        )
    )]
    pub async fn lookup(&self) -> Result<GeoData> {
        let url = self.build_request_url()?;
        let text = self.send_request(url).await?;

        let data = GeoIpResponse::from_text(&text)
            .map_err(GeoIpError::DeserializeJson)?
            .into_result()
            .map_err(GeoIpError::Service)?;

        #[cfg(feature = "tracing")]
        {
            Span::current()
                .record(
                    "country_code",
                    data.country_code.as_deref().unwrap_or_default(),
                )
                .set_status(Status::Ok);
        }

        Ok(data)
    }
}

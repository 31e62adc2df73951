//! Nominatim HTTP client.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::domain::Point;

use super::ReverseGeocoder;
use super::error::LookupError;
use super::types::ReverseResponse;

/// Default base URL for the public OpenStreetMap Nominatim instance.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Configuration for the Nominatim client.
#[derive(Debug, Clone)]
pub struct NominatimConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Value sent in the `User-Agent` header (required by the usage policy)
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl NominatimConfig {
    /// Create a new config identifying itself with the given user agent.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: user_agent.into(),
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing or a self-hosted instance).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the Nominatim reverse-geocoding endpoint.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    /// Create a new Nominatim client.
    pub fn new(config: NominatimConfig) -> Result<Self, LookupError> {
        let mut headers = HeaderMap::new();
        let user_agent =
            HeaderValue::from_str(&config.user_agent).map_err(|_| LookupError::Api {
                status: 0,
                message: "Invalid user agent format".to_string(),
            })?;
        headers.insert(USER_AGENT, user_agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Look up the state/province containing a point.
    pub async fn lookup_state(&self, point: Point) -> Result<String, LookupError> {
        let url = format!("{}/reverse", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("lat", point.lat().to_string()),
                ("lon", point.lon().to_string()),
                ("format", "json".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let reverse: ReverseResponse =
            serde_json::from_str(&body).map_err(|e| LookupError::Json {
                message: e.to_string(),
            })?;

        reverse.into_jurisdiction()
    }
}

impl ReverseGeocoder for NominatimClient {
    async fn reverse_geocode(&self, point: Point) -> Result<String, LookupError> {
        self.lookup_state(point).await
    }
}

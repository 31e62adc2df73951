//! OSRM HTTP client.
//!
//! Fetches driving route geometry for an ordered list of locations.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

use crate::domain::Point;
use crate::planner::RouteProvider;

use super::error::RouteError;
use super::types::RouteResponse;

/// Default base URL for the public OSRM demo server.
const DEFAULT_BASE_URL: &str = "http://router.project-osrm.org";

/// Default routing profile.
const DEFAULT_PROFILE: &str = "driving";

/// Configuration for the OSRM client.
#[derive(Debug, Clone)]
pub struct OsrmConfig {
    /// Base URL for the API (defaults to the public demo server)
    pub base_url: String,
    /// Routing profile (`driving`, `car`, ...)
    pub profile: String,
    /// Value sent in the `User-Agent` header
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OsrmConfig {
    /// Create a new config identifying itself with the given user agent.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            profile: DEFAULT_PROFILE.to_string(),
            user_agent: user_agent.into(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing or a self-hosted server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the routing profile.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// OSRM route API client.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    http: reqwest::Client,
    base_url: String,
    profile: String,
}

impl OsrmClient {
    /// Create a new OSRM client with the given configuration.
    pub fn new(config: OsrmConfig) -> Result<Self, RouteError> {
        let mut headers = HeaderMap::new();
        let user_agent =
            HeaderValue::from_str(&config.user_agent).map_err(|_| RouteError::Api {
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
            profile: config.profile,
        })
    }

    /// Build the request URL for a sequence of locations.
    ///
    /// OSRM expects `lon,lat` pairs separated by `;`.
    fn route_url(&self, locations: &[Point]) -> String {
        let coords = locations
            .iter()
            .map(|p| format!("{},{}", p.lon(), p.lat()))
            .collect::<Vec<_>>()
            .join(";");

        format!("{}/route/v1/{}/{}", self.base_url, self.profile, coords)
    }

    /// Fetch the full-resolution route geometry through `locations`.
    pub async fn fetch_route(&self, locations: &[Point]) -> Result<Vec<Point>, RouteError> {
        let url = self.route_url(locations);
        debug!(%url, "fetching route");

        let response = self
            .http
            .get(&url)
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        let path = parse_route_body(status, &body)?;
        debug!(points = path.len(), "route fetched");
        Ok(path)
    }
}

/// Interpret an OSRM response.
///
/// OSRM reports routing failures (NoRoute, InvalidQuery) with a 400 and a
/// JSON body carrying the code, so an error status still yields that code
/// when the body has one. An error status is never a route.
fn parse_route_body(status: StatusCode, body: &str) -> Result<Vec<Point>, RouteError> {
    let parsed: Result<RouteResponse, _> = serde_json::from_str(body);

    if !status.is_success() {
        return match parsed {
            Ok(resp) if resp.code != "Ok" => Err(RouteError::NoRoute {
                message: resp.message.unwrap_or_default(),
                code: resp.code,
            }),
            _ => Err(RouteError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            }),
        };
    }

    let resp = parsed.map_err(|e| RouteError::Json {
        message: e.to_string(),
    })?;

    resp.into_path()
}

impl RouteProvider for OsrmClient {
    async fn get_route(&self, locations: &[Point]) -> Result<Vec<Point>, RouteError> {
        self.fetch_route(locations).await
    }
}

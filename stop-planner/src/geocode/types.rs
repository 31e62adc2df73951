//! Nominatim reverse-geocoding response types.

use serde::Deserialize;

use super::error::LookupError;

/// Response from `/reverse?format=json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReverseResponse {
    /// Present when the service could not resolve the point.
    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub address: Option<Address>,
}

/// Address breakdown. Nominatim omits any level it has no data for.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub state: Option<String>,
}

impl ReverseResponse {
    /// The state/province name for the point.
    pub fn into_jurisdiction(self) -> Result<String, LookupError> {
        if let Some(message) = self.error {
            return Err(LookupError::Service(message));
        }

        self.address
            .and_then(|a| a.state)
            .filter(|s| !s.trim().is_empty())
            .ok_or(LookupError::MissingField("address.state"))
    }
}

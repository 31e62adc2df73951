//! Reverse-geocoding error types.

/// Errors from a jurisdiction lookup.
///
/// The planner never surfaces these to callers; the speed resolver turns
/// any of them into the `"Unknown"` jurisdiction.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The service answered with an error message (e.g. open ocean)
    #[error("geocoder error: {0}")]
    Service(String),

    /// Response had no usable jurisdiction field
    #[error("response has no {0} field")]
    MissingField(&'static str),
}

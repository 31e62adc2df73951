//! OSRM client error types.

/// Errors from the OSRM route client.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// OSRM answered but could not route between the locations
    #[error("no route found ({code}): {message}")]
    NoRoute { code: String, message: String },

    /// Route geometry contained an unusable coordinate
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RouteError::Api {
            status: 429,
            message: "Too Many Requests".into(),
        };
        assert_eq!(err.to_string(), "API error 429: Too Many Requests");

        let err = RouteError::NoRoute {
            code: "NoRoute".into(),
            message: "Impossible route between points".into(),
        };
        assert_eq!(
            err.to_string(),
            "no route found (NoRoute): Impossible route between points"
        );
    }
}

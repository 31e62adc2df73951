//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Stop;
use crate::planner::PlanResult;

/// Output format for a planned route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Spreadsheet download
    Csv,
    /// JSON body
    Json,
    /// HTML table fragment
    Html,
}

/// Query for `/plan-route`.
#[derive(Debug, Deserialize)]
pub struct PlanRouteRequest {
    /// `lat,lon` entries separated by `;` or `|`
    pub coordinates: Option<String>,

    /// Optional separate user waypoints, same syntax as `coordinates`.
    /// Defaults to the coordinates themselves.
    pub waypoints: Option<String>,

    /// Response format (defaults to HTML for browsers, CSV otherwise)
    pub format: Option<OutputFormat>,
}

/// A stop in a plan response.
#[derive(Debug, Serialize)]
pub struct StopResult {
    /// `"1:00"` for automatic stops, `"User Stop"` for waypoints
    pub duration: String,

    /// Latitude, two decimal digits
    pub lat: String,

    /// Longitude, two decimal digits
    pub lon: String,

    /// Stop label
    pub location: String,

    /// Fuel availability label
    pub fuel: String,
}

/// Response for route planning.
#[derive(Debug, Serialize)]
pub struct PlanRouteResponse {
    /// Stops in travel order
    pub stops: Vec<StopResult>,

    /// Number of points in the route geometry
    pub path_points: usize,

    /// Total route distance in miles
    pub route_miles: f64,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl StopResult {
    /// Create from a domain stop.
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            duration: stop.duration().to_string(),
            lat: stop.lat().to_string(),
            lon: stop.lon().to_string(),
            location: stop.location().to_string(),
            fuel: stop.fuel().to_string(),
        }
    }
}

impl PlanRouteResponse {
    /// Create from a plan result.
    pub fn from_result(result: &PlanResult) -> Self {
        Self {
            stops: result.stops.iter().map(StopResult::from_stop).collect(),
            path_points: result.path_points,
            route_miles: result.route_miles,
        }
    }
}

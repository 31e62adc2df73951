//! Planning entry point: route lookup followed by stop generation.

use std::future::Future;

use tracing::{info, warn};

use crate::distance::path_miles;
use crate::domain::{Point, Stop};
use crate::osrm::RouteError;
use crate::speed::SpeedResolver;

use super::config::StopConfig;
use super::stops::generate_stops;

/// Error from stop planning.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// Locations were missing or malformed; no external call was made
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The route provider could not supply geometry
    #[error("route unavailable: {0}")]
    RouteUnavailable(#[from] RouteError),
}

/// Supplies the driving path through an ordered list of locations.
///
/// This abstraction allows the planner to be tested with mock routes.
pub trait RouteProvider {
    /// Path geometry in travel order.
    fn get_route(
        &self,
        locations: &[Point],
    ) -> impl Future<Output = Result<Vec<Point>, RouteError>> + Send;
}

/// Request to plan stops along a route.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Locations the route must pass through, in order.
    pub locations: Vec<Point>,

    /// Mandatory stops, in visiting order.
    pub waypoints: Vec<Point>,
}

impl PlanRequest {
    /// Create a new plan request.
    pub fn new(locations: Vec<Point>, waypoints: Vec<Point>) -> Self {
        Self {
            locations,
            waypoints,
        }
    }

    /// Parse a request from query text.
    ///
    /// `coordinates` is a list of `lat,lon` entries separated by `;` or `|`.
    /// Repeated commas collapse to one and a trailing separator is
    /// ignored. When `waypoints` is absent every location is also a user
    /// waypoint.
    pub fn parse(coordinates: &str, waypoints: Option<&str>) -> Result<Self, PlanError> {
        let locations = parse_locations(coordinates)?;
        let waypoints = match waypoints {
            Some(text) if text.trim().is_empty() => Vec::new(),
            Some(text) => parse_locations(text)?,
            None => locations.clone(),
        };

        let request = Self::new(locations, waypoints);
        request.validate()?;
        Ok(request)
    }

    /// Validate the plan request.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.locations.len() < 2 {
            return Err(PlanError::InvalidInput(
                "need at least two locations".to_string(),
            ));
        }
        Ok(())
    }
}

/// Normalise and parse a separator-delimited list of `lat,lon` entries.
fn parse_locations(text: &str) -> Result<Vec<Point>, PlanError> {
    let normalised = normalise_separators(text);
    if normalised.is_empty() {
        return Ok(Vec::new());
    }

    normalised
        .split(';')
        .map(|entry| Point::parse(entry).map_err(|e| PlanError::InvalidInput(e.to_string())))
        .collect()
}

/// Apply the separator rules: `|` means `;`, runs of `,` collapse, and
/// one trailing `;` is dropped.
fn normalise_separators(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.trim().chars() {
        let c = if c == '|' { ';' } else { c };
        if c == ',' && out.ends_with(',') {
            continue;
        }
        out.push(c);
    }
    if out.ends_with(';') {
        out.pop();
    }
    out
}

/// Result of stop planning.
#[derive(Debug, Clone)]
pub struct PlanResult {
    /// Stops in travel order.
    pub stops: Vec<Stop>,

    /// Number of points in the route geometry.
    pub path_points: usize,

    /// Total route distance in miles.
    pub route_miles: f64,
}

/// Stop planner.
///
/// Composes a route provider with the stop generator. Each call to
/// [`Planner::plan`] is independent; the planner holds no per-request
/// state.
pub struct Planner<'a, P, S> {
    routes: &'a P,
    speeds: &'a S,
    config: &'a StopConfig,
}

impl<'a, P: RouteProvider + Sync, S: SpeedResolver + Sync> Planner<'a, P, S> {
    /// Create a new planner.
    pub fn new(routes: &'a P, speeds: &'a S, config: &'a StopConfig) -> Self {
        Self {
            routes,
            speeds,
            config,
        }
    }

    /// Fetch the route for `request` and generate its stops.
    pub async fn plan(&self, request: &PlanRequest) -> Result<PlanResult, PlanError> {
        request.validate()?;

        let path = self
            .routes
            .get_route(&request.locations)
            .await
            .inspect_err(|e| warn!(error = %e, "route lookup failed"))?;

        let stops = generate_stops(&path, &request.waypoints, self.speeds, self.config).await;
        let route_miles = path_miles(&path);

        info!(
            locations = request.locations.len(),
            path_points = path.len(),
            route_miles,
            stops = stops.len(),
            "planned stops"
        );

        Ok(PlanResult {
            stops,
            path_points: path.len(),
            route_miles,
        })
    }
}

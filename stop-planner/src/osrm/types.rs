//! OSRM route service response types.
//!
//! Only the fields the planner reads are modelled; serde ignores the rest
//! (legs, waypoints, distances, durations).

use serde::Deserialize;

use crate::domain::Point;

use super::error::RouteError;

/// Top-level response from `/route/v1/{profile}/{coordinates}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteResponse {
    /// `"Ok"` on success, otherwise an error code such as `"NoRoute"`.
    pub code: String,

    /// Human-readable message accompanying a failure code.
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub routes: Vec<Route>,
}

/// One candidate route.
#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    pub geometry: Geometry,
}

/// GeoJSON LineString geometry (`geometries=geojson`).
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    /// `[lon, lat]` pairs in travel order.
    pub coordinates: Vec<[f64; 2]>,
}

impl RouteResponse {
    /// Extract the first route's path as `Point`s, converting from the
    /// GeoJSON `[lon, lat]` order.
    pub fn into_path(self) -> Result<Vec<Point>, RouteError> {
        if self.code != "Ok" {
            return Err(RouteError::NoRoute {
                message: self.message.unwrap_or_default(),
                code: self.code,
            });
        }

        let route = self
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| RouteError::NoRoute {
                code: "Ok".to_string(),
                message: "response contained no routes".to_string(),
            })?;

        route
            .geometry
            .coordinates
            .into_iter()
            .map(|[lon, lat]| {
                Point::from_lon_lat(lon, lat)
                    .map_err(|e| RouteError::InvalidGeometry(e.to_string()))
            })
            .collect()
    }
}

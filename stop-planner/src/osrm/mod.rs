//! OSRM (Open Source Routing Machine) route client.
//!
//! Supplies the path the stop generator walks. Key characteristics:
//! - Coordinates travel as `lon,lat` in both the request URL and the
//!   GeoJSON response; they are normalised to `Point` on the way in
//! - `overview=full` is requested so the path keeps every geometry vertex

mod client;
mod error;
mod types;

pub use client::{OsrmClient, OsrmConfig};
pub use error::RouteError;
pub use types::{Geometry, Route, RouteResponse};

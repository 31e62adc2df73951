//! Stop planning along a driving route.
//!
//! This module implements the core algorithm: a single sequential walk
//! over route geometry that interleaves automatic rest stops (driven by
//! distance and per-jurisdiction speed limits) with stops at
//! caller-supplied waypoints.
//!
//! The walk is inherently sequential. Each step's threshold depends on
//! the speed resolved at the previous automatic stop.

mod config;
mod plan;
mod stops;


pub use config::StopConfig;
pub use plan::{PlanError, PlanRequest, PlanResult, Planner, RouteProvider};
pub use stops::generate_stops;

//! The path walk that turns route geometry into a stop list.
//!
//! Two triggers share one pass over the path:
//! - an automatic "Highway Stop" once the distance driven since the last
//!   stop reaches one hour at the current speed limit
//! - a user stop whenever the path passes the next caller waypoint
//!
//! Both are checked against the *start* of each segment, automatic first.

use tracing::debug;

use crate::distance::haversine_miles;
use crate::domain::{Point, Stop};
use crate::speed::SpeedResolver;

use super::config::StopConfig;

/// Walk `path` and emit stops in travel order.
///
/// `waypoints` must be in visiting order. Matching only ever compares the
/// *next* unvisited waypoint; if it has not been reached yet, later
/// waypoints are not considered either, even if the path passes them.
/// A waypoint the path never comes within tolerance of is left out.
///
/// The speed limit is resolved at each automatic stop and applies to the
/// threshold for the stop after it; the segment that triggered the stop
/// was measured against the previous speed.
///
/// Paths with fewer than two points yield no stops. The walk has no side
/// effects beyond speed lookups, so the future can be dropped at any
/// point.
pub async fn generate_stops<S: SpeedResolver>(
    path: &[Point],
    waypoints: &[Point],
    resolver: &S,
    config: &StopConfig,
) -> Vec<Stop> {
    let mut stops = Vec::new();
    let mut miles_traveled = 0.0;
    let mut current_speed = config.initial_speed_mph;
    let mut user_index = 0;

    for segment in path.windows(2) {
        let (prev, cur) = (segment[0], segment[1]);
        miles_traveled += haversine_miles(prev, cur);

        if miles_traveled >= current_speed {
            current_speed = resolver.speed_limit_at(prev).await;
            debug!(at = %prev, miles_traveled, next_speed = current_speed, "highway stop");
            stops.push(Stop::highway(prev));
            miles_traveled = 0.0;
        }

        while let Some(&waypoint) = waypoints.get(user_index) {
            if !waypoint.within_box(&prev, config.match_tolerance_deg) {
                break;
            }
            debug!(at = %waypoint, index = user_index, "user stop");
            stops.push(Stop::user(waypoint));
            user_index += 1;
            miles_traveled = 0.0;
        }
    }

    stops
}

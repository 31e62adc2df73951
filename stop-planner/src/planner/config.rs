//! Stop generation configuration.

/// Configuration parameters for the stop generator.
#[derive(Debug, Clone)]
pub struct StopConfig {
    /// Speed (mph) assumed before the first automatic stop resolves a
    /// jurisdiction. The first stop fires after this many miles.
    pub initial_speed_mph: f64,

    /// Per-axis tolerance (degrees) for matching a user waypoint to a
    /// path point.
    pub match_tolerance_deg: f64,
}

impl StopConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(initial_speed_mph: f64, match_tolerance_deg: f64) -> Self {
        Self {
            initial_speed_mph,
            match_tolerance_deg,
        }
    }
}

impl Default for StopConfig {
    fn default() -> Self {
        Self {
            initial_speed_mph: 60.0,
            match_tolerance_deg: 0.05,
        }
    }
}

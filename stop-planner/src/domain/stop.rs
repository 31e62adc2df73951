//! Planned stop records.

use std::fmt;

use super::point::{Point, format_coord};

/// Why a stop was inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopKind {
    /// Inserted after an hour of driving at the assumed speed.
    Highway,
    /// Inserted because the route passed a caller-supplied waypoint.
    User,
}

impl StopKind {
    /// Duration column text.
    pub fn duration(&self) -> &'static str {
        match self {
            StopKind::Highway => "1:00",
            StopKind::User => "User Stop",
        }
    }

    /// Location column text.
    pub fn location(&self) -> &'static str {
        match self {
            StopKind::Highway => "Highway Stop",
            StopKind::User => "User Provided Stop",
        }
    }

    /// Fuel availability column text.
    pub fn fuel(&self) -> &'static str {
        match self {
            StopKind::Highway => "Not Available",
            StopKind::User => "Available",
        }
    }
}

impl fmt::Display for StopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.location())
    }
}

/// A stop on the planned route.
///
/// Coordinates are rounded to two decimal digits when the stop is created
/// and kept as text from then on, so every rendering of the same stop
/// agrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    kind: StopKind,
    lat: String,
    lon: String,
}

impl Stop {
    /// Create a stop of the given kind at a point.
    pub fn new(kind: StopKind, at: Point) -> Self {
        Self {
            kind,
            lat: format_coord(at.lat()),
            lon: format_coord(at.lon()),
        }
    }

    /// An automatic rest stop.
    pub fn highway(at: Point) -> Self {
        Self::new(StopKind::Highway, at)
    }

    /// A stop at a user waypoint.
    pub fn user(at: Point) -> Self {
        Self::new(StopKind::User, at)
    }

    pub fn kind(&self) -> StopKind {
        self.kind
    }

    /// Latitude, two decimal digits.
    pub fn lat(&self) -> &str {
        &self.lat
    }

    /// Longitude, two decimal digits.
    pub fn lon(&self) -> &str {
        &self.lon
    }

    pub fn duration(&self) -> &'static str {
        self.kind.duration()
    }

    pub fn location(&self) -> &'static str {
        self.kind.location()
    }

    pub fn fuel(&self) -> &'static str {
        self.kind.fuel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highway_stop_labels() {
        let stop = Stop::highway(Point::new(35.1234, -101.8765).unwrap());
        assert_eq!(stop.kind(), StopKind::Highway);
        assert_eq!(stop.lat(), "35.12");
        assert_eq!(stop.lon(), "-101.88");
        assert_eq!(stop.duration(), "1:00");
        assert_eq!(stop.location(), "Highway Stop");
        assert_eq!(stop.fuel(), "Not Available");
    }

    #[test]
    fn user_stop_labels() {
        let stop = Stop::user(Point::new(0.005, 0.0).unwrap());
        assert_eq!(stop.kind(), StopKind::User);
        assert_eq!(stop.lat(), "0.01");
        assert_eq!(stop.lon(), "0.00");
        assert_eq!(stop.duration(), "User Stop");
        assert_eq!(stop.location(), "User Provided Stop");
        assert_eq!(stop.fuel(), "Available");
    }

    #[test]
    fn coordinates_round_halves_up_and_drop_negative_zero() {
        let stop = Stop::highway(Point::new(35.125, -97.375).unwrap());
        assert_eq!(stop.lat(), "35.13");
        assert_eq!(stop.lon(), "-97.38");

        let stop = Stop::user(Point::parse("-0,-0").unwrap());
        assert_eq!(stop.lat(), "0.00");
        assert_eq!(stop.lon(), "0.00");
    }

    #[test]
    fn kind_display() {
        assert_eq!(StopKind::Highway.to_string(), "Highway Stop");
        assert_eq!(StopKind::User.to_string(), "User Provided Stop");
    }
}

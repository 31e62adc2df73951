//! Great-circle distance between points.

use crate::domain::Point;

/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Haversine distance between two points, in miles.
pub fn haversine_miles(a: Point, b: Point) -> f64 {
    let lat1 = a.lat().to_radians();
    let lat2 = b.lat().to_radians();
    let dlat = (b.lat() - a.lat()).to_radians();
    let dlon = (b.lon() - a.lon()).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_MILES * c
}

/// Total length of a path in miles, summed segment by segment.
pub fn path_miles(path: &[Point]) -> f64 {
    path.windows(2)
        .map(|pair| haversine_miles(pair[0], pair[1]))
        .sum()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn point() -> impl Strategy<Value = Point> {
        (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| Point::new(lat, lon).unwrap())
    }

    proptest! {
        /// Distance does not depend on direction
        #[test]
        fn symmetric(a in point(), b in point()) {
            let ab = haversine_miles(a, b);
            let ba = haversine_miles(b, a);
            prop_assert!((ab - ba).abs() < 1e-6);
        }

        /// Distance is never negative and never exceeds half the circumference
        #[test]
        fn bounded(a in point(), b in point()) {
            let d = haversine_miles(a, b);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_MILES + 1e-6);
        }
    }
}

//! Geographic point type.

use std::fmt;

/// Error returned when a coordinate pair is malformed or out of range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate {input:?}: {reason}")]
pub struct InvalidPoint {
    input: String,
    reason: &'static str,
}

impl InvalidPoint {
    fn new(input: impl Into<String>, reason: &'static str) -> Self {
        Self {
            input: input.into(),
            reason,
        }
    }

    /// The text (or formatted values) that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A (latitude, longitude) pair in degrees.
///
/// Latitude is always within `[-90, 90]` and longitude within `[-180, 180]`,
/// and both are finite. This type guarantees that by construction, so
/// distance calculations on `Point`s never see NaN input.
///
/// # Examples
///
/// ```
/// use stop_planner::domain::Point;
///
/// let p = Point::parse("51.5, -0.12").unwrap();
/// assert_eq!(p.lat(), 51.5);
/// assert_eq!(p.lon(), -0.12);
///
/// // Out of range latitude is rejected
/// assert!(Point::new(91.0, 0.0).is_err());
///
/// // Missing longitude is rejected
/// assert!(Point::parse("51.5").is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Point {
    lat: f64,
    lon: f64,
}

impl Point {
    /// Create a point from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Result<Self, InvalidPoint> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(InvalidPoint::new(
                format!("{lat},{lon}"),
                "coordinates must be finite numbers",
            ));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidPoint::new(
                format!("{lat},{lon}"),
                "latitude must be between -90 and 90",
            ));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(InvalidPoint::new(
                format!("{lat},{lon}"),
                "longitude must be between -180 and 180",
            ));
        }
        Ok(Self { lat, lon })
    }

    /// Create a point from a `[lon, lat]` pair, the GeoJSON axis order.
    pub fn from_lon_lat(lon: f64, lat: f64) -> Result<Self, InvalidPoint> {
        Self::new(lat, lon)
    }

    /// Parse a point from `"lat,lon"` text. Whitespace around either
    /// number is ignored.
    pub fn parse(s: &str) -> Result<Self, InvalidPoint> {
        let mut parts = s.split(',');
        let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(InvalidPoint::new(s, "expected exactly two comma-separated numbers"));
        };

        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| InvalidPoint::new(s, "latitude is not a number"))?;
        let lon: f64 = lon
            .trim()
            .parse()
            .map_err(|_| InvalidPoint::new(s, "longitude is not a number"))?;

        Self::new(lat, lon).map_err(|e| InvalidPoint::new(s, e.reason))
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Whether `other` lies within `tolerance` degrees of this point on
    /// both axes independently (a bounding box, not a radius).
    pub fn within_box(&self, other: &Point, tolerance: f64) -> bool {
        (self.lat - other.lat).abs() < tolerance && (self.lon - other.lon).abs() < tolerance
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.lat, self.lon)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Format a coordinate to exactly two decimal digits.
///
/// Rounds half away from zero on the exact binary value, the way browsers
/// format numbers with `toFixed(2)`: `35.125` is `"35.13"`, while `1.005`
/// (stored as `1.00499...`) is `"1.00"`. Negative zero prints as `"0.00"`.
pub fn format_coord(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value:.2}");
    }

    // 64 places hold the exact expansion of anything >= 2^-8; smaller
    // magnitudes cannot reach the third decimal.
    let exact = format!("{:.64}", value.abs());
    let Some((whole, frac)) = exact.split_once('.') else {
        return format!("{value:.2}");
    };
    let frac = frac.as_bytes();

    let mut digits: Vec<u8> = whole.bytes().chain(frac[..2].iter().copied()).collect();
    if frac[2] >= b'5' {
        round_up(&mut digits);
    }

    let (whole, cents) = digits.split_at(digits.len() - 2);
    let sign = if value < 0.0 { "-" } else { "" };
    format!(
        "{sign}{}.{}",
        String::from_utf8_lossy(whole),
        String::from_utf8_lossy(cents)
    )
}

/// Add one to a string of ASCII decimal digits.
fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_points() {
        let p = Point::parse("40.7128,-74.0060").unwrap();
        assert_eq!(p.lat(), 40.7128);
        assert_eq!(p.lon(), -74.006);

        let p = Point::parse(" 0 , 0 ").unwrap();
        assert_eq!(p.lat(), 0.0);
        assert_eq!(p.lon(), 0.0);

        assert!(Point::parse("90,180").is_ok());
        assert!(Point::parse("-90,-180").is_ok());
    }

    #[test]
    fn reject_malformed_text() {
        assert!(Point::parse("").is_err());
        assert!(Point::parse("40.7").is_err());
        assert!(Point::parse("40.7,").is_err());
        assert!(Point::parse("40.7,-74.0,12").is_err());
        assert!(Point::parse("north,west").is_err());
        assert!(Point::parse("NaN,0").is_err());
        assert!(Point::parse("inf,0").is_err());
    }

    #[test]
    fn reject_out_of_range() {
        assert!(Point::new(90.1, 0.0).is_err());
        assert!(Point::new(-90.1, 0.0).is_err());
        assert!(Point::new(0.0, 180.5).is_err());
        assert!(Point::new(0.0, -180.5).is_err());
    }

    #[test]
    fn error_keeps_original_input() {
        let err = Point::parse("95,10").unwrap_err();
        assert_eq!(err.input(), "95,10");
        assert_eq!(
            err.to_string(),
            "invalid coordinate \"95,10\": latitude must be between -90 and 90"
        );
    }

    #[test]
    fn from_lon_lat_swaps_axes() {
        let p = Point::from_lon_lat(-74.0, 40.0).unwrap();
        assert_eq!(p.lat(), 40.0);
        assert_eq!(p.lon(), -74.0);
    }

    #[test]
    fn within_box_is_per_axis_and_strict() {
        let origin = Point::new(0.0, 0.0).unwrap();
        assert!(origin.within_box(&Point::new(0.04, 0.04).unwrap(), 0.05));
        assert!(!origin.within_box(&Point::new(0.04, 0.06).unwrap(), 0.05));
        assert!(!origin.within_box(&Point::new(0.06, 0.0).unwrap(), 0.05));
        assert!(!origin.within_box(&Point::new(0.0, 0.05).unwrap(), 0.05));
    }

    #[test]
    fn format_two_decimals() {
        assert_eq!(format_coord(0.0), "0.00");
        assert_eq!(format_coord(1.0), "1.00");
        assert_eq!(format_coord(40.7128), "40.71");
        assert_eq!(format_coord(-74.006), "-74.01");
        assert_eq!(format_coord(0.005), "0.01");
    }

    #[test]
    fn format_coord_rounds_exact_halves_away_from_zero() {
        // Exactly representable in binary, so these are true ties
        assert_eq!(format_coord(35.125), "35.13");
        assert_eq!(format_coord(-97.375), "-97.38");
        assert_eq!(format_coord(0.625), "0.63");
        assert_eq!(format_coord(-0.875), "-0.88");

        // Stored just below the half, so they round down
        assert_eq!(format_coord(1.005), "1.00");
        assert_eq!(format_coord(-2.675), "-2.67");

        assert_eq!(format_coord(9.999), "10.00");
        assert_eq!(format_coord(-179.999), "-180.00");
    }

    #[test]
    fn format_coord_drops_sign_of_negative_zero() {
        assert_eq!(format_coord(-0.0), "0.00");

        let p = Point::parse("-0,-0").unwrap();
        assert_eq!(format_coord(p.lat()), "0.00");
        assert_eq!(format_coord(p.lon()), "0.00");

        // A negative value that rounds to zero keeps its sign
        assert_eq!(format_coord(-0.001), "-0.00");
    }

    #[test]
    fn display_matches_parse_order() {
        let p = Point::new(12.5, -3.25).unwrap();
        assert_eq!(p.to_string(), "12.5,-3.25");
        assert_eq!(format!("{:?}", p), "Point(12.5, -3.25)");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any in-range pair constructs and survives formatting then parsing
        #[test]
        fn in_range_always_parses(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            let p = Point::new(lat, lon).unwrap();
            let reparsed = Point::parse(&p.to_string()).unwrap();
            prop_assert_eq!(reparsed, p);
        }

        /// Latitudes beyond the poles are always rejected
        #[test]
        fn polar_overflow_rejected(lat in 90.0001f64..1000.0, lon in -180.0f64..=180.0) {
            prop_assert!(Point::new(lat, lon).is_err());
            prop_assert!(Point::new(-lat, lon).is_err());
        }

        /// Formatted coordinates are within half a hundredth of the input
        #[test]
        fn format_coord_is_nearest_hundredth(value in -180.0f64..=180.0) {
            let text = format_coord(value);
            let (_, cents) = text.split_once('.').unwrap();
            prop_assert_eq!(cents.len(), 2);

            let parsed: f64 = text.parse().unwrap();
            prop_assert!((parsed - value).abs() <= 0.005 + 1e-9);
        }
    }
}

//! Jurisdiction → speed limit table.

use std::collections::HashMap;
use std::path::Path;

/// Default speed in mph for jurisdictions missing from the table.
pub const DEFAULT_SPEED_MPH: f64 = 60.0;

/// Errors loading the speed limit table.
#[derive(Debug, thiserror::Error)]
pub enum SpeedTableError {
    /// Failed to read the table file
    #[error("failed to read speed limits from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Table file is not a JSON object of numbers
    #[error("invalid speed limit JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A limit was zero, negative or not finite
    #[error("invalid speed limit for {jurisdiction}: {mph}")]
    InvalidLimit { jurisdiction: String, mph: f64 },
}

/// Legal speed limits by jurisdiction name, in mph.
///
/// Loaded once at start-up and shared read-only. Lookups for names not in
/// the table (including the `"Unknown"` fallback jurisdiction) return the
/// table's default speed.
#[derive(Debug, Clone)]
pub struct SpeedLimitTable {
    limits: HashMap<String, f64>,
    default_mph: f64,
}

impl Default for SpeedLimitTable {
    fn default() -> Self {
        Self::new(HashMap::new())
    }
}

impl SpeedLimitTable {
    /// Create a table from a map, using the standard default speed.
    pub fn new(limits: HashMap<String, f64>) -> Self {
        Self {
            limits,
            default_mph: DEFAULT_SPEED_MPH,
        }
    }

    /// Set the speed returned for jurisdictions not in the table.
    pub fn with_default(mut self, mph: f64) -> Self {
        self.default_mph = mph;
        self
    }

    /// Parse a table from a JSON object such as `{"Texas": 75, "Ohio": 70}`.
    pub fn from_json(json: &str) -> Result<Self, SpeedTableError> {
        let limits: HashMap<String, f64> = serde_json::from_str(json)?;

        if let Some((jurisdiction, mph)) = limits
            .iter()
            .find(|(_, mph)| !mph.is_finite() || **mph <= 0.0)
        {
            return Err(SpeedTableError::InvalidLimit {
                jurisdiction: jurisdiction.clone(),
                mph: *mph,
            });
        }

        Ok(Self::new(limits))
    }

    /// Load a table from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SpeedTableError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SpeedTableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Speed limit for a jurisdiction, or the default if it is not listed.
    pub fn speed_for(&self, jurisdiction: &str) -> f64 {
        self.limits
            .get(jurisdiction)
            .copied()
            .unwrap_or(self.default_mph)
    }

    pub fn default_mph(&self) -> f64 {
        self.default_mph
    }

    /// Number of jurisdictions in the table.
    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn lookup_known_and_unknown() {
        let table = SpeedLimitTable::from_json(r#"{"Texas": 75, "Ohio": 70.0}"#).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.speed_for("Texas"), 75.0);
        assert_eq!(table.speed_for("Ohio"), 70.0);
        assert_eq!(table.speed_for("Unknown"), DEFAULT_SPEED_MPH);
        assert_eq!(table.speed_for("texas"), DEFAULT_SPEED_MPH);
    }

    #[test]
    fn custom_default() {
        let table = SpeedLimitTable::default().with_default(55.0);
        assert!(table.is_empty());
        assert_eq!(table.default_mph(), 55.0);
        assert_eq!(table.speed_for("Anywhere"), 55.0);
    }

    #[test]
    fn rejects_non_numeric_limits() {
        let err = SpeedLimitTable::from_json(r#"{"Texas": "fast"}"#).unwrap_err();
        assert!(matches!(err, SpeedTableError::Json(_)));
    }

    #[test]
    fn rejects_non_positive_limits() {
        let err = SpeedLimitTable::from_json(r#"{"Texas": 0}"#).unwrap_err();
        assert_eq!(err.to_string(), "invalid speed limit for Texas: 0");
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Nevada": 80, "Hawaii": 60}}"#).unwrap();

        let table = SpeedLimitTable::load(file.path()).unwrap();
        assert_eq!(table.speed_for("Nevada"), 80.0);
        assert_eq!(table.speed_for("Hawaii"), 60.0);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SpeedLimitTable::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, SpeedTableError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn bundled_table_parses() {
        let json = include_str!("../../data/speed_limits.json");
        let table = SpeedLimitTable::from_json(json).unwrap();
        assert_eq!(table.len(), 50);
        assert_eq!(table.speed_for("Texas"), 75.0);
    }
}

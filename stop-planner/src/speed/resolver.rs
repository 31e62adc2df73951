//! Point → speed limit resolution.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::Point;
use crate::geocode::ReverseGeocoder;

use super::table::SpeedLimitTable;

/// Jurisdiction name used when a lookup fails or times out.
pub const UNKNOWN_JURISDICTION: &str = "Unknown";

/// Default time allowed for a single jurisdiction lookup.
const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Provides the applicable speed limit at a point.
///
/// Implementations must always produce a usable speed; failures are
/// absorbed rather than returned so a flaky lookup never aborts a plan.
pub trait SpeedResolver {
    /// Speed limit in mph at `point`.
    fn speed_limit_at(&self, point: Point) -> impl Future<Output = f64> + Send;
}

/// Resolves speed limits by reverse-geocoding a point to a jurisdiction
/// and looking that up in a `SpeedLimitTable`.
pub struct JurisdictionSpeedResolver<G> {
    geocoder: G,
    table: Arc<SpeedLimitTable>,
    lookup_timeout: Duration,
}

impl<G: ReverseGeocoder + Sync> JurisdictionSpeedResolver<G> {
    /// Create a resolver with the default per-lookup timeout.
    pub fn new(geocoder: G, table: Arc<SpeedLimitTable>) -> Self {
        Self {
            geocoder,
            table,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    /// Set the time allowed for each lookup.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    /// The jurisdiction containing `point`, or `"Unknown"` if the lookup
    /// fails or does not finish within the timeout.
    pub async fn jurisdiction_at(&self, point: Point) -> String {
        match tokio::time::timeout(self.lookup_timeout, self.geocoder.reverse_geocode(point)).await
        {
            Ok(Ok(jurisdiction)) => jurisdiction,
            Ok(Err(e)) => {
                warn!(%point, error = %e, "jurisdiction lookup failed, using default speed");
                UNKNOWN_JURISDICTION.to_string()
            }
            Err(_) => {
                warn!(
                    %point,
                    timeout_ms = self.lookup_timeout.as_millis() as u64,
                    "jurisdiction lookup timed out, using default speed"
                );
                UNKNOWN_JURISDICTION.to_string()
            }
        }
    }
}

impl<G: ReverseGeocoder + Sync> SpeedResolver for JurisdictionSpeedResolver<G> {
    async fn speed_limit_at(&self, point: Point) -> f64 {
        let jurisdiction = self.jurisdiction_at(point).await;
        let mph = self.table.speed_for(&jurisdiction);
        debug!(%point, %jurisdiction, mph, "resolved speed limit");
        mph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::LookupError;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn table() -> Arc<SpeedLimitTable> {
        let mut limits = HashMap::new();
        limits.insert("Texas".to_string(), 75.0);
        limits.insert("Oklahoma".to_string(), 70.0);
        Arc::new(SpeedLimitTable::new(limits))
    }

    fn pt(lat: f64, lon: f64) -> Point {
        Point::new(lat, lon).unwrap()
    }

    /// Geocoder that always answers with the same name.
    struct FixedGeocoder(&'static str);

    impl ReverseGeocoder for FixedGeocoder {
        async fn reverse_geocode(&self, _point: Point) -> Result<String, LookupError> {
            Ok(self.0.to_string())
        }
    }

    /// Geocoder that always fails and counts its calls.
    struct FailingGeocoder {
        calls: AtomicUsize,
    }

    impl ReverseGeocoder for FailingGeocoder {
        async fn reverse_geocode(&self, _point: Point) -> Result<String, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(LookupError::Service("Unable to geocode".into()))
        }
    }

    /// Geocoder that never answers within any reasonable timeout.
    struct SlowGeocoder;

    impl ReverseGeocoder for SlowGeocoder {
        async fn reverse_geocode(&self, _point: Point) -> Result<String, LookupError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok("Texas".to_string())
        }
    }

    #[tokio::test]
    async fn known_jurisdiction_uses_table() {
        let resolver = JurisdictionSpeedResolver::new(FixedGeocoder("Texas"), table());
        assert_eq!(resolver.jurisdiction_at(pt(31.0, -97.0)).await, "Texas");
        assert_eq!(resolver.speed_limit_at(pt(31.0, -97.0)).await, 75.0);
    }

    #[tokio::test]
    async fn unlisted_jurisdiction_uses_default() {
        let resolver = JurisdictionSpeedResolver::new(FixedGeocoder("Ontario"), table());
        assert_eq!(resolver.speed_limit_at(pt(45.0, -79.0)).await, 60.0);
    }

    #[tokio::test]
    async fn lookup_failure_becomes_unknown() {
        let geocoder = FailingGeocoder {
            calls: AtomicUsize::new(0),
        };
        let resolver = JurisdictionSpeedResolver::new(geocoder, table());

        assert_eq!(
            resolver.jurisdiction_at(pt(0.0, 0.0)).await,
            UNKNOWN_JURISDICTION
        );
        assert_eq!(resolver.speed_limit_at(pt(0.0, 0.0)).await, 60.0);
        assert_eq!(resolver.geocoder.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn lookup_timeout_becomes_unknown() {
        let resolver = JurisdictionSpeedResolver::new(SlowGeocoder, table())
            .with_timeout(Duration::from_millis(20));

        assert_eq!(
            resolver.jurisdiction_at(pt(31.0, -97.0)).await,
            UNKNOWN_JURISDICTION
        );
        assert_eq!(resolver.speed_limit_at(pt(31.0, -97.0)).await, 60.0);
    }

    #[tokio::test]
    async fn unknown_follows_table_default() {
        let table = Arc::new(SpeedLimitTable::default().with_default(55.0));
        let resolver = JurisdictionSpeedResolver::new(
            FailingGeocoder {
                calls: AtomicUsize::new(0),
            },
            table,
        );
        assert_eq!(resolver.speed_limit_at(pt(0.0, 0.0)).await, 55.0);
    }
}

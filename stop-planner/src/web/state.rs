//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedGeocoder;
use crate::geocode::NominatimClient;
use crate::osrm::OsrmClient;
use crate::planner::StopConfig;
use crate::speed::JurisdictionSpeedResolver;

/// Speed resolver used in production: cached Nominatim lookups.
pub type SpeedLookup = JurisdictionSpeedResolver<CachedGeocoder<NominatimClient>>;

/// Shared application state.
///
/// Everything here is read-only or internally synchronised; each request
/// runs its own walk.
#[derive(Clone)]
pub struct AppState {
    /// OSRM route client
    pub routes: Arc<OsrmClient>,

    /// Jurisdiction speed resolver
    pub speeds: Arc<SpeedLookup>,

    /// Stop generator configuration
    pub config: Arc<StopConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(routes: OsrmClient, speeds: SpeedLookup, config: StopConfig) -> Self {
        Self {
            routes: Arc::new(routes),
            speeds: Arc::new(speeds),
            config: Arc::new(config),
        }
    }
}

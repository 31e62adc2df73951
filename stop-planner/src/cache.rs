//! Caching layer for reverse-geocoding lookups.
//!
//! Long routes trigger a lookup at every automatic stop, and repeated
//! plans along the same corridor ask about the same places. Points are
//! bucketed to a fixed grid (0.01° by default, the precision stops are
//! reported at) to bound cache cardinality.
//!
//! Only successful lookups are cached, so a transient failure is retried
//! on the next request.

use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::Point;
use crate::geocode::{LookupError, ReverseGeocoder};

/// Cache key: point scaled by the grid resolution and rounded.
type GridKey = (i32, i32);

/// Configuration for the geocode cache.
#[derive(Debug, Clone)]
pub struct GeocodeCacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,

    /// Grid cells per degree.
    pub cells_per_degree: f64,
}

impl Default for GeocodeCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(24 * 60 * 60),
            max_capacity: 10_000,
            cells_per_degree: 100.0,
        }
    }
}

/// Reverse geocoder with caching.
///
/// Wraps any `ReverseGeocoder` and memoises jurisdiction names by grid cell.
pub struct CachedGeocoder<G> {
    inner: G,
    cache: MokaCache<GridKey, String>,
    cells_per_degree: f64,
}

impl<G> CachedGeocoder<G> {
    /// Create a new cached geocoder.
    pub fn new(inner: G, config: &GeocodeCacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            inner,
            cache,
            cells_per_degree: config.cells_per_degree,
        }
    }

    /// Grid cell containing a point.
    fn grid_key(&self, point: Point) -> GridKey {
        (
            (point.lat() * self.cells_per_degree).round() as i32,
            (point.lon() * self.cells_per_degree).round() as i32,
        )
    }

    /// Access the wrapped geocoder.
    pub fn inner(&self) -> &G {
        &self.inner
    }

    /// Get cache statistics (for monitoring).
    ///
    /// Moka applies pending writes lazily, so the count can lag briefly.
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

impl<G: ReverseGeocoder + Sync> ReverseGeocoder for CachedGeocoder<G> {
    async fn reverse_geocode(&self, point: Point) -> Result<String, LookupError> {
        let key = self.grid_key(point);

        if let Some(cached) = self.cache.get(&key).await {
            return Ok(cached);
        }

        let jurisdiction = self.inner.reverse_geocode(point).await?;
        self.cache.insert(key, jurisdiction.clone()).await;

        Ok(jurisdiction)
    }
}

//! Reverse geocoding: point → jurisdiction name.
//!
//! The production implementation calls Nominatim. Lookups are the most
//! failure-prone boundary in the planner, so callers go through
//! `speed::JurisdictionSpeedResolver`, which bounds each call with a
//! timeout and treats every failure as an unknown jurisdiction.

use std::future::Future;

use crate::domain::Point;

mod client;
mod error;
mod types;

pub use client::{NominatimClient, NominatimConfig};
pub use error::LookupError;
pub use types::{Address, ReverseResponse};

/// Resolves a point to the name of the jurisdiction containing it.
///
/// This abstraction allows the speed resolver to be tested without
/// network access.
pub trait ReverseGeocoder {
    /// Name of the state/province containing `point`.
    fn reverse_geocode(
        &self,
        point: Point,
    ) -> impl Future<Output = Result<String, LookupError>> + Send;
}

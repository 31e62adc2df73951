//! Jurisdiction speed limits.
//!
//! A static table of legal speed limits, loaded once at start-up, and the
//! resolver that maps a point to the limit that applies there.

mod resolver;
mod table;

pub use resolver::{JurisdictionSpeedResolver, SpeedResolver, UNKNOWN_JURISDICTION};
pub use table::{DEFAULT_SPEED_MPH, SpeedLimitTable, SpeedTableError};

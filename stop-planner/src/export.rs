//! Spreadsheet export of planned stops.
//!
//! Stops render to CSV in memory and are streamed to the client as an
//! attachment. Nothing is written to disk.

use chrono::{DateTime, Utc};

use crate::domain::Stop;

/// Column headers, in output order.
pub const HEADERS: [&str; 5] = [
    "Duration (HH:MM)",
    "Latitude",
    "Longitude",
    "Location",
    "Fuel Available",
];

/// Errors rendering an export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush CSV output: {0}")]
    Flush(String),
}

/// Render stops as CSV with a header row.
pub fn stops_to_csv(stops: &[Stop]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADERS)?;

    for stop in stops {
        writer.write_record([
            stop.duration(),
            stop.lat(),
            stop.lon(),
            stop.location(),
            stop.fuel(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.error().to_string()))
}

/// Download filename for an export created at `now`.
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("route_stops_{}.csv", now.format("%Y%m%d%H%M%S"))
}

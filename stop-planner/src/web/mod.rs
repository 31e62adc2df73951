//! Web layer for the stop planner.
//!
//! Provides the HTTP endpoint that plans stops and delivers them as a
//! spreadsheet download, JSON, or an HTML table.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, SpeedLookup};
pub use templates::*;

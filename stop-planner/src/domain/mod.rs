//! Domain types for the stop planner.
//!
//! Points are validated when they are built, so code receiving a `Point`
//! can rely on finite, in-range coordinates.

mod point;
mod stop;

pub use point::{InvalidPoint, Point, format_coord};
pub use stop::{Stop, StopKind};

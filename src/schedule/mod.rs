//! Appointment projections: per-date grouping, calendar cell summaries,
//! the month grid, and double-booking detection.
//!
//! Every function here is pure over a borrowed slice and preserves the
//! store's insertion order within each group.

mod calendar;
mod conflicts;
mod grouping;
mod types;

pub use calendar::*;
pub use conflicts::*;
pub use grouping::*;
pub use types::*;

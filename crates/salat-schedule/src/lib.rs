//! Prayer window engine: which prayer "now" falls in, which comes next,
//! how long until it, and how far through the window we are.
//!
//! The engine is stateless. Callers re-evaluate on their own cadence with
//! the full day's list and the query instant.

pub mod engine;
pub mod snapshot;

pub use engine::{current_prayer, ms_until_next, next_prayer, progress, PRE_FAJR_WINDOW_MS};
pub use snapshot::{ScheduleExt, ScheduleSnapshot};

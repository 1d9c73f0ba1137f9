//! # Salat
//!
//! Scheduling core for a prayer-times display: resolves a day's prayer
//! times to absolute instants, tracks the current and next prayer, counts
//! down to the next one, and blends an ambient gradient across the day.
//!
//! This crate is a facade that re-exports functionality from the `salat` ecosystem.
//!
//! ## Modules
//!
//! - `types`: Core types (PrayerName, PrayerPeriod, DailyPrayerTimes, etc.)
//! - `time`: Local time resolution, staleness and display formatting
//! - `schedule`: Current/next prayer, countdown and progress
//! - `gradient`: Period palettes and interpolation
//!
//! ## Usage
//!
//! ```rust
//! use salat::prelude::*;
//!
//! let instant = resolve_instant("15:30 (EET)", chrono::Utc::now(), "Africa/Cairo");
//! assert!(instant.is_ok());
//!
//! let table = StaticTimetable::new("Asia/Jakarta", ["04:37", "05:49", "11:58", "15:04", "18:02", "19:10"]);
//! let loc = Location::new(-6.2088, 106.8456).unwrap();
//! let daily = table.fetch(&TimesRequest::new(loc, chrono::Utc::now())).unwrap();
//! let state = CountdownState::evaluate(Some(&daily), chrono::Utc::now().timestamp_millis());
//! assert!(state.progress_percent <= 100);
//! ```

pub use salat_core::*;

//! Core types shared across the salat crates.

pub mod config;
pub mod daily;
pub mod date;
pub mod error;
pub mod location;
pub mod period;
pub mod prayer;

pub use config::{AsrSchool, CalculationMethod, HijriAdjustment, Language, Theme, TimeFormat};
pub use daily::DailyPrayerTimes;
pub use date::{GregorianDate, HijriDate, MonthName, WeekdayName};
pub use error::SalatError;
pub use location::Location;
pub use period::{next_period, to_period, PrayerPeriod};
pub use prayer::{PrayerName, PrayerTime};

/// Milliseconds since the Unix epoch.
pub type EpochMillis = i64;

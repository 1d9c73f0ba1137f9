//! Where a day's prayer times come from.
//!
//! The engine never computes prayer times itself. A [`PrayerTimeSource`]
//! turns a location plus configuration into a resolved
//! [`DailyPrayerTimes`]; retries and transport are the implementor's concern.

use chrono::{DateTime, Utc};
use salat_time::resolve_daily;
use salat_types::{
    AsrSchool, CalculationMethod, DailyPrayerTimes, HijriAdjustment, Location, PrayerName,
    SalatError,
};

use crate::settings::Settings;

/// Everything a source needs to produce one day's times.
#[derive(Debug, Clone, PartialEq)]
pub struct TimesRequest {
    pub location: Location,
    pub method: CalculationMethod,
    pub school: AsrSchool,
    pub adjustment: HijriAdjustment,
    /// Any instant on the wanted day; its date is taken in the location's zone.
    pub date: DateTime<Utc>,
}

impl TimesRequest {
    pub fn new(location: Location, date: DateTime<Utc>) -> Self {
        Self {
            location,
            method: CalculationMethod::default(),
            school: AsrSchool::default(),
            adjustment: HijriAdjustment::default(),
            date,
        }
    }

    /// # Errors
    /// `InvalidConfiguration` if no location has been chosen yet.
    pub fn from_settings(settings: &Settings, date: DateTime<Utc>) -> Result<Self, SalatError> {
        let location = settings
            .location
            .clone()
            .ok_or_else(|| SalatError::invalid_config("No location configured"))?;
        Ok(Self {
            location,
            method: settings.method,
            school: settings.school,
            adjustment: settings.hijri_adjustment,
            date,
        })
    }
}

/// Supplier of resolved daily prayer times.
pub trait PrayerTimeSource: std::fmt::Debug + Send + Sync {
    fn fetch(&self, request: &TimesRequest) -> Result<DailyPrayerTimes, SalatError>;
}

/// Fixed local times in a fixed zone, resolved onto whichever day is requested.
///
/// Handy for tests, demos and offline fallbacks. The request date doubles
/// as the retrieval time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticTimetable {
    timezone: String,
    timings: [String; 6],
}

impl StaticTimetable {
    /// `timings` are raw `HH:MM` strings in Fajr..Isha order.
    pub fn new(timezone: impl Into<String>, timings: [&str; 6]) -> Self {
        Self {
            timezone: timezone.into(),
            timings: timings.map(str::to_string),
        }
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }
}

impl PrayerTimeSource for StaticTimetable {
    fn fetch(&self, request: &TimesRequest) -> Result<DailyPrayerTimes, SalatError> {
        resolve_daily(
            PrayerName::ALL.into_iter().zip(self.timings.iter()),
            request.date,
            &self.timezone,
            request.date,
        )
    }
}

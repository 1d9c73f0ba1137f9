pub mod aladhan;
pub mod ambient;
pub mod clock;
pub mod countdown;
pub mod region;
pub mod settings;
pub mod source;

pub use salat_gradient as gradient;
pub use salat_schedule as schedule;
pub use salat_time as time;
pub use salat_types as types;

pub use ambient::{ambient_from_snapshot, ambient_palette, GRADIENT_TICK};
pub use clock::PrayerClock;
pub use countdown::{CountdownState, COUNTDOWN_TICK};
pub use region::suggest_method;
pub use settings::{Settings, SettingsBuilder};
pub use source::{PrayerTimeSource, StaticTimetable, TimesRequest};

pub use salat_gradient::{interpolate, reference_palette, GradientPalette, Rgb};
pub use salat_schedule::{current_prayer, next_prayer, ms_until_next, progress, ScheduleExt, ScheduleSnapshot};
pub use salat_time::{
    format_gregorian_date, format_hijri_date, format_prayer_time, resolve_daily, resolve_instant,
    StalenessExt,
};
pub use salat_types::{
    next_period, to_period, AsrSchool, CalculationMethod, DailyPrayerTimes, EpochMillis,
    GregorianDate, HijriAdjustment, HijriDate, Language, Location, PrayerName, PrayerPeriod,
    PrayerTime, SalatError, Theme, TimeFormat,
};

pub mod prelude {
    pub use crate::types::*;
    pub use crate::{ambient_palette, interpolate, resolve_instant, suggest_method};
    pub use crate::{CountdownState, PrayerClock, PrayerTimeSource, ScheduleExt, ScheduleSnapshot};
    pub use crate::{Settings, SettingsBuilder, StalenessExt, StaticTimetable, TimesRequest};
}

use chrono::Utc;

/// Countdown against the system clock.
pub fn countdown_now(daily: Option<&DailyPrayerTimes>) -> CountdownState {
    CountdownState::evaluate(daily, Utc::now().timestamp_millis())
}

/// Ambient palette against the system clock.
pub fn ambient_now(daily: Option<&DailyPrayerTimes>, theme: Theme) -> GradientPalette {
    ambient_palette(daily, Utc::now().timestamp_millis(), theme)
}

use salat_types::{DailyPrayerTimes, EpochMillis, PrayerName, PrayerPeriod, PrayerTime};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::engine::{current_prayer, ms_until_next, next_prayer, progress};

/// The schedule engine's answer for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSnapshot {
    pub current: Option<PrayerName>,
    pub next: Option<PrayerName>,
    pub ms_remaining: u64,
    /// Fraction of the current window elapsed, `[0, 1]`.
    pub progress: f64,
}

impl ScheduleSnapshot {
    /// Runs the four engine steps against `now`.
    pub fn evaluate(prayers: &[PrayerTime], now: EpochMillis) -> Self {
        let current = current_prayer(prayers, now);
        let next = next_prayer(prayers, current);
        let snapshot = Self {
            current,
            next,
            ms_remaining: ms_until_next(prayers, next, now),
            progress: progress(prayers, current, next, now),
        };
        trace!(?snapshot, now, "evaluated schedule");
        snapshot
    }

    /// Evaluates optional schedule data. Without data there is no current
    /// or next prayer and the snapshot is [`ScheduleSnapshot::default`].
    pub fn evaluate_daily(daily: Option<&DailyPrayerTimes>, now: EpochMillis) -> Self {
        daily.map_or_else(Self::default, |d| Self::evaluate(d.prayers(), now))
    }

    /// Progress scaled to a whole percentage, 0–100.
    pub fn progress_percent(&self) -> u8 {
        (self.progress.clamp(0.0, 1.0) * 100.0).round() as u8
    }

    pub fn current_period(&self) -> PrayerPeriod {
        PrayerPeriod::from(self.current)
    }

    /// True once every prayer of the day has passed.
    pub fn is_day_complete(&self) -> bool {
        self.current.is_some() && self.next.is_none()
    }
}

/// Engine queries directly on a [`DailyPrayerTimes`].
pub trait ScheduleExt {
    fn current_prayer(&self, now: EpochMillis) -> Option<PrayerName>;
    fn next_prayer(&self, now: EpochMillis) -> Option<PrayerName>;
    fn snapshot(&self, now: EpochMillis) -> ScheduleSnapshot;
}

impl ScheduleExt for DailyPrayerTimes {
    fn current_prayer(&self, now: EpochMillis) -> Option<PrayerName> {
        current_prayer(self.prayers(), now)
    }

    fn next_prayer(&self, now: EpochMillis) -> Option<PrayerName> {
        next_prayer(self.prayers(), current_prayer(self.prayers(), now))
    }

    fn snapshot(&self, now: EpochMillis) -> ScheduleSnapshot {
        ScheduleSnapshot::evaluate(self.prayers(), now)
    }
}

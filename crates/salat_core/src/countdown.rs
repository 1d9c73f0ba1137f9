use std::time::Duration;

use salat_schedule::ScheduleSnapshot;
use salat_time::CountdownParts;
use salat_types::{DailyPrayerTimes, EpochMillis, PrayerName};
use serde::{Deserialize, Serialize};

/// How often a display should re-evaluate the countdown.
pub const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

/// What a countdown display shows at one tick.
///
/// The default value is the "no data yet" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountdownState {
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
    pub total_seconds: u64,
    pub next_prayer: Option<PrayerName>,
    pub current_prayer: Option<PrayerName>,
    pub progress_percent: u8,
}

impl CountdownState {
    pub fn from_snapshot(snapshot: &ScheduleSnapshot) -> Self {
        let parts = CountdownParts::from_millis(snapshot.ms_remaining);
        Self {
            hours: parts.hours,
            minutes: parts.minutes,
            seconds: parts.seconds,
            total_seconds: parts.total_seconds(),
            next_prayer: snapshot.next,
            current_prayer: snapshot.current,
            progress_percent: snapshot.progress_percent(),
        }
    }

    pub fn evaluate(daily: Option<&DailyPrayerTimes>, now: EpochMillis) -> Self {
        Self::from_snapshot(&ScheduleSnapshot::evaluate_daily(daily, now))
    }

    pub fn parts(&self) -> CountdownParts {
        CountdownParts::from_seconds(self.total_seconds)
    }
}

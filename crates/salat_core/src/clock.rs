use chrono::{DateTime, TimeZone, Utc};
use salat_gradient::GradientPalette;
use salat_schedule::ScheduleSnapshot;
use salat_time::{next_refresh_at, StalenessExt};
use salat_types::{DailyPrayerTimes, EpochMillis, SalatError, Theme};
use tracing::{debug, warn};

use crate::ambient::ambient_palette;
use crate::countdown::CountdownState;
use crate::source::{PrayerTimeSource, TimesRequest};

/// Holds the latest day of prayer times and answers the per-tick queries
/// a display needs.
///
/// Cheap to query; all evaluation happens on demand against the held data.
#[derive(Debug, Clone, Default)]
pub struct PrayerClock {
    daily: Option<DailyPrayerTimes>,
    theme: Theme,
}

impl PrayerClock {
    pub fn new(theme: Theme) -> Self {
        Self { daily: None, theme }
    }

    pub fn with_daily(daily: DailyPrayerTimes, theme: Theme) -> Self {
        Self { daily: Some(daily), theme }
    }

    pub fn daily(&self) -> Option<&DailyPrayerTimes> {
        self.daily.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Swaps in new data, returning what was held before.
    pub fn replace(&mut self, daily: DailyPrayerTimes) -> Option<DailyPrayerTimes> {
        if !daily.is_well_ordered() {
            warn!(timezone = %daily.timezone, "holding out-of-order schedule");
        }
        self.daily.replace(daily)
    }

    pub fn clear(&mut self) {
        self.daily = None;
    }

    /// Fetches from `source` and holds the result. On error the previous
    /// data is kept.
    pub fn refresh(
        &mut self,
        source: &dyn PrayerTimeSource,
        request: &TimesRequest,
    ) -> Result<(), SalatError> {
        let daily = source.fetch(request)?;
        debug!(timezone = %daily.timezone, "schedule refreshed");
        self.replace(daily);
        Ok(())
    }

    pub fn snapshot(&self, now: EpochMillis) -> ScheduleSnapshot {
        ScheduleSnapshot::evaluate_daily(self.daily.as_ref(), now)
    }

    pub fn countdown(&self, now: EpochMillis) -> CountdownState {
        CountdownState::from_snapshot(&self.snapshot(now))
    }

    pub fn ambient(&self, now: EpochMillis) -> GradientPalette {
        ambient_palette(self.daily.as_ref(), now, self.theme)
    }

    /// True when nothing is held or the held data is from another day in `zone`.
    pub fn needs_refresh<Z: TimeZone>(&self, now: DateTime<Utc>, zone: &Z) -> bool {
        self.daily
            .as_ref()
            .is_none_or(|d| d.is_stale_in(now, zone))
    }

    /// When to fetch next: immediately if stale, otherwise just after the
    /// coming local midnight.
    pub fn refresh_at<Z: TimeZone>(&self, now: DateTime<Utc>, zone: &Z) -> DateTime<Utc> {
        if self.needs_refresh(now, zone) {
            now
        } else {
            next_refresh_at(now, zone)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticTimetable;
    use chrono::FixedOffset;
    use salat_types::{Location, PrayerName};

    fn table() -> StaticTimetable {
        StaticTimetable::new("UTC", ["05:00", "06:00", "12:00", "15:00", "18:00", "19:00"])
    }

    fn request(date: DateTime<Utc>) -> TimesRequest {
        TimesRequest::new(Location::new(51.5, -0.12).unwrap(), date)
    }

    #[test]
    fn test_empty_clock() {
        let clock = PrayerClock::new(Theme::Dark);
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        assert_eq!(clock.countdown(now.timestamp_millis()), CountdownState::default());
        assert!(clock.needs_refresh(now, &Utc));
        assert_eq!(clock.refresh_at(now, &Utc), now);
    }

    #[test]
    fn test_refresh_and_query() {
        let mut clock = PrayerClock::new(Theme::Light);
        let date = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        clock.refresh(&table(), &request(date)).unwrap();

        let now = Utc.with_ymd_and_hms(2024, 3, 15, 16, 0, 0).unwrap();
        let state = clock.countdown(now.timestamp_millis());
        assert_eq!(state.current_prayer, Some(PrayerName::Asr));
        assert_eq!(state.next_prayer, Some(PrayerName::Maghrib));
        assert_eq!(state.total_seconds, 7200);

        assert!(!clock.needs_refresh(now, &Utc));
        assert_eq!(
            clock.refresh_at(now, &Utc),
            Utc.with_ymd_and_hms(2024, 3, 16, 0, 1, 0).unwrap()
        );

        let tomorrow = Utc.with_ymd_and_hms(2024, 3, 16, 0, 30, 0).unwrap();
        assert!(clock.needs_refresh(tomorrow, &Utc));
        // Still the previous day in UTC-05:00.
        let ny = FixedOffset::west_opt(5 * 3600).unwrap();
        assert!(!clock.needs_refresh(tomorrow, &ny));
    }

    #[test]
    fn test_failed_refresh_keeps_data() {
        let mut clock = PrayerClock::new(Theme::Dark);
        let date = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        clock.refresh(&table(), &request(date)).unwrap();

        let broken = StaticTimetable::new("Mars/Olympus", ["05:00", "06:00", "12:00", "15:00", "18:00", "19:00"]);
        assert!(clock.refresh(&broken, &request(date)).is_err());
        assert!(clock.daily().is_some());
    }
}

//! The background gradient that follows the schedule.

use std::time::Duration;

use salat_gradient::{interpolate, GradientPalette};
use salat_schedule::ScheduleSnapshot;
use salat_types::{next_period, to_period, DailyPrayerTimes, EpochMillis, PrayerPeriod, Theme};

/// Colour drift is slow enough that a 30 s refresh is not visible.
pub const GRADIENT_TICK: Duration = Duration::from_secs(30);

/// Palette for an already evaluated snapshot.
///
/// After Isha there is no next prayer until tomorrow's data arrives, so the
/// Isha palette is held (progress 0 toward pre-fajr).
pub fn ambient_from_snapshot(snapshot: &ScheduleSnapshot, theme: Theme) -> GradientPalette {
    let current = to_period(snapshot.current);
    let (next, progress) = match snapshot.next {
        Some(next) => (PrayerPeriod::from(next), snapshot.progress),
        None => (next_period(current), 0.0),
    };
    interpolate(current, next, progress, theme)
}

/// Palette at `now`. Without schedule data this is the pre-fajr palette.
pub fn ambient_palette(
    daily: Option<&DailyPrayerTimes>,
    now: EpochMillis,
    theme: Theme,
) -> GradientPalette {
    match daily {
        Some(d) => ambient_from_snapshot(&ScheduleSnapshot::evaluate(d.prayers(), now), theme),
        None => interpolate(PrayerPeriod::PreFajr, PrayerPeriod::Fajr, 0.0, theme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use salat_gradient::reference_palette;
    use salat_types::{PrayerName, PrayerTime};

    const BASE: i64 = 1_710_460_800_000;
    const HOUR: i64 = 3_600_000;

    fn day() -> DailyPrayerTimes {
        let hours = [5, 6, 12, 15, 18, 19];
        DailyPrayerTimes::new(
            PrayerName::ALL
                .into_iter()
                .zip(hours)
                .map(|(name, h)| PrayerTime::new(name, format!("{:02}:00", h), BASE + h * HOUR)),
            "UTC",
            BASE,
        )
    }

    #[test]
    fn test_no_data_is_pre_fajr() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(
                ambient_palette(None, BASE, theme),
                reference_palette(PrayerPeriod::PreFajr, theme)
            );
        }
    }

    #[test]
    fn test_on_boundary_is_reference() {
        let daily = day();
        let p = ambient_palette(Some(&daily), BASE + 12 * HOUR, Theme::Dark);
        assert_eq!(p, reference_palette(PrayerPeriod::Dhuhr, Theme::Dark));
    }

    #[test]
    fn test_mid_window_blends() {
        let daily = day();
        // halfway from Dhuhr (12:00) to Asr (15:00)
        let p = ambient_palette(Some(&daily), BASE + 13 * HOUR + 30 * 60_000, Theme::Dark);
        assert_eq!(p.from.to_string(), "#1b1200");
    }

    #[test]
    fn test_isha_held_after_last_prayer() {
        let daily = day();
        let p = ambient_palette(Some(&daily), BASE + 23 * HOUR, Theme::Light);
        assert_eq!(p, reference_palette(PrayerPeriod::Isha, Theme::Light));
    }

    #[test]
    fn test_pre_fajr_window() {
        let daily = day();
        // 45 min into the 90 min window before Fajr at 05:00
        let snap = ScheduleSnapshot::evaluate(daily.prayers(), BASE + 4 * HOUR + 15 * 60_000);
        assert_eq!(snap.current, None);
        assert!((snap.progress - 0.5).abs() < 1e-9);
        let p = ambient_from_snapshot(&snap, Theme::Dark);
        assert_eq!(p, interpolate(PrayerPeriod::PreFajr, PrayerPeriod::Fajr, 0.5, Theme::Dark));
    }
}

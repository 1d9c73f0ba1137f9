use proptest::prelude::*;
use salat_schedule::{current_prayer, next_prayer, progress, PRE_FAJR_WINDOW_MS};
use salat_types::{PrayerName, PrayerTime};

/// Six strictly increasing instants built from positive gaps.
fn increasing_day() -> impl Strategy<Value = Vec<PrayerTime>> {
    (0i64..4_000_000_000_000, prop::array::uniform6(1i64..20_000_000)).prop_map(|(start, gaps)| {
        let mut t = start;
        PrayerName::ALL
            .into_iter()
            .zip(gaps)
            .map(|(name, gap)| {
                t += gap;
                PrayerTime::new(name, "00:00", t)
            })
            .collect::<Vec<_>>()
    })
}

proptest! {
    /// Landing exactly on a boundary selects that prayer.
    #[test]
    fn boundary_is_inclusive(prayers in increasing_day()) {
        for p in &prayers {
            prop_assert_eq!(current_prayer(&prayers, p.timestamp), Some(p.name));
        }
    }

    /// One millisecond before the first boundary there is no current prayer.
    #[test]
    fn just_before_fajr_is_none(prayers in increasing_day()) {
        let now = prayers[0].timestamp - 1;
        let current = current_prayer(&prayers, now);
        prop_assert_eq!(current, None);
        prop_assert_eq!(next_prayer(&prayers, current), Some(PrayerName::Fajr));
    }

    /// Progress never decreases as time moves forward inside a window.
    #[test]
    fn progress_is_monotone(prayers in increasing_day(), idx in 0usize..5, a in 0.0f64..1.0, b in 0.0f64..1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let start = prayers[idx].timestamp;
        let span = prayers[idx + 1].timestamp - start;
        let current = Some(prayers[idx].name);
        let next = Some(prayers[idx + 1].name);

        let p_lo = progress(&prayers, current, next, start + (span as f64 * lo) as i64);
        let p_hi = progress(&prayers, current, next, start + (span as f64 * hi) as i64);
        prop_assert!(p_lo <= p_hi);
        prop_assert!((0.0..=1.0).contains(&p_lo));
        prop_assert!((0.0..=1.0).contains(&p_hi));
    }

    /// Exactly 0 at the window start and exactly 1 at the next boundary.
    #[test]
    fn progress_endpoints(prayers in increasing_day(), idx in 0usize..5) {
        let current = Some(prayers[idx].name);
        let next = Some(prayers[idx + 1].name);
        prop_assert_eq!(progress(&prayers, current, next, prayers[idx].timestamp), 0.0);
        prop_assert_eq!(progress(&prayers, current, next, prayers[idx + 1].timestamp), 1.0);

        let fajr = prayers[0].timestamp;
        let fajr_name = Some(PrayerName::Fajr);
        prop_assert_eq!(progress(&prayers, None, fajr_name, fajr - PRE_FAJR_WINDOW_MS), 0.0);
        prop_assert_eq!(progress(&prayers, None, fajr_name, fajr), 1.0);
    }

    /// At or after Isha the day is complete.
    #[test]
    fn after_isha_day_complete(prayers in increasing_day(), extra in 0i64..86_400_000) {
        let now = prayers[5].timestamp + extra;
        let current = current_prayer(&prayers, now);
        prop_assert_eq!(current, Some(PrayerName::Isha));
        let next = next_prayer(&prayers, current);
        prop_assert_eq!(next, None);
        prop_assert_eq!(progress(&prayers, current, next, now), 1.0);
    }
}

use anyhow::Result;
use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use salat_core::prelude::*;
use salat_core::{aladhan, reference_palette};

const KARACHI_BODY: &str = r#"{
    "code": 200,
    "status": "OK",
    "data": {
        "timings": {
            "Fajr": "05:21", "Sunrise": "06:38", "Dhuhr": "12:36", "Asr": "16:02",
            "Sunset": "18:34", "Maghrib": "18:34", "Isha": "19:51", "Imsak": "05:11",
            "Midnight": "00:36"
        },
        "meta": { "timezone": "Asia/Karachi", "method": { "id": 1 } }
    }
}"#;

fn karachi() -> Result<DailyPrayerTimes> {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 6, 0, 0).unwrap();
    Ok(aladhan::parse_timings(KARACHI_BODY, now, now)?)
}

#[test]
fn test_decoded_day_drives_countdown() -> Result<()> {
    let daily = karachi()?;
    // 11:00 PKT = 06:00 UTC, inside Sunrise
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 6, 0, 0).unwrap().timestamp_millis();
    let state = CountdownState::evaluate(Some(&daily), now);

    assert_eq!(state.current_prayer, Some(PrayerName::Sunrise));
    assert_eq!(state.next_prayer, Some(PrayerName::Dhuhr));
    assert_eq!(state.total_seconds, 96 * 60);
    Ok(())
}

#[test]
fn test_clock_matches_free_functions() -> Result<()> {
    let daily = karachi()?;
    let clock = PrayerClock::with_daily(daily.clone(), Theme::Light);
    let now = daily.get(PrayerName::Maghrib).map(|p| p.timestamp).unwrap_or_default() + 60_000;

    assert_eq!(clock.countdown(now), CountdownState::evaluate(Some(&daily), now));
    assert_eq!(clock.ambient(now), ambient_palette(Some(&daily), now, Theme::Light));
    Ok(())
}

#[test]
fn test_settings_flow_into_request() -> Result<()> {
    let settings = SettingsBuilder::new()
        .location(Location::new(24.8607, 67.0011)?.with_place("Karachi", "Pakistan", "pk"))
        .method_from_region(true)
        .school_id(1)
        .build()?;
    let request = TimesRequest::from_settings(&settings, Utc::now())?;

    assert_eq!(request.method, CalculationMethod::Karachi);
    assert_eq!(request.school, AsrSchool::Hanafi);
    assert!(aladhan::timings_url(&request).contains("method=1&school=1"));
    Ok(())
}

proptest! {
    #[test]
    fn countdown_never_exceeds_gap(offset in 0i64..86_400_000) {
        let daily = karachi().unwrap();
        let start = daily.prayers()[0].timestamp - 6 * 3_600_000;
        let now = start + offset;
        let state = CountdownState::evaluate(Some(&daily), now);

        if let Some(next) = state.next_prayer.and_then(|n| daily.get(n)) {
            prop_assert!(next.timestamp >= now);
            prop_assert_eq!(state.total_seconds, ((next.timestamp - now) / 1000) as u64);
        } else {
            prop_assert_eq!(state.total_seconds, 0);
        }
        prop_assert!(state.progress_percent <= 100);
    }

    #[test]
    fn ambient_stays_on_reference_when_day_is_over(extra in 0i64..4 * 3_600_000) {
        let daily = karachi().unwrap();
        let isha = daily.get(PrayerName::Isha).unwrap().timestamp;
        for theme in [Theme::Dark, Theme::Light] {
            prop_assert_eq!(
                ambient_palette(Some(&daily), isha + extra, theme),
                reference_palette(PrayerPeriod::Isha, theme)
            );
        }
    }
}

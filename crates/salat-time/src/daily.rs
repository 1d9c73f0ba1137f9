//! Building a day's schedule and deciding when it goes stale.

use chrono::{DateTime, Duration, Local, NaiveTime, TimeZone, Utc};
use salat_types::{DailyPrayerTimes, PrayerName, PrayerTime, SalatError};
use tracing::{debug, warn};

use crate::convert::{local_date, parse_local_time, parse_timezone, resolve_on_date};

/// Resolves six raw `(name, "HH:MM")` timings into a [`DailyPrayerTimes`].
///
/// Every time is placed on `reference`'s date as observed in `timezone`.
/// Annotations like `" (EET)"` are stripped and the stored `local_time` is
/// the clean `HH:MM` form.
///
/// A set that violates chronological order is still returned (the schedule
/// engine degrades gracefully) but a warning is logged.
///
/// # Errors
/// `UnknownTimezone` or `InvalidTimeFormat` from the first bad input.
pub fn resolve_daily<I, S>(
    timings: I,
    reference: DateTime<Utc>,
    timezone: &str,
    fetched_at: DateTime<Utc>,
) -> Result<DailyPrayerTimes, SalatError>
where
    I: IntoIterator<Item = (PrayerName, S)>,
    S: AsRef<str>,
{
    let tz = parse_timezone(timezone)?;
    let date = local_date(reference, &tz);

    let prayers = timings
        .into_iter()
        .map(|(name, raw)| {
            let time = parse_local_time(raw.as_ref())?;
            let instant = resolve_on_date(time, date, &tz)?;
            Ok(PrayerTime::new(
                name,
                time.format("%H:%M").to_string(),
                instant.timestamp_millis(),
            ))
        })
        .collect::<Result<Vec<_>, SalatError>>()?;

    let daily = DailyPrayerTimes::new(prayers, tz.name(), fetched_at.timestamp_millis());

    if !daily.is_well_ordered() {
        warn!(timezone = tz.name(), %date, "prayer instants are not in chronological order");
    }
    if !daily.is_complete() {
        warn!(timezone = tz.name(), count = daily.prayers.len(), "daily set is incomplete");
    }
    debug!(timezone = tz.name(), %date, "resolved daily prayer times");

    Ok(daily)
}

/// True if both instants fall on the same calendar date in `zone`.
pub fn is_same_local_day<Z: TimeZone>(a: DateTime<Utc>, b: DateTime<Utc>, zone: &Z) -> bool {
    a.with_timezone(zone).date_naive() == b.with_timezone(zone).date_naive()
}

/// Local 00:01 on the day after `now`, when the caller should re-fetch.
pub fn next_refresh_at<Z: TimeZone>(now: DateTime<Utc>, zone: &Z) -> DateTime<Utc> {
    let refresh_time = NaiveTime::from_hms_opt(0, 1, 0);
    let tomorrow = now.with_timezone(zone).date_naive().succ_opt();

    tomorrow
        .zip(refresh_time)
        .map(|(date, time)| date.and_time(time))
        .and_then(|naive| {
            zone.from_local_datetime(&naive)
                .earliest()
                .or_else(|| zone.from_local_datetime(&(naive + Duration::hours(1))).earliest())
        })
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| now + Duration::days(1))
}

/// Staleness checks for a retrieved schedule.
///
/// The core itself never consults these; they are for the caller deciding
/// whether to re-fetch.
pub trait StalenessExt {
    /// True if the data was fetched on a different calendar day in `zone`.
    fn is_stale_in<Z: TimeZone>(&self, now: DateTime<Utc>, zone: &Z) -> bool;

    /// Same as [`is_stale_in`](Self::is_stale_in) using the device zone.
    fn is_stale(&self, now: DateTime<Utc>) -> bool {
        self.is_stale_in(now, &Local)
    }
}

impl StalenessExt for DailyPrayerTimes {
    fn is_stale_in<Z: TimeZone>(&self, now: DateTime<Utc>, zone: &Z) -> bool {
        match self.fetched_at_instant() {
            Some(fetched) => !is_same_local_day(fetched, now, zone),
            None => true,
        }
    }
}

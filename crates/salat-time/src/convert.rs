//! Location-local wall-clock strings to absolute instants.
//!
//! The calendar date a prayer falls on is always taken in the *location's*
//! zone. Using the caller's zone instead silently shifts every prayer by a
//! day whenever the two zones straddle midnight.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use salat_types::{EpochMillis, SalatError};

/// Strips a trailing parenthetical annotation such as `" (EET)"`.
///
/// Strings without a closing `)` at the end are returned trimmed but
/// otherwise untouched.
pub fn strip_annotation(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.ends_with(')') {
        if let Some(open) = trimmed.find('(') {
            return trimmed[..open].trim_end();
        }
    }
    trimmed
}

/// Parses a zero-padded 24-hour `HH:MM` string, after stripping annotations.
///
/// # Errors
/// Returns `InvalidTimeFormat` for anything else, including `"5:30"`,
/// `"24:00"` and `"12:60"`.
pub fn parse_local_time(raw: &str) -> Result<NaiveTime, SalatError> {
    let s = strip_annotation(raw);
    let b = s.as_bytes();

    let well_formed = b.len() == 5
        && b[2] == b':'
        && b[..2].iter().chain(&b[3..]).all(|c| c.is_ascii_digit());
    if !well_formed {
        return Err(SalatError::invalid_time(raw));
    }

    let hour = u32::from(b[0] - b'0') * 10 + u32::from(b[1] - b'0');
    let minute = u32::from(b[3] - b'0') * 10 + u32::from(b[4] - b'0');
    if hour > 23 || minute > 59 {
        return Err(SalatError::invalid_time(raw));
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| SalatError::invalid_time(raw))
}

/// Looks up an IANA timezone identifier.
pub fn parse_timezone(name: &str) -> Result<Tz, SalatError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| SalatError::unknown_timezone(name))
}

/// The calendar date of `reference` as observed in `tz`.
pub fn local_date(reference: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    reference.with_timezone(tz).date_naive()
}

/// Resolves a wall-clock time on a location-local date to a UTC instant.
///
/// Repeated local times (fall-back transitions) resolve to the earlier
/// instant. Skipped local times (spring-forward gaps) resolve one hour
/// later on the wall clock, i.e. with the pre-transition offset.
///
/// # Errors
/// Returns `NonexistentLocalTime` only if the shifted time is also missing.
pub fn resolve_on_date(
    time: NaiveTime,
    date: NaiveDate,
    tz: &Tz,
) -> Result<DateTime<Utc>, SalatError> {
    let naive = date.and_time(time);
    let resolved = match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => tz.from_local_datetime(&(naive + Duration::hours(1))).earliest(),
    };

    resolved
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| SalatError::NonexistentLocalTime {
            date,
            time,
            timezone: tz.name().to_string(),
        })
}

/// Same as [`resolve_instant`] with an already parsed zone.
pub fn resolve_instant_in(
    local_time: &str,
    reference: DateTime<Utc>,
    tz: &Tz,
) -> Result<EpochMillis, SalatError> {
    let time = parse_local_time(local_time)?;
    let date = local_date(reference, tz);
    Ok(resolve_on_date(time, date, tz)?.timestamp_millis())
}

/// Converts `"HH:MM"` in `timezone` on `reference`'s local date to epoch ms.
///
/// # Example
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use salat_time::resolve_instant;
///
/// let reference = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
/// let tokyo = resolve_instant("23:59", reference, "Asia/Tokyo").unwrap();
/// assert_eq!(tokyo, Utc.with_ymd_and_hms(2024, 3, 10, 14, 59, 0).unwrap().timestamp_millis());
/// ```
pub fn resolve_instant(
    local_time: &str,
    reference: DateTime<Utc>,
    timezone: &str,
) -> Result<EpochMillis, SalatError> {
    let tz = parse_timezone(timezone)?;
    resolve_instant_in(local_time, reference, &tz)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_strip_annotation() {
        assert_eq!(strip_annotation("15:30 (EET)"), "15:30");
        assert_eq!(strip_annotation("15:30(+03)"), "15:30");
        assert_eq!(strip_annotation("  04:12 "), "04:12");
        assert_eq!(strip_annotation("04:12 (EET"), "04:12 (EET");
    }

    #[test]
    fn test_parse_accepts_padded_24h() {
        assert_eq!(parse_local_time("00:00").unwrap(), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        assert_eq!(parse_local_time("23:59 (WIB)").unwrap(), NaiveTime::from_hms_opt(23, 59, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["5:30", "24:00", "12:60", "12-30", "", "ab:cd", "12:30:00", "12:3"] {
            let err = parse_local_time(bad).unwrap_err();
            assert!(matches!(err, SalatError::InvalidTimeFormat { .. }), "{bad:?} accepted");
        }
    }

    #[test]
    fn test_unknown_timezone() {
        let err = resolve_instant("12:00", utc(2024, 3, 10, 0, 0), "Mars/Olympus").unwrap_err();
        assert_eq!(err, SalatError::unknown_timezone("Mars/Olympus"));
    }

    #[test]
    fn test_same_wall_time_differs_across_zones() {
        let reference = utc(2024, 3, 10, 12, 0);
        let tokyo = resolve_instant("23:59", reference, "Asia/Tokyo").unwrap();
        let new_york = resolve_instant("23:59", reference, "America/New_York").unwrap();

        // Tokyo is UTC+9; New York switched to EDT (UTC-4) that morning.
        assert_eq!(tokyo, utc(2024, 3, 10, 14, 59).timestamp_millis());
        assert_eq!(new_york, utc(2024, 3, 11, 3, 59).timestamp_millis());
        assert_eq!(new_york - tokyo, 13 * 3_600_000);
    }

    #[test]
    fn test_date_taken_in_location_zone() {
        // 20:00 UTC on the 14th is already the 15th in Jakarta (UTC+7).
        let reference = utc(2024, 3, 14, 20, 0);
        let fajr = resolve_instant("04:30", reference, "Asia/Jakarta").unwrap();
        assert_eq!(fajr, utc(2024, 3, 14, 21, 30).timestamp_millis());
    }

    #[test]
    fn test_dst_gap_shifts_forward() {
        let tz = parse_timezone("America/New_York").unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let time = NaiveTime::from_hms_opt(2, 30, 0).unwrap();
        let resolved = resolve_on_date(time, date, &tz).unwrap();
        assert_eq!(resolved, utc(2024, 3, 10, 7, 30));
    }

    #[test]
    fn test_dst_overlap_takes_earlier() {
        let tz = parse_timezone("America/New_York").unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 11, 3).unwrap();
        let time = NaiveTime::from_hms_opt(1, 30, 0).unwrap();
        let resolved = resolve_on_date(time, date, &tz).unwrap();
        assert_eq!(resolved, utc(2024, 11, 3, 5, 30));
    }
}

//! Decoding the Al Adhan `timings` payload.
//!
//! Transport lives with the caller; this module only maps a request to the
//! endpoint path and the JSON body back to a [`DailyPrayerTimes`].

use chrono::{DateTime, Utc};
use salat_time::resolve_daily;
use salat_types::{DailyPrayerTimes, GregorianDate, HijriDate, PrayerName, SalatError};
use serde::Deserialize;
use tracing::debug;

use crate::source::TimesRequest;

pub const ALADHAN_BASE: &str = "https://api.aladhan.com/v1";

#[derive(Debug, Deserialize)]
struct Envelope {
    code: u16,
    #[serde(default)]
    status: String,
    data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct TimingsData {
    timings: Timings,
    #[serde(default)]
    date: DateBlock,
    meta: Meta,
}

/// The Hijri side already carries the requested adjustment.
#[derive(Debug, Default, Deserialize)]
struct DateBlock {
    #[serde(default)]
    hijri: Option<HijriDate>,
    #[serde(default)]
    gregorian: Option<GregorianDate>,
}

/// Only the six boundaries the engine uses; Imsak, Sunset, Midnight and
/// the night thirds are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Timings {
    fajr: String,
    sunrise: String,
    dhuhr: String,
    asr: String,
    maghrib: String,
    isha: String,
}

#[derive(Debug, Deserialize)]
struct Meta {
    timezone: String,
}

/// Path and query for `GET /timings/{unix}` with the request's settings.
///
/// The adjustment parameter is only sent when non-zero.
pub fn timings_url(request: &TimesRequest) -> String {
    let mut url = format!(
        "{}/timings/{}?latitude={}&longitude={}&method={}&school={}",
        ALADHAN_BASE,
        request.date.timestamp(),
        request.location.latitude,
        request.location.longitude,
        request.method.id(),
        request.school.id(),
    );
    if !request.adjustment.is_zero() {
        url.push_str(&format!("&adjustment={}", request.adjustment.days()));
    }
    url
}

/// Decodes a `timings` response body.
///
/// Times such as `"15:30 (EET)"` are accepted; the annotation is stripped.
/// The Hijri and Gregorian dates are kept when the body carries them.
///
/// # Errors
/// `MalformedSource` for undecodable JSON or a non-200 envelope, and the
/// time-conversion errors for bad timezone or time strings.
pub fn parse_timings(
    json: &str,
    reference: DateTime<Utc>,
    fetched_at: DateTime<Utc>,
) -> Result<DailyPrayerTimes, SalatError> {
    let envelope: Envelope = serde_json::from_str(json)
        .map_err(|e| SalatError::malformed(format!("Al Adhan response: {}", e)))?;

    if envelope.code != 200 {
        return Err(SalatError::malformed(format!(
            "Al Adhan returned {} {}",
            envelope.code, envelope.status
        )));
    }

    let data: TimingsData = serde_json::from_value(envelope.data)
        .map_err(|e| SalatError::malformed(format!("Al Adhan timings: {}", e)))?;
    debug!(timezone = %data.meta.timezone, "decoded Al Adhan timings");

    let t = data.timings;
    resolve_daily(
        [
            (PrayerName::Fajr, t.fajr),
            (PrayerName::Sunrise, t.sunrise),
            (PrayerName::Dhuhr, t.dhuhr),
            (PrayerName::Asr, t.asr),
            (PrayerName::Maghrib, t.maghrib),
            (PrayerName::Isha, t.isha),
        ],
        reference,
        &data.meta.timezone,
        fetched_at,
    )
    .map(|daily| daily.with_dates(data.date.hijri, data.date.gregorian))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use salat_types::{CalculationMethod, HijriAdjustment, Location};

    const CAIRO_BODY: &str = r#"{
        "code": 200,
        "status": "OK",
        "data": {
            "timings": {
                "Fajr": "04:21 (EET)", "Sunrise": "05:52 (EET)", "Dhuhr": "11:58 (EET)",
                "Asr": "15:25 (EET)", "Sunset": "18:03 (EET)", "Maghrib": "18:03 (EET)",
                "Isha": "19:21 (EET)", "Imsak": "04:11 (EET)", "Midnight": "23:58 (EET)",
                "Firstthird": "21:57 (EET)", "Lastthird": "01:59 (EET)"
            },
            "date": {
                "readable": "15 Mar 2024",
                "timestamp": "1710489600",
                "hijri": {
                    "date": "04-09-1445", "format": "DD-MM-YYYY", "day": "04",
                    "weekday": { "en": "Al Juma'a", "ar": "الجمعة" },
                    "month": { "number": 9, "en": "Ramaḍān", "ar": "رَمَضان", "days": 30 },
                    "year": "1445", "designation": { "abbreviated": "AH", "expanded": "Anno Hegirae" },
                    "holidays": []
                },
                "gregorian": {
                    "date": "15-03-2024", "format": "DD-MM-YYYY", "day": "15",
                    "weekday": { "en": "Friday" },
                    "month": { "number": 3, "en": "March" },
                    "year": "2024", "designation": { "abbreviated": "AD", "expanded": "Anno Domini" }
                }
            },
            "meta": { "latitude": 30.0444, "longitude": 31.2357, "timezone": "Africa/Cairo" }
        }
    }"#;

    #[test]
    fn test_parse_cairo() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap();
        let daily = parse_timings(CAIRO_BODY, now, now).unwrap();

        assert_eq!(daily.timezone, "Africa/Cairo");
        assert!(daily.is_complete());
        assert!(daily.is_well_ordered());
        let isha = daily.get(PrayerName::Isha).unwrap();
        assert_eq!(isha.local_time, "19:21");
        assert_eq!(isha.timestamp, Utc.with_ymd_and_hms(2024, 3, 15, 17, 21, 0).unwrap().timestamp_millis());
    }

    #[test]
    fn test_parse_keeps_calendar_dates() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap();
        let daily = parse_timings(CAIRO_BODY, now, now).unwrap();

        let hijri = daily.hijri.as_ref().unwrap();
        assert_eq!((hijri.day.as_str(), hijri.month.number, hijri.year.as_str()), ("04", 9, "1445"));
        let gregorian = daily.gregorian.as_ref().unwrap();
        assert_eq!(gregorian.weekday.en, "Friday");

        let json = serde_json::to_value(&daily).unwrap();
        assert_eq!(json["hijri"]["month"]["number"], 9);
        assert_eq!(json["gregorian"]["year"], "2024");
        assert_eq!(
            salat_time::format_hijri_date(hijri, salat_types::Language::En),
            "04 Ramadan 1445 AH"
        );

        let undated = CAIRO_BODY.replace("\"hijri\"", "\"islamic\"");
        let daily = parse_timings(&undated, now, now).unwrap();
        assert_eq!(daily.hijri, None);
        assert!(serde_json::to_value(&daily).unwrap().get("hijri").is_none());
    }

    #[test]
    fn test_error_envelope() {
        let body = r#"{"code": 400, "status": "BAD_REQUEST", "data": "Please specify a valid method"}"#;
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap();
        let err = parse_timings(body, now, now).unwrap_err();
        assert_eq!(err, SalatError::malformed("Al Adhan returned 400 BAD_REQUEST"));
    }

    #[test]
    fn test_garbage_body() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap();
        assert!(matches!(parse_timings("<html>", now, now), Err(SalatError::MalformedSource(_))));
        let missing_isha = CAIRO_BODY.replace("\"Isha\": \"19:21 (EET)\",", "");
        assert!(matches!(parse_timings(&missing_isha, now, now), Err(SalatError::MalformedSource(_))));
    }

    #[test]
    fn test_timings_url() {
        let loc = Location::new(30.0444, 31.2357).unwrap();
        let date = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        let mut req = TimesRequest::new(loc, date);
        req.method = CalculationMethod::Egyptian;

        assert_eq!(
            timings_url(&req),
            "https://api.aladhan.com/v1/timings/1710460800?latitude=30.0444&longitude=31.2357&method=5&school=0"
        );

        req.adjustment = HijriAdjustment::new(-1).unwrap();
        assert!(timings_url(&req).ends_with("&adjustment=-1"));
    }
}

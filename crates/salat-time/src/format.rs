use chrono::Timelike;
use salat_types::{GregorianDate, HijriDate, Language, SalatError, TimeFormat};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::convert::parse_local_time;

/// Formats a location-local `HH:MM` string for display.
///
/// `"13:05"` becomes `"13:05"` (24h) or `"1:05 PM"` (12h). Midnight and
/// noon read `"12:xx AM"` and `"12:xx PM"`.
pub fn format_prayer_time(local_time: &str, format: TimeFormat) -> Result<String, SalatError> {
    let time = parse_local_time(local_time)?;
    let (hour, minute) = (time.hour(), time.minute());

    Ok(match format {
        TimeFormat::TwentyFourHour => format!("{:02}:{:02}", hour, minute),
        TimeFormat::TwelveHour => {
            let meridiem = if hour >= 12 { "PM" } else { "AM" };
            let display_hour = match hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{}:{:02} {}", display_hour, minute, meridiem)
        }
    })
}

const HIJRI_MONTHS_EN: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

const HIJRI_MONTHS_AR: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الثاني",
    "جمادى الأولى",
    "جمادى الثانية",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

const GREGORIAN_MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const GREGORIAN_MONTHS_AR: [&str; 12] = [
    "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو",
    "يوليو", "أغسطس", "سبتمبر", "أكتوبر", "نوفمبر", "ديسمبر",
];

const WEEKDAYS_AR: [(&str, &str); 7] = [
    ("Sunday", "الأحد"),
    ("Monday", "الاثنين"),
    ("Tuesday", "الثلاثاء"),
    ("Wednesday", "الأربعاء"),
    ("Thursday", "الخميس"),
    ("Friday", "الجمعة"),
    ("Saturday", "السبت"),
];

/// Table lookup by 1-based month number, falling back to the source's name.
fn month_name<'a>(table: &[&'a str; 12], number: u8, fallback: &'a str) -> &'a str {
    usize::from(number)
        .checked_sub(1)
        .and_then(|i| table.get(i))
        .copied()
        .unwrap_or(fallback)
}

/// `"4 Ramadan 1445 AH"` or `"4 رمضان 1445 هـ"`.
///
/// The day is rendered as the source sent it. A month number outside 1..=12
/// falls back to the month name carried in the date.
pub fn format_hijri_date(date: &HijriDate, language: Language) -> String {
    let n = date.month.number;
    match language {
        Language::En => {
            let month = month_name(&HIJRI_MONTHS_EN, n, &date.month.en);
            format!("{} {} {} AH", date.day, month, date.year)
        }
        Language::Ar => {
            let month = month_name(&HIJRI_MONTHS_AR, n, &date.month.ar);
            format!("{} {} {} هـ", date.day, month, date.year)
        }
    }
}

/// `"Friday, March 15, 2024"` or `"الجمعة، 15 مارس 2024"`.
pub fn format_gregorian_date(date: &GregorianDate, language: Language) -> String {
    let n = date.month.number;
    match language {
        Language::En => {
            let month = month_name(&GREGORIAN_MONTHS_EN, n, &date.month.en);
            format!("{}, {} {}, {}", date.weekday.en, month, date.day, date.year)
        }
        Language::Ar => {
            let month = month_name(&GREGORIAN_MONTHS_AR, n, &date.month.en);
            let weekday = WEEKDAYS_AR
                .iter()
                .find(|(en, _)| *en == date.weekday.en)
                .map_or(date.weekday.en.as_str(), |(_, ar)| *ar);
            format!("{}، {} {} {}", weekday, date.day, month, date.year)
        }
    }
}

/// A countdown split into clock parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CountdownParts {
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
}

impl CountdownParts {
    pub fn from_seconds(total: u64) -> Self {
        Self {
            hours: total / 3600,
            minutes: ((total % 3600) / 60) as u8,
            seconds: (total % 60) as u8,
        }
    }

    /// Whole seconds only; the sub-second remainder is dropped.
    pub fn from_millis(ms: u64) -> Self {
        Self::from_seconds(ms / 1000)
    }

    pub fn total_seconds(&self) -> u64 {
        self.hours * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }
}

impl fmt::Display for CountdownParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

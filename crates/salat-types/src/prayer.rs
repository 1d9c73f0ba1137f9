use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SalatError;

/// The five daily prayers plus sunrise, in chronological order.
///
/// Declaration order is significant: `Ord` follows it and the schedule
/// engine relies on it for "next" lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PrayerName {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    /// All prayers in chronological order.
    pub const ALL: [PrayerName; 6] = [
        PrayerName::Fajr,
        PrayerName::Sunrise,
        PrayerName::Dhuhr,
        PrayerName::Asr,
        PrayerName::Maghrib,
        PrayerName::Isha,
    ];

    /// Position in the daily sequence (Fajr = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The prayer that follows in the same day, `None` after Isha.
    pub fn succ(self) -> Option<PrayerName> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Sunrise => "Sunrise",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        }
    }
}

impl fmt::Display for PrayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrayerName {
    type Err = SalatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SalatError::invalid_config(format!("Unknown prayer name: {}", s)))
    }
}

/// A single prayer boundary: its name, the location-local `HH:MM` string
/// and the resolved absolute instant in epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerTime {
    pub name: PrayerName,
    #[serde(rename = "time")]
    pub local_time: String,
    pub timestamp: i64,
}

impl PrayerTime {
    pub fn new(name: PrayerName, local_time: impl Into<String>, timestamp: i64) -> Self {
        Self {
            name,
            local_time: local_time.into(),
            timestamp,
        }
    }

    /// The boundary as a UTC datetime. `None` only for timestamps outside chrono's range.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

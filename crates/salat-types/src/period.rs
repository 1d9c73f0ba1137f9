//! Gradient periods: the prayers plus the stretch before Fajr.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SalatError;
use crate::prayer::PrayerName;

/// Gradient-interpolation key. Cyclic: Isha wraps to `PreFajr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrayerPeriod {
    #[serde(rename = "pre-fajr")]
    PreFajr,
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerPeriod {
    /// The full cycle starting at `PreFajr`.
    pub const CYCLE: [PrayerPeriod; 7] = [
        PrayerPeriod::PreFajr,
        PrayerPeriod::Fajr,
        PrayerPeriod::Sunrise,
        PrayerPeriod::Dhuhr,
        PrayerPeriod::Asr,
        PrayerPeriod::Maghrib,
        PrayerPeriod::Isha,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The period that follows, wrapping from Isha to `PreFajr`.
    pub fn next(self) -> PrayerPeriod {
        Self::CYCLE[(self.index() + 1) % Self::CYCLE.len()]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PrayerPeriod::PreFajr => "pre-fajr",
            PrayerPeriod::Fajr => "Fajr",
            PrayerPeriod::Sunrise => "Sunrise",
            PrayerPeriod::Dhuhr => "Dhuhr",
            PrayerPeriod::Asr => "Asr",
            PrayerPeriod::Maghrib => "Maghrib",
            PrayerPeriod::Isha => "Isha",
        }
    }
}

impl From<PrayerName> for PrayerPeriod {
    fn from(prayer: PrayerName) -> Self {
        match prayer {
            PrayerName::Fajr => PrayerPeriod::Fajr,
            PrayerName::Sunrise => PrayerPeriod::Sunrise,
            PrayerName::Dhuhr => PrayerPeriod::Dhuhr,
            PrayerName::Asr => PrayerPeriod::Asr,
            PrayerName::Maghrib => PrayerPeriod::Maghrib,
            PrayerName::Isha => PrayerPeriod::Isha,
        }
    }
}

impl From<Option<PrayerName>> for PrayerPeriod {
    fn from(prayer: Option<PrayerName>) -> Self {
        prayer.map_or(PrayerPeriod::PreFajr, PrayerPeriod::from)
    }
}

impl fmt::Display for PrayerPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrayerPeriod {
    type Err = SalatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::CYCLE
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SalatError::invalid_config(format!("Unknown prayer period: {}", s)))
    }
}

/// Maps the current prayer (or none yet today) to its period.
pub fn to_period(prayer: Option<PrayerName>) -> PrayerPeriod {
    PrayerPeriod::from(prayer)
}

/// The period cyclically following `period`.
pub fn next_period(period: PrayerPeriod) -> PrayerPeriod {
    period.next()
}

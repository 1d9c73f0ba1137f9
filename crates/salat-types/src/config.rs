//! Configuration enums forwarded to the prayer-time source.
//!
//! The core never interprets these beyond validation; the numeric ids are
//! the ones the external calculation service expects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SalatError;

/// Prayer-time calculation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum CalculationMethod {
    Karachi = 1,
    Isna = 2,
    MuslimWorldLeague = 3,
    UmmAlQura = 4,
    Egyptian = 5,
    Tehran = 7,
    Gulf = 8,
    Kuwait = 9,
    Qatar = 10,
    Singapore = 11,
    France = 12,
    Turkey = 13,
    Russia = 14,
    Moonsighting = 15,
}

impl CalculationMethod {
    pub const ALL: [CalculationMethod; 14] = [
        CalculationMethod::Karachi,
        CalculationMethod::Isna,
        CalculationMethod::MuslimWorldLeague,
        CalculationMethod::UmmAlQura,
        CalculationMethod::Egyptian,
        CalculationMethod::Tehran,
        CalculationMethod::Gulf,
        CalculationMethod::Kuwait,
        CalculationMethod::Qatar,
        CalculationMethod::Singapore,
        CalculationMethod::France,
        CalculationMethod::Turkey,
        CalculationMethod::Russia,
        CalculationMethod::Moonsighting,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            CalculationMethod::Karachi => "University of Islamic Sciences, Karachi",
            CalculationMethod::Isna => "Islamic Society of North America",
            CalculationMethod::MuslimWorldLeague => "Muslim World League",
            CalculationMethod::UmmAlQura => "Umm al-Qura, Makkah",
            CalculationMethod::Egyptian => "Egyptian General Authority of Survey",
            CalculationMethod::Tehran => "Institute of Geophysics, Tehran",
            CalculationMethod::Gulf => "Gulf Region",
            CalculationMethod::Kuwait => "Kuwait",
            CalculationMethod::Qatar => "Qatar",
            CalculationMethod::Singapore => "Majlis Ugama Islam Singapura",
            CalculationMethod::France => "Union Organization Islamic de France",
            CalculationMethod::Turkey => "Diyanet, Turkey",
            CalculationMethod::Russia => "Spiritual Administration of Muslims of Russia",
            CalculationMethod::Moonsighting => "Moonsighting Committee Worldwide",
        }
    }
}

impl Default for CalculationMethod {
    fn default() -> Self {
        Self::Isna
    }
}

impl TryFrom<u8> for CalculationMethod {
    type Error = SalatError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|m| m.id() == id)
            .ok_or_else(|| SalatError::invalid_config(format!("Unknown calculation method id {}", id)))
    }
}

impl From<CalculationMethod> for u8 {
    fn from(method: CalculationMethod) -> Self {
        method.id()
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Juristic convention for the Asr shadow length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum AsrSchool {
    /// Shafi'i, Maliki, Hanbali (shadow = 1x).
    Shafi = 0,
    /// Hanafi (shadow = 2x).
    Hanafi = 1,
}

impl AsrSchool {
    pub fn id(self) -> u8 {
        self as u8
    }
}

impl Default for AsrSchool {
    fn default() -> Self {
        Self::Shafi
    }
}

impl TryFrom<u8> for AsrSchool {
    type Error = SalatError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Self::Shafi),
            1 => Ok(Self::Hanafi),
            other => Err(SalatError::invalid_config(format!("Unknown Asr school id {}", other))),
        }
    }
}

impl From<AsrSchool> for u8 {
    fn from(school: AsrSchool) -> Self {
        school.id()
    }
}

/// Days to shift the Hijri date reported by the source. Bounded to [-2, 2].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub struct HijriAdjustment(i8);

impl HijriAdjustment {
    pub const MIN: i8 = -2;
    pub const MAX: i8 = 2;

    pub fn new(days: i8) -> Result<Self, SalatError> {
        if (Self::MIN..=Self::MAX).contains(&days) {
            Ok(Self(days))
        } else {
            Err(SalatError::invalid_config(format!(
                "Hijri adjustment {} outside [{}, {}]",
                days,
                Self::MIN,
                Self::MAX
            )))
        }
    }

    /// Clamping constructor for UI steppers.
    pub fn saturating(days: i64) -> Self {
        Self(days.clamp(Self::MIN as i64, Self::MAX as i64) as i8)
    }

    pub fn days(self) -> i8 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<i8> for HijriAdjustment {
    type Error = SalatError;

    fn try_from(days: i8) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<HijriAdjustment> for i8 {
    fn from(adj: HijriAdjustment) -> Self {
        adj.0
    }
}

/// Display theme selecting the palette column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl FromStr for Theme {
    type Err = SalatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(SalatError::invalid_config(format!("Unknown theme: {}", other))),
        }
    }
}

/// Clock format for displaying prayer times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[serde(rename = "12h")]
    TwelveHour,
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl FromStr for TimeFormat {
    type Err = SalatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "12h" => Ok(TimeFormat::TwelveHour),
            "24h" => Ok(TimeFormat::TwentyFourHour),
            other => Err(SalatError::invalid_config(format!("Unknown time format: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl FromStr for Language {
    type Err = SalatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(SalatError::invalid_config(format!("Unknown language: {}", other))),
        }
    }
}

//! Calendar dates as reported by the prayer-time source.
//!
//! Day and year stay strings (`"04"`, `"1445"`) exactly as the source sends
//! them; only the month number is numeric.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthName {
    /// 1-based.
    pub number: u8,
    pub en: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayName {
    pub en: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ar: String,
}

/// A Hijri date, already shifted by the configured adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HijriDate {
    pub day: String,
    pub month: MonthName,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday: Option<WeekdayName>,
}

impl HijriDate {
    pub fn new(day: u8, month: u8, year: u16) -> Self {
        Self {
            day: format!("{:02}", day),
            month: MonthName { number: month, en: String::new(), ar: String::new() },
            year: year.to_string(),
            weekday: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GregorianDate {
    pub day: String,
    pub month: MonthName,
    pub year: String,
    pub weekday: WeekdayName,
}

impl GregorianDate {
    /// `weekday` is the English name, e.g. `"Friday"`.
    pub fn new(day: u8, month: u8, year: i32, weekday: impl Into<String>) -> Self {
        Self {
            day: format!("{:02}", day),
            month: MonthName { number: month, en: String::new(), ar: String::new() },
            year: year.to_string(),
            weekday: WeekdayName { en: weekday.into(), ar: String::new() },
        }
    }
}

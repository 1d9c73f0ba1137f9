use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::date::{GregorianDate, HijriDate};
use crate::prayer::{PrayerName, PrayerTime};

/// One day's prayer boundaries for a single location.
///
/// Created once per retrieval and replaced wholesale on the next one.
/// The core treats it as read-only and tolerates malformed contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPrayerTimes {
    pub prayers: SmallVec<[PrayerTime; 6]>,
    /// IANA identifier of the location's zone.
    pub timezone: String,
    /// Retrieval time, epoch milliseconds.
    pub fetched_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hijri: Option<HijriDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gregorian: Option<GregorianDate>,
}

impl DailyPrayerTimes {
    pub fn new(
        prayers: impl IntoIterator<Item = PrayerTime>,
        timezone: impl Into<String>,
        fetched_at: i64,
    ) -> Self {
        Self {
            prayers: prayers.into_iter().collect(),
            timezone: timezone.into(),
            fetched_at,
            hijri: None,
            gregorian: None,
        }
    }

    /// Attaches the calendar dates the source reported for this day.
    pub fn with_dates(mut self, hijri: Option<HijriDate>, gregorian: Option<GregorianDate>) -> Self {
        self.hijri = hijri;
        self.gregorian = gregorian;
        self
    }

    pub fn prayers(&self) -> &[PrayerTime] {
        &self.prayers
    }

    pub fn get(&self, name: PrayerName) -> Option<&PrayerTime> {
        self.prayers.iter().find(|p| p.name == name)
    }

    pub fn fetched_at_instant(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.fetched_at)
    }

    /// Exactly one entry per prayer, in enumeration order.
    pub fn is_complete(&self) -> bool {
        self.prayers.len() == PrayerName::ALL.len()
            && self
                .prayers
                .iter()
                .zip(PrayerName::ALL)
                .all(|(p, name)| p.name == name)
    }

    /// Instants are non-decreasing in list order.
    pub fn is_well_ordered(&self) -> bool {
        self.prayers.windows(2).all(|w| w[0].timestamp <= w[1].timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DailyPrayerTimes {
        let times = ["05:00", "06:20", "12:10", "15:30", "18:05", "19:25"];
        DailyPrayerTimes::new(
            PrayerName::ALL
                .into_iter()
                .zip(times)
                .enumerate()
                .map(|(i, (name, t))| PrayerTime::new(name, t, 1_000 * i as i64)),
            "Asia/Jakarta",
            0,
        )
    }

    #[test]
    fn test_complete_and_ordered() {
        let daily = sample();
        assert!(daily.is_complete());
        assert!(daily.is_well_ordered());
        assert_eq!(daily.get(PrayerName::Asr).unwrap().local_time, "15:30");
    }

    #[test]
    fn test_detects_misordered_and_missing() {
        let mut daily = sample();
        daily.prayers.swap(1, 2);
        assert!(!daily.is_complete());
        assert!(!daily.is_well_ordered());

        daily.prayers.truncate(3);
        assert!(daily.get(PrayerName::Isha).is_none());
    }

    #[test]
    fn test_camel_case_wire_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["timezone"], "Asia/Jakarta");
        assert_eq!(json["fetchedAt"], 0);
        assert_eq!(json["prayers"][0]["name"], "Fajr");
        assert!(json.get("hijri").is_none());

        let dated = sample().with_dates(Some(HijriDate::new(4, 9, 1445)), None);
        let json = serde_json::to_value(&dated).unwrap();
        assert_eq!(json["hijri"]["month"]["number"], 9);
        let back: DailyPrayerTimes = serde_json::from_value(json).unwrap();
        assert_eq!(back, dated);
    }
}

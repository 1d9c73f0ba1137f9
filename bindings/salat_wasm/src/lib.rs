//! WASM bindings for Salat - prayer countdowns and ambient gradients
//!
//! Schedule data crosses the boundary as the JSON form of `DailyPrayerTimes`
//! (`{"prayers":[{"name":"Fajr","time":"05:00","timestamp":...}],"timezone":...,"fetchedAt":...}`);
//! `"null"` stands for "not loaded yet".

use salat_core::{
    ambient_palette, format_gregorian_date, format_hijri_date, interpolate, resolve_instant,
    suggest_method, CountdownState, DailyPrayerTimes, GradientPalette, Language, PrayerClock,
    PrayerPeriod, SalatError, Theme, TimeFormat,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_daily(json: &str) -> Result<Option<DailyPrayerTimes>, SalatError> {
    serde_json::from_str(json).map_err(|e| SalatError::malformed(format!("Schedule JSON: {}", e)))
}

fn parse_theme(theme: &str) -> Result<Theme, SalatError> {
    theme.parse()
}

fn parse_time_format(format: &str) -> Result<TimeFormat, SalatError> {
    format.parse()
}

/// JS numbers carry epoch milliseconds as f64.
fn millis(ms: f64) -> i64 {
    ms as i64
}

/// Converts a location-local `HH:MM` to epoch milliseconds on the date
/// `referenceMs` falls on in `timezone`.
///
/// # Example (JavaScript)
/// ```js
/// const ms = resolveInstant("15:30 (EET)", Date.now(), "Africa/Cairo");
/// ```
#[wasm_bindgen(js_name = resolveInstant)]
pub fn resolve_instant_js(local_time: &str, reference_ms: f64, timezone: &str) -> Result<f64, JsValue> {
    let reference = chrono::DateTime::from_timestamp_millis(millis(reference_ms))
        .ok_or_else(|| JsValue::from_str("Reference instant out of range"))?;
    resolve_instant(local_time, reference, timezone)
        .map(|ms| ms as f64)
        .map_err(js_err)
}

/// Countdown state for one tick.
///
/// # Example (JavaScript)
/// ```js
/// const c = countdown(JSON.stringify(daily), Date.now());
/// console.log(c.nextPrayer, c.hours, c.minutes, c.seconds);
/// ```
#[wasm_bindgen]
pub fn countdown(daily_json: &str, now_ms: f64) -> Result<JsValue, JsValue> {
    let daily = parse_daily(daily_json).map_err(js_err)?;
    let state = CountdownState::evaluate(daily.as_ref(), millis(now_ms));
    serde_wasm_bindgen::to_value(&WasmCountdown::from(state)).map_err(js_err)
}

/// Interpolated palette between two periods (`"pre-fajr"`, `"fajr"`, ...).
#[wasm_bindgen]
pub fn gradient(current: &str, next: &str, progress: f64, theme: &str) -> Result<JsValue, JsValue> {
    let current: PrayerPeriod = current.parse().map_err(js_err)?;
    let next: PrayerPeriod = next.parse().map_err(js_err)?;
    let theme = parse_theme(theme).map_err(js_err)?;
    let palette = interpolate(current, next, progress, theme);
    serde_wasm_bindgen::to_value(&WasmGradient::from(palette)).map_err(js_err)
}

/// Palette for the schedule at `nowMs`.
#[wasm_bindgen]
pub fn ambient(daily_json: &str, now_ms: f64, theme: &str) -> Result<JsValue, JsValue> {
    let daily = parse_daily(daily_json).map_err(js_err)?;
    let theme = parse_theme(theme).map_err(js_err)?;
    let palette = ambient_palette(daily.as_ref(), millis(now_ms), theme);
    serde_wasm_bindgen::to_value(&WasmGradient::from(palette)).map_err(js_err)
}

/// Calculation method id for an ISO country code.
#[wasm_bindgen(js_name = suggestMethod)]
pub fn suggest_method_js(country_code: &str) -> u8 {
    suggest_method(country_code).id()
}

/// `"12h"` or `"24h"` rendering of a `HH:MM` string.
#[wasm_bindgen(js_name = formatTime)]
pub fn format_time(local_time: &str, format: &str) -> Result<String, JsValue> {
    let format = parse_time_format(format).map_err(js_err)?;
    salat_core::format_prayer_time(local_time, format).map_err(js_err)
}

/// Display strings for the Hijri and Gregorian dates carried by a schedule.
///
/// # Example (JavaScript)
/// ```js
/// const d = dates(JSON.stringify(daily), "ar");
/// header.textContent = d.hijri ?? "";
/// ```
#[wasm_bindgen]
pub fn dates(daily_json: &str, language: &str) -> Result<JsValue, JsValue> {
    let daily = parse_daily(daily_json).map_err(js_err)?;
    let language: Language = language.parse().map_err(js_err)?;
    let out = WasmDates::render(daily.as_ref(), language);
    serde_wasm_bindgen::to_value(&out).map_err(js_err)
}

/// Class-based API holding one day of prayer times.
///
/// # Example (JavaScript)
/// ```js
/// const clock = new SalatClock(JSON.stringify(daily), "dark");
/// setInterval(() => render(clock.countdown(Date.now())), 1000);
/// setInterval(() => paint(clock.ambient(Date.now())), 30000);
/// ```
#[wasm_bindgen]
pub struct SalatClock {
    inner: PrayerClock,
}

#[wasm_bindgen]
impl SalatClock {
    #[wasm_bindgen(constructor)]
    pub fn new(daily_json: &str, theme: &str) -> Result<SalatClock, JsValue> {
        console_error_panic_hook::set_once();
        let theme = parse_theme(theme).map_err(js_err)?;
        let inner = match parse_daily(daily_json).map_err(js_err)? {
            Some(daily) => PrayerClock::with_daily(daily, theme),
            None => PrayerClock::new(theme),
        };
        Ok(SalatClock { inner })
    }

    /// Replaces the held schedule.
    pub fn load(&mut self, daily_json: &str) -> Result<(), JsValue> {
        match parse_daily(daily_json).map_err(js_err)? {
            Some(daily) => {
                self.inner.replace(daily);
            }
            None => self.inner.clear(),
        }
        Ok(())
    }

    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&mut self, theme: &str) -> Result<(), JsValue> {
        self.inner.set_theme(parse_theme(theme).map_err(js_err)?);
        Ok(())
    }

    pub fn countdown(&self, now_ms: f64) -> Result<JsValue, JsValue> {
        let state = self.inner.countdown(millis(now_ms));
        serde_wasm_bindgen::to_value(&WasmCountdown::from(state)).map_err(js_err)
    }

    pub fn ambient(&self, now_ms: f64) -> Result<JsValue, JsValue> {
        let palette = self.inner.ambient(millis(now_ms));
        serde_wasm_bindgen::to_value(&WasmGradient::from(palette)).map_err(js_err)
    }

    /// True when the held data was fetched on an earlier day in the
    /// schedule's own timezone.
    #[wasm_bindgen(js_name = isStale)]
    pub fn is_stale(&self, now_ms: f64) -> bool {
        let Some(daily) = self.inner.daily() else {
            return true;
        };
        let Some(now) = chrono::DateTime::from_timestamp_millis(millis(now_ms)) else {
            return true;
        };
        match salat_core::time::parse_timezone(&daily.timezone) {
            Ok(tz) => self.inner.needs_refresh(now, &tz),
            Err(_) => self.inner.needs_refresh(now, &chrono::Utc),
        }
    }
}

/// WASM-friendly representation of CountdownState for TypeScript generation.
#[derive(Debug, PartialEq, Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct WasmCountdown {
    pub hours: u32,
    pub minutes: u8,
    pub seconds: u8,
    pub total_seconds: f64,
    pub current_prayer: Option<String>,
    pub next_prayer: Option<String>,
    pub progress_percent: u8,
    pub label: String,
}

impl From<CountdownState> for WasmCountdown {
    fn from(state: CountdownState) -> Self {
        Self {
            hours: u32::try_from(state.hours).unwrap_or(u32::MAX),
            minutes: state.minutes,
            seconds: state.seconds,
            total_seconds: state.total_seconds as f64,
            current_prayer: state.current_prayer.map(|p| p.to_string()),
            next_prayer: state.next_prayer.map(|p| p.to_string()),
            progress_percent: state.progress_percent,
            label: state.parts().to_string(),
        }
    }
}

/// WASM-friendly representation of GradientPalette: hex strings plus the
/// CSS custom property declarations the page applies.
#[derive(Debug, PartialEq, Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct WasmGradient {
    pub from: String,
    pub via: String,
    pub to: String,
    pub css: String,
}

impl From<GradientPalette> for WasmGradient {
    fn from(palette: GradientPalette) -> Self {
        Self {
            from: palette.from.to_string(),
            via: palette.via_or_from().to_string(),
            to: palette.to.to_string(),
            css: palette
                .css_vars()
                .iter()
                .map(|(k, v)| format!("{}: {};", k, v))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

#[derive(Debug, Default, PartialEq, Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
pub struct WasmDates {
    pub hijri: Option<String>,
    pub gregorian: Option<String>,
}

impl WasmDates {
    fn render(daily: Option<&DailyPrayerTimes>, language: Language) -> Self {
        let Some(daily) = daily else {
            return Self::default();
        };
        Self {
            hijri: daily.hijri.as_ref().map(|d| format_hijri_date(d, language)),
            gregorian: daily.gregorian.as_ref().map(|d| format_gregorian_date(d, language)),
        }
    }
}

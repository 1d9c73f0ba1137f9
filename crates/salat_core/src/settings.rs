//! User configuration forwarded to the prayer-time source and renderer.
//!
//! Persisting these is the caller's job; `from_json`/`to_json` give it a
//! stable wire form.

use salat_types::{
    AsrSchool, CalculationMethod, HijriAdjustment, Language, Location, SalatError, Theme,
    TimeFormat,
};
use serde::{Deserialize, Serialize};

use crate::region::suggest_method;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub language: Language,
    pub theme: Theme,
    pub method: CalculationMethod,
    pub school: AsrSchool,
    pub hijri_adjustment: HijriAdjustment,
    pub time_format: TimeFormat,
    pub location: Option<Location>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            theme: Theme::default(),
            method: CalculationMethod::default(),
            school: AsrSchool::default(),
            hijri_adjustment: HijriAdjustment::default(),
            time_format: TimeFormat::default(),
            location: None,
        }
    }
}

impl Settings {
    pub fn new() -> Self { Self::default() }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn method(mut self, method: CalculationMethod) -> Self {
        self.method = method;
        self
    }

    pub fn school(mut self, school: AsrSchool) -> Self {
        self.school = school;
        self
    }

    /// Clamps to [-2, 2]. Use [`SettingsBuilder`] to reject instead.
    pub fn hijri_adjustment(mut self, days: i64) -> Self {
        self.hijri_adjustment = HijriAdjustment::saturating(days);
        self
    }

    pub fn time_format(mut self, format: TimeFormat) -> Self {
        self.time_format = format;
        self
    }

    pub fn location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Method suggested for the configured location's country, if any.
    pub fn suggested_method(&self) -> Option<CalculationMethod> {
        self.location
            .as_ref()
            .filter(|l| !l.country_code.is_empty())
            .map(|l| suggest_method(&l.country_code))
    }

    pub fn from_json(json: &str) -> Result<Self, SalatError> {
        serde_json::from_str(json)
            .map_err(|e| SalatError::invalid_config(format!("Settings JSON: {}", e)))
    }

    pub fn to_json(&self) -> Result<String, SalatError> {
        serde_json::to_string(self)
            .map_err(|e| SalatError::invalid_config(format!("Settings JSON: {}", e)))
    }
}

/// Builder with validation for `Settings`.
///
/// Takes raw ids as they arrive from forms or storage and rejects anything
/// the source would not understand.
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    language: Option<Language>,
    theme: Option<Theme>,
    method_id: Option<u8>,
    school_id: Option<u8>,
    adjustment: Option<i8>,
    time_format: Option<TimeFormat>,
    location: Option<Location>,
    method_from_region: bool,
}

impl SettingsBuilder {
    pub fn new() -> Self { Self::default() }

    pub fn language(mut self, language: Language) -> Self { self.language = Some(language); self }
    pub fn theme(mut self, theme: Theme) -> Self { self.theme = Some(theme); self }
    pub fn method_id(mut self, id: u8) -> Self { self.method_id = Some(id); self }
    pub fn school_id(mut self, id: u8) -> Self { self.school_id = Some(id); self }
    pub fn hijri_adjustment(mut self, days: i8) -> Self { self.adjustment = Some(days); self }
    pub fn time_format(mut self, format: TimeFormat) -> Self { self.time_format = Some(format); self }
    pub fn location(mut self, location: Location) -> Self { self.location = Some(location); self }

    /// Use the region suggestion when no explicit method id is given.
    pub fn method_from_region(mut self, enabled: bool) -> Self { self.method_from_region = enabled; self }

    /// Builds and validates.
    pub fn build(self) -> Result<Settings, SalatError> {
        let method = match (self.method_id, &self.location) {
            (Some(id), _) => CalculationMethod::try_from(id)?,
            (None, Some(loc)) if self.method_from_region && !loc.country_code.is_empty() => {
                suggest_method(&loc.country_code)
            }
            (None, _) => CalculationMethod::default(),
        };

        Ok(Settings {
            language: self.language.unwrap_or_default(),
            theme: self.theme.unwrap_or_default(),
            method,
            school: self.school_id.map(AsrSchool::try_from).transpose()?.unwrap_or_default(),
            hijri_adjustment: self.adjustment.map(HijriAdjustment::new).transpose()?.unwrap_or_default(),
            time_format: self.time_format.unwrap_or_default(),
            location: self.location,
        })
    }
}

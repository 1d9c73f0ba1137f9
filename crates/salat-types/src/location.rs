use serde::{Deserialize, Serialize};

use crate::error::SalatError;

/// A user's location as handed to the prayer-time source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub country: String,
    /// ISO 3166-1 alpha-2, upper case.
    pub country_code: String,
}

impl Location {
    /// Creates a location with validated coordinates and no place name.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if latitude is outside [-90, 90]
    /// or longitude outside [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, SalatError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(SalatError::invalid_config(format!(
                "Latitude {} outside [-90, 90]",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(SalatError::invalid_config(format!(
                "Longitude {} outside [-180, 180]",
                longitude
            )));
        }
        Ok(Self {
            latitude,
            longitude,
            city: String::new(),
            country: String::new(),
            country_code: String::new(),
        })
    }

    pub fn with_place(
        mut self,
        city: impl Into<String>,
        country: impl Into<String>,
        country_code: impl AsRef<str>,
    ) -> Self {
        self.city = city.into();
        self.country = country.into();
        self.country_code = country_code.as_ref().to_ascii_uppercase();
        self
    }

    /// Returns "City, Country", falling back to coordinates.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.city.as_str(), self.country.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            format!("{:.4}°, {:.4}°", self.latitude, self.longitude)
        } else {
            parts.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range() {
        assert!(Location::new(91.0, 0.0).is_err());
        assert!(Location::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_display_name() {
        let loc = Location::new(30.0444, 31.2357).unwrap().with_place("Cairo", "Egypt", "eg");
        assert_eq!(loc.display_name(), "Cairo, Egypt");
        assert_eq!(loc.country_code, "EG");

        let bare = Location::new(-6.2088, 106.8456).unwrap();
        assert!(bare.display_name().contains("-6.2088"));
    }
}

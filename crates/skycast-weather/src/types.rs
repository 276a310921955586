//! Domain types shared across the weather crate.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A geocoded place, as returned by the geocoding collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    /// State or province.
    #[serde(default)]
    pub admin1: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Coordinate-only record used when reverse geocoding fails.
    pub fn fallback(latitude: f64, longitude: f64) -> Self {
        Self {
            name: "Your Location".to_string(),
            country: None,
            admin1: None,
            latitude,
            longitude,
        }
    }

    /// "Name, Region, Country" with empty parts omitted. The region is
    /// dropped when it merely repeats the name.
    pub fn label(&self) -> String {
        let mut label = self.name.clone();
        if let Some(admin1) = self
            .admin1
            .as_deref()
            .filter(|a| !a.is_empty() && *a != self.name)
        {
            label.push_str(", ");
            label.push_str(admin1);
        }
        if let Some(country) = self.country.as_deref().filter(|c| !c.is_empty()) {
            label.push_str(", ");
            label.push_str(country);
        }
        label
    }
}

/// Single-point current conditions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub apparent_temperature: f64,
    pub weather_code: i32,
    pub wind_speed_10m: f64,
    #[serde(default)]
    pub uv_index: Option<f64>,
}

/// Hourly forecast as parallel arrays, all the same length as `time`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<NaiveDateTime>,
    pub temperature_2m: Vec<f64>,
    pub weather_code: Vec<i32>,
}

impl HourlySeries {
    pub fn validate(&self) -> Result<(), WeatherError> {
        let len = self.time.len();
        if self.temperature_2m.len() != len || self.weather_code.len() != len {
            return Err(WeatherError::MalformedSnapshot(
                "hourly arrays differ in length".to_string(),
            ));
        }
        if self.time.windows(2).any(|w| w[0] > w[1]) {
            return Err(WeatherError::MalformedSnapshot(
                "hourly timestamps are not in order".to_string(),
            ));
        }
        Ok(())
    }
}

/// Daily forecast as parallel arrays, all the same length as `time`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySeries {
    pub time: Vec<NaiveDate>,
    pub weather_code: Vec<i32>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
}

impl DailySeries {
    pub fn validate(&self) -> Result<(), WeatherError> {
        let len = self.time.len();
        if self.weather_code.len() != len
            || self.temperature_2m_max.len() != len
            || self.temperature_2m_min.len() != len
        {
            return Err(WeatherError::MalformedSnapshot(
                "daily arrays differ in length".to_string(),
            ));
        }
        if self.time.windows(2).any(|w| w[0] > w[1]) {
            return Err(WeatherError::MalformedSnapshot(
                "daily dates are not in order".to_string(),
            ));
        }
        Ok(())
    }
}

/// One complete fetch result. A new snapshot fully replaces the previous
/// one; there is no merging of partial results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSnapshot {
    pub current: Option<CurrentConditions>,
    pub hourly: Option<HourlySeries>,
    pub daily: Option<DailySeries>,
}

impl ForecastSnapshot {
    /// Check the parallel-array invariants of whatever series are present.
    /// Absent series are fine here; the normalizer degrades them to
    /// placeholders.
    pub fn validate(&self) -> Result<(), WeatherError> {
        if let Some(hourly) = &self.hourly {
            hourly.validate()?;
        }
        if let Some(daily) = &self.daily {
            daily.validate()?;
        }
        Ok(())
    }
}

/// Weather service errors.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Location not found: {0}")]
    LocationNotFound(String),
    #[error("Malformed snapshot: {0}")]
    MalformedSnapshot(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(name: &str, admin1: Option<&str>, country: Option<&str>) -> Location {
        Location {
            name: name.to_string(),
            country: country.map(String::from),
            admin1: admin1.map(String::from),
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    #[test]
    fn test_label_joins_all_parts() {
        let loc = location("Austin", Some("Texas"), Some("United States"));
        assert_eq!(loc.label(), "Austin, Texas, United States");
    }

    #[test]
    fn test_label_omits_empty_parts() {
        assert_eq!(location("Paris", None, Some("France")).label(), "Paris, France");
        assert_eq!(location("Paris", Some(""), Some("")).label(), "Paris");
        assert_eq!(location("Paris", None, None).label(), "Paris");
    }

    #[test]
    fn test_label_drops_region_duplicating_name() {
        let loc = location("Singapore", Some("Singapore"), Some("Singapore"));
        assert_eq!(loc.label(), "Singapore, Singapore");
    }

    #[test]
    fn test_fallback_location() {
        let loc = Location::fallback(47.6, -122.3);
        assert_eq!(loc.name, "Your Location");
        assert_eq!(loc.label(), "Your Location");
    }

    #[test]
    fn test_hourly_validate_rejects_length_mismatch() {
        let series = HourlySeries {
            time: vec![],
            temperature_2m: vec![18.0],
            weather_code: vec![],
        };
        assert!(matches!(
            series.validate(),
            Err(WeatherError::MalformedSnapshot(_))
        ));
    }

    #[test]
    fn test_daily_validate_rejects_unordered_dates() {
        let d1 = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let series = DailySeries {
            time: vec![d1, d2],
            weather_code: vec![0, 0],
            temperature_2m_max: vec![20.0, 21.0],
            temperature_2m_min: vec![10.0, 11.0],
        };
        assert!(series.validate().is_err());
    }

    #[test]
    fn test_snapshot_validate_allows_absent_series() {
        let snapshot = ForecastSnapshot {
            current: None,
            hourly: None,
            daily: None,
        };
        assert!(snapshot.validate().is_ok());
    }
}

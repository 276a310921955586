//! Unit conversions for temperature and wind speed.
//!
//! All conversions round half-away-from-zero (`f64::round`): 65.5 becomes 66
//! and -0.5 becomes -1. Round-tripping through the integer inverses lands
//! within one unit of the input; the loss comes from rounding, not a bug.

use serde::{Deserialize, Serialize};

/// Temperature unit preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

/// Wind speed unit preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WindUnit {
    #[default]
    Kmh,
    Mph,
}

impl WindUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Kmh => "km/h",
            Self::Mph => "mph",
        }
    }
}

/// Temperature and wind units, selected independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UnitPreference {
    #[serde(default)]
    pub temperature: TemperatureUnit,
    #[serde(default)]
    pub wind: WindUnit,
}

pub fn celsius_to_fahrenheit(celsius: f64) -> i32 {
    (celsius * 9.0 / 5.0 + 32.0).round() as i32
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> i32 {
    ((fahrenheit - 32.0) * 5.0 / 9.0).round() as i32
}

pub fn kmh_to_mph(kmh: f64) -> i32 {
    (kmh * 0.621371).round() as i32
}

pub fn mph_to_kmh(mph: f64) -> i32 {
    (mph * 1.60934).round() as i32
}

/// Temperature in the preferred unit, rounded to a whole degree.
pub fn temperature(celsius: f64, unit: TemperatureUnit) -> i32 {
    match unit {
        TemperatureUnit::Celsius => celsius.round() as i32,
        TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(celsius),
    }
}

/// Wind speed in the preferred unit, rounded to a whole number.
pub fn wind_speed(kmh: f64, unit: WindUnit) -> i32 {
    match unit {
        WindUnit::Kmh => kmh.round() as i32,
        WindUnit::Mph => kmh_to_mph(kmh),
    }
}

/// Display form, e.g. "18°C" or "65°F".
pub fn format_temperature(celsius: f64, unit: TemperatureUnit) -> String {
    format!("{}{}", temperature(celsius, unit), unit.suffix())
}

/// Display form, e.g. "15 km/h" or "9 mph".
pub fn format_wind_speed(kmh: f64, unit: WindUnit) -> String {
    format!("{} {}", wind_speed(kmh, unit), unit.suffix())
}

//! Forecast normalization for Skycast.
//!
//! Turns raw Open-Meteo time-series data plus a unit preference into a
//! renderer-agnostic view model: weather-code catalog, unit conversion,
//! time-series sampling, and view-model assembly, along with the geocoding
//! and forecast collaborators that feed them.

pub mod codes;
pub mod geocode;
pub mod provider;
pub mod sample;
pub mod types;
pub mod units;
pub mod view;

pub use geocode::GeocodingClient;
pub use provider::WeatherProvider;
pub use types::{
    CurrentConditions, DailySeries, ForecastSnapshot, HourlySeries, Location, WeatherError,
};
pub use units::{TemperatureUnit, UnitPreference, WindUnit};
pub use view::{build_view_model, DailyEntry, HourlyEntry, ViewModel};

//! Forecast provider: one Open-Meteo call per refresh, decoded into a
//! `ForecastSnapshot`. The snapshot fully replaces any prior one; partial
//! payloads are kept as-is and degraded at render time.

use chrono::{NaiveDate, NaiveDateTime};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::instrument;

use crate::types::{
    CurrentConditions, DailySeries, ForecastSnapshot, HourlySeries, Location, WeatherError,
};

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const REQUEST_TIMEOUT_SECS: u64 = 10;
/// Seven days covers the daily strip plus tomorrow's hourly spillover.
const FORECAST_DAYS: u8 = 7;

const CURRENT_VARS: &str =
    "temperature_2m,relative_humidity_2m,apparent_temperature,weather_code,wind_speed_10m,uv_index";
const HOURLY_VARS: &str = "temperature_2m,weather_code";
const DAILY_VARS: &str = "weather_code,temperature_2m_max,temperature_2m_min";

// Wire shapes. Open-Meteo emits timezone-local timestamps without seconds
// ("2026-08-29T14:00"), so times come in as strings and are parsed here.

#[derive(Debug, Deserialize)]
struct ApiForecast {
    #[serde(default)]
    current: Option<ApiCurrent>,
    #[serde(default)]
    hourly: Option<ApiHourly>,
    #[serde(default)]
    daily: Option<ApiDaily>,
}

#[derive(Debug, Deserialize)]
struct ApiCurrent {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    apparent_temperature: f64,
    weather_code: i32,
    wind_speed_10m: f64,
    #[serde(default)]
    uv_index: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ApiHourly {
    time: Vec<String>,
    temperature_2m: Vec<f64>,
    weather_code: Vec<i32>,
}

#[derive(Debug, Deserialize)]
struct ApiDaily {
    time: Vec<String>,
    weather_code: Vec<i32>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
}

impl From<ApiCurrent> for CurrentConditions {
    fn from(api: ApiCurrent) -> Self {
        Self {
            temperature_2m: api.temperature_2m,
            relative_humidity_2m: api.relative_humidity_2m,
            apparent_temperature: api.apparent_temperature,
            weather_code: api.weather_code,
            wind_speed_10m: api.wind_speed_10m,
            uv_index: api.uv_index,
        }
    }
}

impl TryFrom<ApiHourly> for HourlySeries {
    type Error = WeatherError;

    fn try_from(api: ApiHourly) -> Result<Self, WeatherError> {
        let time = api
            .time
            .iter()
            .map(|s| parse_local_time(s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            time,
            temperature_2m: api.temperature_2m,
            weather_code: api.weather_code,
        })
    }
}

impl TryFrom<ApiDaily> for DailySeries {
    type Error = WeatherError;

    fn try_from(api: ApiDaily) -> Result<Self, WeatherError> {
        let time = api
            .time
            .iter()
            .map(|s| parse_local_date(s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            time,
            weather_code: api.weather_code,
            temperature_2m_max: api.temperature_2m_max,
            temperature_2m_min: api.temperature_2m_min,
        })
    }
}

fn parse_local_time(s: &str) -> Result<NaiveDateTime, WeatherError> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| WeatherError::Parse(format!("bad timestamp {s:?}: {e}")))
}

fn parse_local_date(s: &str) -> Result<NaiveDate, WeatherError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| WeatherError::Parse(format!("bad date {s:?}: {e}")))
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    base_url: String,
}

impl WeatherProvider {
    /// Create a provider against the production endpoint.
    ///
    /// # Errors
    ///
    /// `WeatherError::Network` when the HTTP client cannot be built.
    pub fn new() -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: FORECAST_URL.to_string(),
        })
    }

    #[cfg(test)]
    pub fn new_with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    /// Fetch a fresh snapshot for `location`. No retries here; retry policy
    /// belongs to the caller.
    ///
    /// # Errors
    ///
    /// `Network` on transport failures, `Parse` on bad payloads or non-2xx
    /// statuses, `MalformedSnapshot` when parallel arrays disagree.
    #[instrument(skip(self, location), level = "info", fields(name = %location.name))]
    pub async fn fetch_forecast(
        &self,
        location: &Location,
    ) -> Result<ForecastSnapshot, WeatherError> {
        let url = format!(
            "{}?latitude={}&longitude={}&current={}&hourly={}&daily={}&timezone=auto&forecast_days={}",
            self.base_url,
            location.latitude,
            location.longitude,
            CURRENT_VARS,
            HOURLY_VARS,
            DAILY_VARS,
            FORECAST_DAYS,
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(WeatherError::Parse(format!(
                "forecast API returned status {}",
                response.status()
            )));
        }

        let api: ApiForecast = response.json().await?;
        let snapshot = ForecastSnapshot {
            current: api.current.map(CurrentConditions::from),
            hourly: api.hourly.map(HourlySeries::try_from).transpose()?,
            daily: api.daily.map(DailySeries::try_from).transpose()?,
        };
        snapshot.validate()?;

        tracing::info!(
            hourly_points = snapshot.hourly.as_ref().map_or(0, |h| h.time.len()),
            daily_points = snapshot.daily.as_ref().map_or(0, |d| d.time.len()),
            "forecast snapshot received"
        );
        Ok(snapshot)
    }
}

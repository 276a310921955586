//! Geocoding via the Open-Meteo geocoding API: city search and reverse
//! lookup. Free, no API key required.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::instrument;

use crate::types::{Location, WeatherError};

const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    admin1: Option<String>,
    latitude: f64,
    longitude: f64,
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        Self {
            name: result.name,
            country: result.country,
            admin1: result.admin1,
            latitude: result.latitude,
            longitude: result.longitude,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: Client,
    base_url: String,
}

impl GeocodingClient {
    /// Create a client with the production endpoint.
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
            base_url: GEOCODING_URL.to_string(),
        })
    }

    #[cfg(test)]
    pub fn new_with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    /// Search for a city by name; the first match wins.
    ///
    /// # Errors
    ///
    /// `WeatherError::LocationNotFound` when the API has no match,
    /// `Network`/`Parse` on transport or decode failures.
    #[instrument(skip(self), level = "info")]
    pub async fn search_city(&self, name: &str) -> Result<Location, WeatherError> {
        let url = format!(
            "{}?name={}&count=1&language=en&format=json",
            self.base_url,
            urlencoding::encode(name)
        );
        let result = self.fetch_first(&url).await?;
        match result {
            Some(first) => {
                let location = Location::from(first);
                tracing::info!("found city: {}", location.label());
                Ok(location)
            }
            None => Err(WeatherError::LocationNotFound(name.to_string())),
        }
    }

    /// Resolve coordinates to a place name. Never fails: any error degrades
    /// to a coordinate-only "Your Location" record so the forecast fetch can
    /// still proceed.
    #[instrument(skip(self), level = "info")]
    pub async fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Location {
        let url = format!(
            "{}?latitude={}&longitude={}&count=1&language=en&format=json",
            self.base_url, latitude, longitude
        );
        match self.fetch_first(&url).await {
            Ok(Some(result)) => {
                let location = Location::from(result);
                tracing::info!("reverse geocoded to: {}", location.label());
                location
            }
            Ok(None) => {
                tracing::debug!("no reverse geocoding match, using coordinates");
                Location::fallback(latitude, longitude)
            }
            Err(e) => {
                tracing::debug!("reverse geocode failed: {}", e);
                Location::fallback(latitude, longitude)
            }
        }
    }

    async fn fetch_first(&self, url: &str) -> Result<Option<GeocodingResult>, WeatherError> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(WeatherError::Parse(format!(
                "geocoding API returned status {}",
                response.status()
            )));
        }
        let body: GeocodingResponse = response.json().await?;
        Ok(body.results.into_iter().flatten().next())
    }
}

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{FetchError, FetchResultExt},
    model::{Coordinates, WeatherSnapshot},
};

use super::{SourceId, WeatherSource, truncate_body};

pub const DEFAULT_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Open-Meteo forecast endpoint, queried for its `current_weather` block only.
#[derive(Debug, Clone)]
pub struct OpenMeteoSource {
    url: String,
    http: Client,
}

impl OpenMeteoSource {
    pub fn new(url: String) -> Self {
        Self::with_client(url, Client::new())
    }

    pub fn with_client(url: String, http: Client) -> Self {
        Self { url, http }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_current(&self, coordinates: Coordinates) -> Result<WeatherSnapshot> {
        debug!(
            url = %self.url,
            latitude = coordinates.latitude,
            longitude = coordinates.longitude,
            "requesting current weather"
        );

        let res = self
            .http
            .get(&self.url)
            .query(&[
                ("latitude", coordinates.latitude.to_string()),
                ("longitude", coordinates.longitude.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .send()
            .await
            .context("Failed to send request to Open-Meteo (current weather)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read Open-Meteo current weather response body")?;

        decode(status, &body)
    }
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: i64,
}

#[derive(Debug, Deserialize)]
struct OmResponse {
    current_weather: OmCurrentWeather,
}

fn decode(status: StatusCode, body: &str) -> Result<WeatherSnapshot> {
    if !status.is_success() {
        return Err(anyhow!(
            "Open-Meteo current weather request failed with status {}: {}",
            status,
            truncate_body(body),
        ));
    }

    let parsed: OmResponse =
        serde_json::from_str(body).context("Failed to parse Open-Meteo current weather JSON")?;
    let current = parsed.current_weather;

    Ok(WeatherSnapshot {
        temperature_celsius: current.temperature,
        windspeed_kmh: current.windspeed,
        weather_code: current.weathercode,
    })
}

#[async_trait]
impl WeatherSource for OpenMeteoSource {
    async fn fetch(&self, coordinates: Coordinates) -> Result<WeatherSnapshot, FetchError> {
        self.fetch_current(coordinates).await.from_source(SourceId::Weather)
    }
}

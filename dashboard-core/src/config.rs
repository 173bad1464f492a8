use anyhow::{Context, Result, anyhow, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{
    model::Coordinates,
    source::{openmeteo, timeapi},
};

/// Where to ask for the current date and time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateTimeConfig {
    pub url: String,
}

impl Default for DateTimeConfig {
    fn default() -> Self {
        Self { url: timeapi::DEFAULT_URL.to_string() }
    }
}

/// Weather endpoint and the fixed location it is queried for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub url: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl WeatherConfig {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        let Coordinates { latitude, longitude } = Coordinates::default();
        Self { url: openmeteo::DEFAULT_URL.to_string(), latitude, longitude }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// [datetime]
/// url = "https://api-data-hora-1-zkye.onrender.com/datetime"
///
/// [weather]
/// url = "https://api.open-meteo.com/v1/forecast"
/// latitude = -23.5505
/// longitude = -46.6333
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub datetime: DateTimeConfig,
    pub weather: WeatherConfig,
}

impl Config {
    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.validate()?;
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "dashboard", "dashboard-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        validate_latitude(self.weather.latitude)?;
        validate_longitude(self.weather.longitude)?;

        if self.datetime.url.trim().is_empty() {
            bail!("Time service URL must not be empty");
        }
        if self.weather.url.trim().is_empty() {
            bail!("Weather service URL must not be empty");
        }

        Ok(())
    }

    pub fn set_coordinates(&mut self, coordinates: Coordinates) -> Result<()> {
        validate_latitude(coordinates.latitude)?;
        validate_longitude(coordinates.longitude)?;

        self.weather.latitude = coordinates.latitude;
        self.weather.longitude = coordinates.longitude;
        Ok(())
    }
}

pub fn validate_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        bail!("Latitude {latitude} is out of range; expected -90 to 90");
    }
    Ok(())
}

pub fn validate_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        bail!("Longitude {longitude} is out of range; expected -180 to 180");
    }
    Ok(())
}

use crate::{
    Config, DateTimeSnapshot, FetchError, WeatherSnapshot,
    model::Coordinates,
    source::{openmeteo::OpenMeteoSource, timeapi::TimeApiSource},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openmeteo;
pub mod timeapi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceId {
    DateTime,
    Weather,
}

impl SourceId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceId::DateTime => "datetime",
            SourceId::Weather => "weather",
        }
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remote service answering "what is the date and time right now".
#[async_trait]
pub trait DateTimeSource: Send + Sync + Debug {
    async fn fetch(&self) -> Result<DateTimeSnapshot, FetchError>;
}

/// Remote service reporting current conditions at a coordinate.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch(&self, coordinates: Coordinates) -> Result<WeatherSnapshot, FetchError>;
}

/// Build the HTTP-backed sources described by `config`. Both share one
/// connection pool.
pub fn sources_from_config(config: &Config) -> (TimeApiSource, OpenMeteoSource) {
    let http = reqwest::Client::new();

    (
        TimeApiSource::with_client(config.datetime.url.clone(), http.clone()),
        OpenMeteoSource::with_client(config.weather.url.clone(), http),
    )
}

pub(crate) fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body;
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{FetchError, FetchResultExt},
    model::DateTimeSnapshot,
};

use super::{DateTimeSource, SourceId, truncate_body};

pub const DEFAULT_URL: &str = "https://api-data-hora-1-zkye.onrender.com/datetime";

/// Date/time service answering a bare GET with `{"date": ..., "time": ...}`.
#[derive(Debug, Clone)]
pub struct TimeApiSource {
    url: String,
    http: Client,
}

impl TimeApiSource {
    pub fn new(url: String) -> Self {
        Self::with_client(url, Client::new())
    }

    pub fn with_client(url: String, http: Client) -> Self {
        Self { url, http }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_now(&self) -> Result<DateTimeSnapshot> {
        debug!(url = %self.url, "requesting current date/time");

        let res = self
            .http
            .get(&self.url)
            .send()
            .await
            .context("Failed to send request to time service")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read time service response body")?;

        decode(status, &body)
    }
}

#[derive(Debug, Deserialize)]
struct TaResponse {
    date: String,
    time: String,
}

fn decode(status: StatusCode, body: &str) -> Result<DateTimeSnapshot> {
    if !status.is_success() {
        return Err(anyhow!(
            "Time service request failed with status {}: {}",
            status,
            truncate_body(body),
        ));
    }

    let parsed: TaResponse =
        serde_json::from_str(body).context("Failed to parse time service JSON")?;

    Ok(DateTimeSnapshot { date: parsed.date, time: parsed.time })
}

#[async_trait]
impl DateTimeSource for TimeApiSource {
    async fn fetch(&self) -> Result<DateTimeSnapshot, FetchError> {
        self.fetch_now().await.from_source(SourceId::DateTime)
    }
}

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Number;
use tracing::{debug, warn};

use crate::model::WeatherReading;

use super::WeatherProvider;

pub const CURRENT_URL: &str = "https://api.weatherapi.com/v1/current.json";

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, CURRENT_URL)
    }

    /// Point the provider at another `current.json` endpoint.
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self { api_key, base_url: base_url.into(), http: Client::new() }
    }

    async fn fetch_current(&self, city: &str) -> Result<Option<WeatherReading>> {
        debug!(city, url = %self.base_url, "requesting current weather");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[("key", self.api_key.as_str()), ("q", city)])
            .send()
            .await
            .context("Failed to send request to WeatherAPI.com (current)")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read WeatherAPI current response body")?;
        debug!(%status, "WeatherAPI responded");

        if status != StatusCode::OK {
            warn!(%status, body = %truncate_body(&body), "WeatherAPI current request failed");
            return Ok(None);
        }

        let parsed: WaResponse =
            serde_json::from_str(&body).context("Failed to parse WeatherAPI current JSON")?;

        Ok(Some(WeatherReading {
            local_time: parsed.location.localtime,
            temperature_c: parsed.current.temp_c,
            humidity: parsed.current.humidity,
            condition: parsed.current.condition.text,
        }))
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    localtime: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: Number,
    humidity: u8,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current(&self, city: &str) -> Result<Option<WeatherReading>> {
        self.fetch_current(city).await
    }
}

fn truncate_body(body: &str) -> &str {
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

//! Open-Meteo current-conditions client (no API key).

use crate::domain::clients::WeatherSource;
use crate::domain::weather::CurrentWeather;
use crate::error::ClientError;
use crate::infrastructure::http::{build_client, ensure_success};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";

// Tashkent
const LATITUDE: &str = "41.31";
const LONGITUDE: &str = "69.28";
const TIMEZONE: &str = "Asia/Tashkent";

#[derive(Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    current: Option<CurrentBlock>,
}

#[derive(Deserialize)]
struct CurrentBlock {
    temperature_2m: Option<f64>,
    weather_code: Option<i64>,
}

pub struct OpenMeteoClient {
    http: reqwest::Client,
    endpoint: String,
}

impl OpenMeteoClient {
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, ClientError> {
        Ok(Self {
            http: build_client(timeout)?,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Overrides the forecast endpoint (used against local stubs).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoClient {
    async fn current_weather(&self) -> Result<CurrentWeather, ClientError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("latitude", LATITUDE),
                ("longitude", LONGITUDE),
                ("current", "temperature_2m,weather_code"),
                ("timezone", TIMEZONE),
            ])
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let body = response.text().await?;
        let forecast: ForecastResponse =
            serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))?;

        Ok(forecast
            .current
            .map(|c| CurrentWeather {
                temperature: c.temperature_2m,
                weather_code: c.weather_code,
            })
            .unwrap_or_default())
    }
}

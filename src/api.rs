//! WeatherAPI.com client

use async_trait::async_trait;
use futures_util::future::try_join_all;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE, PRAGMA};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error, instrument, warn};

use crate::models::{LocationCandidate, WeatherData};

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Days requested from `forecast.json`
pub const FORECAST_DAYS: u8 = 7;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// No API key configured; raised before any network I/O
    #[error("weather API key is missing")]
    MissingCredential,

    /// Non-2xx response, with the raw body
    #[error("weather API error ({status}): {body}")]
    Provider { status: u16, body: String },

    /// 2xx response whose body could not be decoded
    #[error("response parse error: {0}")]
    Parse(String),

    /// Transport failure (DNS, connection, body read)
    #[error("request failed: {0}")]
    Request(String),
}

/// Client configuration, built once by the binary and injected into the client
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Provider API key. `None` or blank makes every call fail with
    /// [`WeatherError::MissingCredential`].
    pub credential: Option<String>,
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credential: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(credential: Option<String>) -> Self {
        Self {
            credential,
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn credential(&self) -> Result<&str, WeatherError> {
        self.credential
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(WeatherError::MissingCredential)
    }
}

/// Data access used by the dashboard
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions plus a 7-day forecast for a place name or `"<lat>,<lon>"`.
    async fn fetch_current_weather(&self, query: &str) -> Result<WeatherData, WeatherError>;

    /// Location candidates for a partial place name.
    async fn search_locations(&self, query: &str)
        -> Result<Vec<LocationCandidate>, WeatherError>;

    /// Fetch every city concurrently. Results are positionally matched to `cities`;
    /// the first failure fails the whole batch.
    async fn fetch_major_cities_weather(
        &self,
        cities: &[String],
    ) -> Result<Vec<WeatherData>, WeatherError> {
        let result = try_join_all(cities.iter().map(|city| self.fetch_current_weather(city))).await;
        if let Err(e) = &result {
            warn!(error = %e, count = cities.len(), "major cities fetch failed");
        }
        result
    }
}

/// reqwest-backed [`WeatherProvider`]
#[derive(Debug)]
pub struct WeatherApiClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl WeatherApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn forecast_url(&self, key: &str, query: &str) -> String {
        format!(
            "{}/forecast.json?key={}&q={}&days={}&aqi=no&alerts=no",
            self.config.base_url,
            urlencoding::encode(key),
            urlencoding::encode(query),
            FORECAST_DAYS
        )
    }

    fn search_url(&self, key: &str, query: &str) -> String {
        format!(
            "{}/search.json?key={}&q={}",
            self.config.base_url,
            urlencoding::encode(key),
            urlencoding::encode(query)
        )
    }

    /// GET with caching disabled; decodes the body only after a 2xx status.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, WeatherError> {
        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| WeatherError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::Request(e.to_string()))?;

        if !status.is_success() {
            error!(status = status.as_u16(), body = %body, "weather API error");
            return Err(WeatherError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| WeatherError::Parse(e.to_string()))
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiClient {
    #[instrument(skip(self))]
    async fn fetch_current_weather(&self, query: &str) -> Result<WeatherData, WeatherError> {
        let key = self.config.credential().inspect_err(|_| {
            error!("weather API key is missing; set WEATHER_API_KEY or pass --api-key");
        })?;

        debug!("fetching weather data");
        let data: WeatherData = self.get_json(&self.forecast_url(key, query)).await?;
        debug!(
            location = %data.location.name,
            days = data.forecast.forecastday.len(),
            "weather data fetched"
        );
        Ok(data)
    }

    #[instrument(skip(self))]
    async fn search_locations(
        &self,
        query: &str,
    ) -> Result<Vec<LocationCandidate>, WeatherError> {
        let key = self.config.credential()?;
        self.get_json(&self.search_url(key, query)).await
    }
}

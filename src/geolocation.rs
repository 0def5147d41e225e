//! "My location" lookup

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

pub const DEFAULT_IP_LOOKUP_URL: &str = "http://ip-api.com/json/?fields=status,message,lat,lon";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// `"<lat>,<lon>"`, the provider's coordinate query form
    pub fn query(&self) -> String {
        format!("{},{}", self.lat, self.lon)
    }
}

#[derive(Clone, Debug, Error, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum GeolocationError {
    /// No geolocation capability on this host
    #[error("geolocation is unavailable")]
    Unavailable,

    /// The lookup ran but was refused or failed
    #[error("geolocation failed: {0}")]
    Denied(String),
}

impl GeolocationError {
    /// Fixed advisory shown in place of the dashboard
    pub fn advisory(&self) -> &'static str {
        match self {
            GeolocationError::Unavailable => {
                "Geolocation is not supported on this system. Please try searching manually."
            }
            GeolocationError::Denied(_) => {
                "Could not get your location. Please try searching manually."
            }
        }
    }
}

#[async_trait]
pub trait Geolocator: Send + Sync {
    async fn locate(&self) -> Result<Coordinates, GeolocationError>;
}

/// Approximate position from the public IP address
#[derive(Debug)]
pub struct IpGeolocator {
    client: reqwest::Client,
    url: String,
}

impl Default for IpGeolocator {
    fn default() -> Self {
        Self::new(DEFAULT_IP_LOOKUP_URL)
    }
}

impl IpGeolocator {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    status: String,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

#[async_trait]
impl Geolocator for IpGeolocator {
    #[instrument(skip(self))]
    async fn locate(&self) -> Result<Coordinates, GeolocationError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| GeolocationError::Denied(e.to_string()))?;

        let data: IpLookupResponse = response
            .json()
            .await
            .map_err(|e| GeolocationError::Denied(e.to_string()))?;

        match (data.status.as_str(), data.lat, data.lon) {
            ("success", Some(lat), Some(lon)) => {
                debug!(lat, lon, "located");
                Ok(Coordinates { lat, lon })
            }
            _ => {
                let reason = data.message.unwrap_or(data.status);
                warn!(reason = %reason, "IP geolocation refused");
                Err(GeolocationError::Denied(reason))
            }
        }
    }
}

/// Used when geolocation is switched off
#[derive(Debug, Default)]
pub struct DisabledGeolocator;

#[async_trait]
impl Geolocator for DisabledGeolocator {
    async fn locate(&self) -> Result<Coordinates, GeolocationError> {
        Err(GeolocationError::Unavailable)
    }
}

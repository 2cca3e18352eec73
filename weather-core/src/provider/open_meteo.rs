use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::{config::Location, error::FetchError};

use super::ForecastSource;

pub const DEFAULT_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const CURRENT_FIELDS: &str = "temperature_2m,weathercode,wind_speed_10m,relative_humidity_2m";
pub const DAILY_FIELDS: &str = "weathercode,temperature_2m_max,temperature_2m_min,sunrise,sunset";

#[derive(Debug, Clone)]
pub struct OpenMeteoConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self { endpoint: DEFAULT_ENDPOINT.to_string(), timeout: DEFAULT_TIMEOUT }
    }
}

/// Open-Meteo forecast API. No API key needed.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    endpoint: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(config: OpenMeteoConfig) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(config.timeout).build().map_err(FetchError::Client)?;

        Ok(Self { endpoint: config.endpoint, http })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn query(location: Location) -> [(&'static str, String); 5] {
        [
            ("latitude", location.latitude.to_string()),
            ("longitude", location.longitude.to_string()),
            ("current", CURRENT_FIELDS.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
        ]
    }
}

#[async_trait]
impl ForecastSource for OpenMeteoProvider {
    #[instrument(skip(self), fields(lat = %location.latitude, lon = %location.longitude))]
    async fn fetch(&self, location: Location) -> Result<Value, FetchError> {
        debug!(endpoint = %self.endpoint, "requesting forecast");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&Self::query(location))
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = res.status();
        let body = res.text().await.map_err(FetchError::Body)?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        debug!(%status, bytes = body.len(), "forecast received");
        serde_json::from_str(&body).map_err(FetchError::Decode)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

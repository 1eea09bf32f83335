use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::{error::LookupError, model::WeatherSnapshot};

use super::WeatherProvider;

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_current(&self, city: &str) -> Result<WeatherSnapshot, LookupError> {
        let url = format!("{}{CURRENT_WEATHER_PATH}", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OpenWeather request failed");
                LookupError::Network(e.to_string())
            })?;

        let status = res.status();
        if !status.is_success() {
            debug!(%status, "OpenWeather returned non-success status");
            return Err(LookupError::CityNotFound);
        }

        let body = res.text().await.map_err(|e| {
            warn!(error = %e, "failed to read OpenWeather response body");
            LookupError::Network(e.to_string())
        })?;

        serde_json::from_str::<WeatherSnapshot>(&body).map_err(|e| {
            warn!(error = %e, "failed to parse OpenWeather current JSON");
            LookupError::Parse(e.to_string())
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_by_city(&self, city: &str) -> Result<WeatherSnapshot, LookupError> {
        self.fetch_current(city).await
    }
}

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{Config, LookupError, WeatherSnapshot, provider::openweather::OpenWeatherProvider};

pub mod openweather;

/// Source of current conditions by city name.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_by_city(&self, city: &str) -> Result<WeatherSnapshot, LookupError>;
}

#[async_trait]
impl<P: WeatherProvider + ?Sized> WeatherProvider for Box<P> {
    async fn current_by_city(&self, city: &str) -> Result<WeatherSnapshot, LookupError> {
        (**self).current_by_city(city).await
    }
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.require_api_key()?;
    let provider = OpenWeatherProvider::with_base_url(api_key.to_owned(), &config.api_base_url);
    Ok(Box::new(provider))
}

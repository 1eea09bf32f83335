//! Core library for the `weather` lookup tool.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather client behind a provider trait
//! - The lookup view: query, result state, recent searches, clear
//! - Persistence of recent searches and plain-text rendering
//!
//! It is used by `weather-lookup`, but any front end can drive a
//! [`WeatherView`] and draw it however it likes.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod recent;
pub mod render;
pub mod storage;
pub mod view;

pub use config::Config;
pub use error::{LookupError, StorageError};
pub use model::WeatherSnapshot;
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use recent::RecentSearches;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use view::{LookupOutcome, PendingLookup, WeatherView};

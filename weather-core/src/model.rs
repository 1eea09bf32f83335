use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions for one city, as returned by the provider.
///
/// Only the fields the view displays are modelled; everything else in the
/// provider body is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub name: String,
    /// Observation time, Unix seconds.
    pub dt: i64,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub wind: Wind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    /// Celsius, since requests always ask for metric units.
    pub temp: f64,
    /// Percent.
    pub humidity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub main: Option<String>,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Metres per second.
    pub speed: f64,
}

impl WeatherSnapshot {
    /// The primary condition, if the provider sent any.
    pub fn condition(&self) -> Option<&Condition> {
        self.weather.first()
    }

    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.dt, 0)
    }

    /// Observation time as `HH:MM:SS` in the given zone.
    pub fn local_time<Tz>(&self, tz: &Tz) -> Option<String>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        self.observed_at()
            .map(|t| t.with_timezone(tz).format("%H:%M:%S").to_string())
    }
}

impl Condition {
    pub fn icon_url(&self, icon_base_url: &str) -> String {
        format!("{}/img/wn/{}@2x.png", icon_base_url.trim_end_matches('/'), self.icon)
    }
}

/// Upper-cases the first character and leaves the rest alone.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

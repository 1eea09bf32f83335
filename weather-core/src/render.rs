//! Plain-text rendering of the weather view.

use chrono::TimeZone;
use std::fmt::{Display, Write};

use crate::{
    model::{WeatherSnapshot, capitalize},
    provider::WeatherProvider,
    recent::RecentSearches,
    storage::KeyValueStore,
    view::WeatherView,
};

pub const LOADING_LINE: &str = "Loading...";

/// Render every visible part of the view.
///
/// The loading, error and result blocks are independent: whichever flags
/// are set get drawn, even if that means more than one at once.
pub fn render_view<P, S, Tz>(view: &WeatherView<P, S>, icon_base_url: &str, tz: &Tz) -> String
where
    P: WeatherProvider,
    S: KeyValueStore,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();

    if !view.recent().is_empty() {
        out.push_str(&render_recent(view.recent()));
    }

    if view.is_loading() {
        let _ = writeln!(out, "{LOADING_LINE}");
    }

    if !view.error().is_empty() {
        let _ = writeln!(out, "Error: {}", view.error());
    }

    if let Some(snapshot) = view.snapshot() {
        out.push_str(&render_snapshot(snapshot, icon_base_url, tz));
    }

    out
}

/// Numbered shortcut list, in recency order.
pub fn render_recent(recent: &RecentSearches) -> String {
    let mut out = String::from("Recent Searches:\n");
    for (i, city) in recent.iter().enumerate() {
        let _ = writeln!(out, "  {}. {city}", i + 1);
    }
    out
}

pub fn render_snapshot<Tz>(snapshot: &WeatherSnapshot, icon_base_url: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    let _ = writeln!(out, "{}", snapshot.name);

    match snapshot.condition() {
        Some(cond) => {
            let _ = writeln!(out, "  Icon: {} ({})", cond.icon_url(icon_base_url), cond.description);
            let _ = writeln!(out, "  {}°C", snapshot.main.temp);
            let _ = writeln!(out, "  {}", capitalize(&cond.description));
        }
        None => {
            let _ = writeln!(out, "  {}°C", snapshot.main.temp);
            let _ = writeln!(out, "  Unknown");
        }
    }

    let _ = writeln!(out, "  Humidity: {}%", snapshot.main.humidity);
    let _ = writeln!(out, "  Wind: {} m/s", snapshot.wind.speed);

    let local_time = snapshot
        .local_time(tz)
        .unwrap_or_else(|| "unknown".to_string());
    let _ = writeln!(out, "  Local Time: {local_time}");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::LookupError,
        model::{Condition, MainReadings, Wind},
        storage::MemoryStore,
    };
    use async_trait::async_trait;
    use chrono::Utc;

    const ICONS: &str = "https://openweathermap.org";

    #[derive(Debug)]
    struct NoProvider;

    #[async_trait]
    impl WeatherProvider for NoProvider {
        async fn current_by_city(&self, _city: &str) -> Result<WeatherSnapshot, LookupError> {
            Err(LookupError::CityNotFound)
        }
    }

    fn tokyo() -> WeatherSnapshot {
        WeatherSnapshot {
            name: "Tokyo".into(),
            dt: 1_700_000_000,
            main: MainReadings { temp: 12.5, humidity: 82.0 },
            weather: vec![Condition {
                id: Some(500),
                main: Some("Rain".into()),
                description: "light rain".into(),
                icon: "10n".into(),
            }],
            wind: Wind { speed: 3.0 },
        }
    }

    #[test]
    fn snapshot_lines_match_response_fields() {
        let text = render_snapshot(&tokyo(), ICONS, &Utc);

        let expected = "Tokyo\n\
                        \x20 Icon: https://openweathermap.org/img/wn/10n@2x.png (light rain)\n\
                        \x20 12.5°C\n\
                        \x20 Light rain\n\
                        \x20 Humidity: 82%\n\
                        \x20 Wind: 3 m/s\n\
                        \x20 Local Time: 22:13:20\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn snapshot_without_condition_renders_unknown() {
        let mut snap = tokyo();
        snap.weather.clear();

        let text = render_snapshot(&snap, ICONS, &Utc);
        assert!(text.contains("  Unknown\n"));
        assert!(!text.contains("Icon:"));
    }

    #[test]
    fn empty_view_renders_nothing() {
        let view = WeatherView::new(NoProvider, MemoryStore::new()).unwrap();
        assert_eq!(render_view(&view, ICONS, &Utc), "");
    }

    #[test]
    fn loading_and_recent_blocks() {
        let mut view = WeatherView::new(NoProvider, MemoryStore::new()).unwrap();
        view.set_query("Oslo");
        let pending = view.begin_lookup().unwrap();
        view.finish_lookup(pending, Err(LookupError::CityNotFound)).unwrap();
        view.set_query("Lima");
        let _pending = view.begin_lookup().unwrap();

        let text = render_view(&view, ICONS, &Utc);
        assert_eq!(text, "Recent Searches:\n  1. Oslo\nLoading...\n");
    }

    #[test]
    fn error_and_stale_snapshot_can_show_together() {
        let mut view = WeatherView::new(NoProvider, MemoryStore::new()).unwrap();

        view.set_query("Tokyo");
        let first = view.begin_lookup().unwrap();
        view.set_query("Atlantis");
        let second = view.begin_lookup().unwrap();
        view.finish_lookup(first, Ok(tokyo())).unwrap();
        view.finish_lookup(second, Err(LookupError::CityNotFound)).unwrap();

        let text = render_view(&view, ICONS, &Utc);
        assert!(text.contains("Error: City not found\n"));
        assert!(text.contains("Tokyo\n  Icon:"));
        assert!(!text.contains(LOADING_LINE));
    }
}

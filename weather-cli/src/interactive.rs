//! Prompt loop standing in for the single-page view: edit the city, run a
//! lookup, pick a recent search, clear, or quit.

use std::fmt;

use anyhow::Context;
use chrono::Local;
use inquire::{InquireError, Select, Text};
use weather_lookup_core::{Config, RecentSearches, WeatherProvider, render};

use crate::cli::CliView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    EditQuery(String),
    Lookup,
    Recent(usize, String),
    Clear,
    Quit,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuItem::EditQuery(q) if q.is_empty() => f.write_str("Enter city"),
            MenuItem::EditQuery(q) => write!(f, "Enter city [{q}]"),
            MenuItem::Lookup => f.write_str("Get weather"),
            MenuItem::Recent(_, city) => write!(f, "  ↺ {city}"),
            MenuItem::Clear => f.write_str("Clear"),
            MenuItem::Quit => f.write_str("Quit"),
        }
    }
}

/// Menu entries for the current state, recent searches in list order.
pub fn menu_items(query: &str, recent: &RecentSearches) -> Vec<MenuItem> {
    let mut items = vec![MenuItem::EditQuery(query.to_string()), MenuItem::Lookup];
    items.extend(
        recent
            .iter()
            .enumerate()
            .map(|(i, city)| MenuItem::Recent(i, city.to_string())),
    );
    items.push(MenuItem::Clear);
    items.push(MenuItem::Quit);
    items
}

pub async fn run(mut view: CliView, config: &Config) -> anyhow::Result<()> {
    loop {
        let items = menu_items(view.query(), view.recent());
        let choice = match Select::new("Weather", items).with_page_size(10).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read menu choice"),
        };

        match choice {
            MenuItem::EditQuery(current) => {
                match Text::new("City:").with_initial_value(&current).prompt() {
                    Ok(text) => view.set_query(text),
                    Err(InquireError::OperationCanceled) => {}
                    Err(InquireError::OperationInterrupted) => break,
                    Err(e) => return Err(e).context("Failed to read city"),
                }
            }
            MenuItem::Lookup => {
                let Some(pending) = view.begin_lookup() else {
                    continue;
                };
                println!("{}", render::LOADING_LINE);

                let result = view.provider().current_by_city(pending.city()).await;
                view.finish_lookup(pending, result)
                    .context("Failed to save recent searches")?;

                print!("{}", render::render_view(&view, &config.icon_base_url, &Local));
            }
            MenuItem::Recent(index, _) => {
                view.select_recent(index);
            }
            MenuItem::Clear => {
                view.clear().context("Failed to clear recent searches")?;
                println!("Cleared.");
            }
            MenuItem::Quit => break,
        }
    }

    Ok(())
}

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode};
use tracing::{debug, info};
use weather_lookup_core::{
    Config, FileStore, LookupOutcome, RecentSearches, WeatherProvider, WeatherView,
    provider_from_config, render,
};

use crate::interactive;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather by city name")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, e.g. "Paris" or "San Jose,US".
        city: String,
    },

    /// List recent searches, newest first.
    Recent,

    /// Forget all recent searches.
    Clear,

    /// Prompt-driven lookup with recent-search shortcuts (the default).
    Interactive,
}

pub type CliView = WeatherView<Box<dyn WeatherProvider>, FileStore>;

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => configure(),
            Command::Show { city } => show(&city).await,
            Command::Recent => recent(),
            Command::Clear => clear(),
            Command::Interactive => {
                let config = Config::load()?;
                let view = open_view(&config)?;
                interactive::run(view, &config).await
            }
        }
    }
}

/// Build the view from config, loading persisted recent searches.
pub fn open_view(config: &Config) -> anyhow::Result<CliView> {
    let provider = provider_from_config(config)?;
    let store = FileStore::new(config.storage_file_path()?);
    debug!(storage = %store.path().display(), "opening weather view");
    let view = WeatherView::new(provider, store)
        .context("Failed to load recent searches")?
        .discard_stale_responses(config.discard_stale_responses);
    Ok(view)
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Get one at https://home.openweathermap.org/api_keys")
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.require_api_key()?;

    let path = config.save()?;
    info!(path = %path.display(), "API key saved");
    println!("Saved configuration to {}", path.display());
    Ok(())
}

async fn show(city: &str) -> anyhow::Result<()> {
    let config = Config::load()?;
    let mut view = open_view(&config)?;

    view.set_query(city);
    let outcome = view.lookup().await.context("Failed to save recent searches")?;
    if outcome == LookupOutcome::Skipped {
        println!("Nothing to look up: city name is empty.");
        return Ok(());
    }

    // Failures are part of the rendered view, not a process error.
    print!("{}", render::render_view(&view, &config.icon_base_url, &Local));
    Ok(())
}

fn recent() -> anyhow::Result<()> {
    let config = Config::load()?;
    let store = FileStore::new(config.storage_file_path()?);
    let recent = RecentSearches::load(&store).context("Failed to load recent searches")?;

    if recent.is_empty() {
        println!("No recent searches.");
    } else {
        print!("{}", render::render_recent(&recent));
    }
    Ok(())
}

fn clear() -> anyhow::Result<()> {
    let config = Config::load()?;
    let mut store = FileStore::new(config.storage_file_path()?);
    RecentSearches::forget(&mut store).context("Failed to clear recent searches")?;
    println!("Cleared recent searches.");
    Ok(())
}

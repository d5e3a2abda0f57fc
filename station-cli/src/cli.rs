use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use station_core::{AddOutcome, AppState, Catalog, Config, TemperatureUnit, pages, settings_summary};

use crate::{render, session};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "station", version, about = "Weather station display")]
pub struct Cli {
    /// Read preferences from this file instead of the platform config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured temperature unit (Celsius, Fahrenheit, Kelvin).
    #[arg(long, global = true)]
    pub unit: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the station page and one page per city.
    Show {
        /// Add a catalog city before rendering. Repeatable.
        #[arg(long = "city")]
        cities: Vec<String>,

        /// Print pages as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Search the city catalog.
    Search {
        /// Part of a city name; empty lists every city.
        #[arg(default_value = "")]
        query: String,
    },

    /// Convert a Celsius reading such as "8°C" for display.
    Convert {
        #[arg(allow_hyphen_values = true)]
        reading: String,
    },

    /// Show current settings and station diagnostics.
    Settings {
        /// Print settings as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Browse pages, add cities and change settings interactively.
    Interactive,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        tracing::debug!(?config, "loaded preferences");
        let mut state = config.initial_state();

        if let Some(label) = &self.unit {
            let unit = TemperatureUnit::try_from(label.as_str())?;
            state.set_temperature_unit(unit)?;
        }

        let catalog = Catalog::builtin();

        match self.command {
            Command::Show { cities, json } => {
                for name in &cities {
                    add_by_name(&mut state, &catalog, name)?;
                }

                let pages = pages(&state);
                if json {
                    let out = serde_json::to_string_pretty(&pages)
                        .context("Failed to serialize pages to JSON")?;
                    println!("{out}");
                } else {
                    print!("{}", render::pages(&pages));
                }
            }
            Command::Search { query } => {
                let hits = catalog.search(&query);
                if hits.is_empty() {
                    println!("No city matches '{query}'.");
                }
                for record in hits {
                    println!("{}", record.city);
                }
            }
            Command::Convert { reading } => {
                println!("{}", state.format_temperature(&reading));
            }
            Command::Settings { json } => {
                let summary = settings_summary(&state);
                if json {
                    let out = serde_json::to_string_pretty(&summary)
                        .context("Failed to serialize settings to JSON")?;
                    println!("{out}");
                } else {
                    print!("{}", render::settings(&summary));
                }
            }
            Command::Interactive => session::run(&mut state, &catalog)?,
        }

        Ok(())
    }
}

/// Add the catalog city called `name` (case-insensitive).
fn add_by_name(state: &mut AppState, catalog: &Catalog, name: &str) -> Result<AddOutcome> {
    let lower = name.to_lowercase();
    let record = catalog
        .records()
        .iter()
        .find(|record| record.city.to_lowercase() == lower)
        .ok_or_else(|| {
            anyhow!(
                "Unknown city '{name}'.\n\
                 Hint: run `station search {name}` to see matching cities."
            )
        })?;

    Ok(state.add_city(record))
}

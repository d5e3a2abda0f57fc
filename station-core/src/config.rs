use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    state::{AccentColor, AppState},
    units::{TemperatureFormatter, TemperatureUnit},
};

fn default_kelvin_enabled() -> bool {
    true
}

/// Startup preferences, read from disk and never written back.
///
/// Example TOML:
/// temperature_unit = "Fahrenheit"
/// accent_color = "green"
/// kelvin_enabled = false
/// station_name = "Garden"
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Unit label, e.g. "Celsius". Unknown labels mean Celsius.
    pub temperature_unit: Option<String>,

    #[serde(default)]
    pub accent_color: AccentColor,

    /// Offer Kelvin next to Celsius and Fahrenheit.
    #[serde(default = "default_kelvin_enabled")]
    pub kelvin_enabled: bool,

    #[serde(default)]
    pub station_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            temperature_unit: None,
            accent_color: AccentColor::default(),
            kelvin_enabled: default_kelvin_enabled(),
            station_name: String::new(),
        }
    }
}

impl Config {
    /// The configured unit, falling back to Celsius when unset, unknown or
    /// disabled.
    pub fn temperature_unit(&self) -> TemperatureUnit {
        let unit = self
            .temperature_unit
            .as_deref()
            .map(TemperatureUnit::from_label_lossy)
            .unwrap_or_default();

        if self.formatter().supports(unit) {
            unit
        } else {
            tracing::warn!(%unit, "unit disabled by configuration, using Celsius");
            TemperatureUnit::Celsius
        }
    }

    pub fn formatter(&self) -> TemperatureFormatter {
        TemperatureFormatter::new(self.kelvin_enabled)
    }

    /// Build the session state these preferences describe.
    pub fn initial_state(&self) -> AppState {
        let mut state = AppState::new(self.formatter());
        state.set_accent_color(self.accent_color);
        // temperature_unit() only yields units the formatter supports
        if let Err(err) = state.set_temperature_unit(self.temperature_unit()) {
            tracing::warn!(%err, "ignoring configured unit");
        }
        state.set_station_name(self.station_name.as_str());
        state
    }

    /// Load config from the platform location, or defaults if there is none.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    /// Load config from `path`, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::info!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weatherstation", "station-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

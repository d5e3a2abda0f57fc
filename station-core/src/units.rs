use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

/// Suffix of every stored reading.
const CELSIUS_SUFFIX: &str = "°C";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }

    pub const fn all() -> &'static [TemperatureUnit] {
        &[
            TemperatureUnit::Celsius,
            TemperatureUnit::Fahrenheit,
            TemperatureUnit::Kelvin,
        ]
    }

    /// Parse a stored label, falling back to Celsius for anything unknown.
    pub fn from_label_lossy(label: &str) -> Self {
        TemperatureUnit::try_from(label).unwrap_or_else(|_| {
            tracing::warn!(label, "unknown temperature unit, falling back to Celsius");
            TemperatureUnit::Celsius
        })
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TemperatureUnit {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.trim().to_lowercase();

        match lower.as_str() {
            "celsius" | "c" => Ok(TemperatureUnit::Celsius),
            "fahrenheit" | "f" => Ok(TemperatureUnit::Fahrenheit),
            "kelvin" | "k" => Ok(TemperatureUnit::Kelvin),
            _ => Err(anyhow::anyhow!(
                "Unknown temperature unit '{value}'. Supported units: Celsius, Fahrenheit, Kelvin."
            )),
        }
    }
}

/// Converts stored Celsius readings into display strings.
///
/// Kelvin output can be switched off; a formatter without it renders
/// Kelvin requests as Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureFormatter {
    kelvin_enabled: bool,
}

impl Default for TemperatureFormatter {
    fn default() -> Self {
        Self { kelvin_enabled: true }
    }
}

impl TemperatureFormatter {
    pub fn new(kelvin_enabled: bool) -> Self {
        Self { kelvin_enabled }
    }

    pub fn kelvin_enabled(&self) -> bool {
        self.kelvin_enabled
    }

    pub fn supports(&self, unit: TemperatureUnit) -> bool {
        unit != TemperatureUnit::Kelvin || self.kelvin_enabled
    }

    /// Units this formatter can render, in picker order.
    pub fn available_units(&self) -> Vec<TemperatureUnit> {
        TemperatureUnit::all()
            .iter()
            .copied()
            .filter(|unit| self.supports(*unit))
            .collect()
    }

    /// Render `reading` (`"<int>°C"`) in `unit`.
    ///
    /// Readings that do not parse are returned unchanged.
    pub fn format(&self, reading: &str, unit: TemperatureUnit) -> String {
        let Ok(value) = reading.replace(CELSIUS_SUFFIX, "").parse::<i64>() else {
            return reading.to_string();
        };

        match unit {
            TemperatureUnit::Fahrenheit => {
                // Truncates toward zero; see DESIGN.md before changing.
                let fahrenheit = (value as f64 * 9.0 / 5.0 + 32.0) as i64;
                format!("{fahrenheit}°F")
            }
            TemperatureUnit::Kelvin if self.kelvin_enabled => match value.checked_add(273) {
                Some(kelvin) => format!("{kelvin}K"),
                None => reading.to_string(),
            },
            _ => format!("{value}{CELSIUS_SUFFIX}"),
        }
    }
}

/// Render `reading` in `unit` with every unit available.
pub fn format_temperature(reading: &str, unit: TemperatureUnit) -> String {
    TemperatureFormatter::default().format(reading, unit)
}

use thiserror::Error;

use crate::units::TemperatureUnit;

/// Rejected mutations of [`crate::AppState`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("'{0}' is not one of your cities. Add it first, then pick it as capital.")]
    UnknownCity(String),

    #[error("{0} is disabled in the configuration (kelvin_enabled = false). Choose Celsius or Fahrenheit.")]
    UnitUnavailable(TemperatureUnit),

    #[error("Unknown accent color '{0}'. Supported colors: blue, green, red, orange, purple, pink.")]
    UnknownColor(String),
}

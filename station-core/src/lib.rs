//! Core library for the weather station app.
//!
//! This crate defines:
//! - Sample data models and the built-in city catalog
//! - Temperature unit conversion for display
//! - The application state with change subscriptions
//! - A toolkit-independent page model of what the app shows
//! - Startup configuration
//!
//! It is used by `station-cli`, but holds no terminal code and can back any front end.

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod pages;
pub mod state;
pub mod units;

pub use catalog::{Catalog, filter_cities};
pub use config::Config;
pub use error::StateError;
pub use model::{StationInfo, WeatherRecord};
pub use pages::{Page, PageKind, SettingsSummary, Tile, pages, settings_summary};
pub use state::{AccentColor, AddOutcome, AppState, StateChange, SubscriptionId};
pub use units::{TemperatureFormatter, TemperatureUnit, format_temperature};

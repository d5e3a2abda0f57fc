//! Toolkit-independent description of what the app shows.
//!
//! Front ends render [`Page`]s; they never read [`AppState`] fields
//! directly for layout decisions.

use serde::Serialize;

use crate::state::AppState;

pub const APP_VERSION: &str = "1.0.0 Beta";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub title: &'static str,
    pub icon: &'static str,
    pub content: String,
}

impl Tile {
    fn new(title: &'static str, icon: &'static str, content: impl Into<String>) -> Self {
        Self {
            title,
            icon,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Station,
    City,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub kind: PageKind,
    pub label: String,
    pub icon: &'static str,
    pub tiles: Vec<Tile>,
    /// Shown instead of tiles on the empty page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// The station page followed by one page per added city, or by a single
/// empty page when no city has been added yet.
pub fn pages(state: &AppState) -> Vec<Page> {
    let mut pages = vec![station_page(state)];

    if state.cities().is_empty() {
        pages.push(Page {
            kind: PageKind::Empty,
            label: "Cities".to_string(),
            icon: "plus.circle",
            tiles: Vec::new(),
            message: Some("No cities yet"),
        });
    } else {
        pages.extend(state.cities().iter().map(|city| Page {
            kind: PageKind::City,
            label: city.city.clone(),
            icon: "map",
            tiles: vec![
                Tile::new("City", "building.2.fill", city.city.as_str()),
                Tile::new(
                    "Temperature",
                    "thermometer.sun.fill",
                    state.format_temperature(&city.temperature),
                ),
                Tile::new("Humidity", "humidity.fill", city.humidity.as_str()),
                Tile::new("Wind speed", "wind", city.wind_speed.as_str()),
                Tile::new("Precipitation", "cloud.rain.fill", city.rain_amount.as_str()),
            ],
            message: None,
        }));
    }

    pages
}

fn station_page(state: &AppState) -> Page {
    let station = state.station_or_placeholder();

    // The station reading is shown as stored, without unit conversion.
    Page {
        kind: PageKind::Station,
        label: "Main station".to_string(),
        icon: "house",
        tiles: vec![
            Tile::new("Location", "building.2.fill", station.location),
            Tile::new("Current temperature", "thermometer.sun.fill", station.temperature),
            Tile::new("Humidity", "humidity.fill", station.humidity),
            Tile::new("Wind speed", "wind", station.wind_speed),
            Tile::new("Precipitation (per mm)", "cloud.rain.fill", station.rain_amount),
            Tile::new("Collected water", "waterbottle.fill", station.collected_water),
        ],
        message: None,
    }
}

/// Fixed readout of the station hardware.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationDiagnostics {
    pub battery: &'static str,
    pub update_status: &'static str,
    pub location: &'static str,
    pub software_version: &'static str,
}

impl Default for StationDiagnostics {
    fn default() -> Self {
        Self {
            battery: "87%",
            update_status: "No update available",
            location: "Bünde (automatic)",
            software_version: "2024.12.22",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsSummary {
    pub accent_color: String,
    pub temperature_unit: String,
    pub available_units: Vec<String>,
    /// `None` when no city has been added, as there is nothing to pick from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capital_city: Option<Option<String>>,
    pub station_name: String,
    pub diagnostics: StationDiagnostics,
    pub app_version: &'static str,
}

pub fn settings_summary(state: &AppState) -> SettingsSummary {
    let capital_city = if state.cities().is_empty() {
        None
    } else {
        Some(state.capital_city().map(str::to_string))
    };

    SettingsSummary {
        accent_color: state.accent_color().to_string(),
        temperature_unit: state.temperature_unit().to_string(),
        available_units: state
            .formatter()
            .available_units()
            .iter()
            .map(ToString::to_string)
            .collect(),
        capital_city,
        station_name: state.station_name().to_string(),
        diagnostics: StationDiagnostics::default(),
        app_version: APP_VERSION,
    }
}

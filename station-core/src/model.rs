use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sample readings for one city, as listed in the catalog.
///
/// Values are display strings; `temperature` is always stored in Celsius
/// (`"<int>°C"`) and converted only when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub id: Uuid,
    pub city: String,
    pub temperature: String,
    pub humidity: String,
    pub wind_speed: String,
    pub rain_amount: String,
}

impl WeatherRecord {
    /// Create a record with a freshly generated id.
    pub fn new(
        city: impl Into<String>,
        temperature: impl Into<String>,
        humidity: impl Into<String>,
        wind_speed: impl Into<String>,
        rain_amount: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            city: city.into(),
            temperature: temperature.into(),
            humidity: humidity.into(),
            wind_speed: wind_speed.into(),
            rain_amount: rain_amount.into(),
        }
    }
}

/// Readings of the primary station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationInfo {
    pub id: Uuid,
    pub location: String,
    pub temperature: String,
    pub humidity: String,
    pub wind_speed: String,
    pub rain_amount: String,
    pub collected_water: String,
}

impl StationInfo {
    pub fn new(
        location: impl Into<String>,
        temperature: impl Into<String>,
        humidity: impl Into<String>,
        wind_speed: impl Into<String>,
        rain_amount: impl Into<String>,
        collected_water: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            location: location.into(),
            temperature: temperature.into(),
            humidity: humidity.into(),
            wind_speed: wind_speed.into(),
            rain_amount: rain_amount.into(),
            collected_water: collected_water.into(),
        }
    }

    /// The station shown on first launch.
    pub fn demo() -> Self {
        Self::new(" Bünde", "8°C", "60%", "15 km/h", "0 mm", "20 L")
    }

    /// Stand-in used whenever no station is attached.
    pub fn placeholder() -> Self {
        Self::new("No station", "0°C", "0%", "0 km/h", "0 mm", "0 L")
    }
}

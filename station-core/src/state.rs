//! Application state shared by every screen of the app.
//!
//! [`AppState`] is owned by the front end and passed by reference. All
//! writes go through its setters; each setter that actually changes
//! something emits one [`StateChange`] to every subscriber, in
//! subscription order, after the change is applied.

use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

use crate::{
    error::StateError,
    model::{StationInfo, WeatherRecord},
    units::{TemperatureFormatter, TemperatureUnit},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    #[default]
    Blue,
    Green,
    Red,
    Orange,
    Purple,
    Pink,
}

impl AccentColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccentColor::Blue => "blue",
            AccentColor::Green => "green",
            AccentColor::Red => "red",
            AccentColor::Orange => "orange",
            AccentColor::Purple => "purple",
            AccentColor::Pink => "pink",
        }
    }

    pub const fn all() -> &'static [AccentColor] {
        &[
            AccentColor::Blue,
            AccentColor::Green,
            AccentColor::Red,
            AccentColor::Orange,
            AccentColor::Purple,
            AccentColor::Pink,
        ]
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for AccentColor {
    type Error = StateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.trim().to_lowercase();

        AccentColor::all()
            .iter()
            .copied()
            .find(|color| color.as_str() == lower)
            .ok_or_else(|| StateError::UnknownColor(value.to_string()))
    }
}

/// What a mutation changed. Carries the new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    AccentColor(AccentColor),
    TemperatureUnit(TemperatureUnit),
    CapitalCity(Option<String>),
    CityAdded(WeatherRecord),
    CurrentStation(Option<StationInfo>),
    StationName(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// A city with the same name was already in the list; nothing changed.
    AlreadyPresent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StateChange)>;

pub struct AppState {
    accent_color: AccentColor,
    temperature_unit: TemperatureUnit,
    formatter: TemperatureFormatter,
    capital_city: Option<String>,
    cities: Vec<WeatherRecord>,
    current_station: Option<StationInfo>,
    station_name: String,

    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TemperatureFormatter::default())
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("accent_color", &self.accent_color)
            .field("temperature_unit", &self.temperature_unit)
            .field("formatter", &self.formatter)
            .field("capital_city", &self.capital_city)
            .field("cities", &self.cities)
            .field("current_station", &self.current_station)
            .field("station_name", &self.station_name)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl AppState {
    /// Fresh state with the demo station attached and no cities.
    pub fn new(formatter: TemperatureFormatter) -> Self {
        Self {
            accent_color: AccentColor::default(),
            temperature_unit: TemperatureUnit::default(),
            formatter,
            capital_city: None,
            cities: Vec::new(),
            current_station: Some(StationInfo::demo()),
            station_name: String::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn accent_color(&self) -> AccentColor {
        self.accent_color
    }

    pub fn temperature_unit(&self) -> TemperatureUnit {
        self.temperature_unit
    }

    pub fn formatter(&self) -> TemperatureFormatter {
        self.formatter
    }

    pub fn capital_city(&self) -> Option<&str> {
        self.capital_city.as_deref()
    }

    pub fn cities(&self) -> &[WeatherRecord] {
        &self.cities
    }

    pub fn current_station(&self) -> Option<&StationInfo> {
        self.current_station.as_ref()
    }

    /// The attached station, or [`StationInfo::placeholder`] when none is.
    pub fn station_or_placeholder(&self) -> StationInfo {
        self.current_station
            .clone()
            .unwrap_or_else(StationInfo::placeholder)
    }

    pub fn station_name(&self) -> &str {
        &self.station_name
    }

    /// Render a stored Celsius reading in the selected unit.
    pub fn format_temperature(&self, reading: &str) -> String {
        self.formatter.format(reading, self.temperature_unit)
    }

    /// Register `listener` for every future change.
    pub fn subscribe(&mut self, listener: impl FnMut(&StateChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        let listener: Listener = Box::new(listener);
        self.listeners.push((id, listener));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn set_accent_color(&mut self, color: AccentColor) {
        if self.accent_color == color {
            return;
        }
        self.accent_color = color;
        self.notify(StateChange::AccentColor(color));
    }

    pub fn set_temperature_unit(&mut self, unit: TemperatureUnit) -> Result<(), StateError> {
        if !self.formatter.supports(unit) {
            return Err(StateError::UnitUnavailable(unit));
        }
        if self.temperature_unit != unit {
            self.temperature_unit = unit;
            self.notify(StateChange::TemperatureUnit(unit));
        }
        Ok(())
    }

    /// Select one of the added cities as capital, or clear the selection.
    pub fn set_capital_city(&mut self, city: Option<&str>) -> Result<(), StateError> {
        if let Some(name) = city.filter(|name| !self.has_city(name)) {
            return Err(StateError::UnknownCity(name.to_string()));
        }
        if self.capital_city.as_deref() == city {
            return Ok(());
        }
        self.capital_city = city.map(str::to_string);
        self.notify(StateChange::CapitalCity(self.capital_city.clone()));
        Ok(())
    }

    /// Append a copy of `record` unless a city with that name is already listed.
    pub fn add_city(&mut self, record: &WeatherRecord) -> AddOutcome {
        if self.has_city(&record.city) {
            tracing::debug!(city = %record.city, "city already added");
            return AddOutcome::AlreadyPresent;
        }
        self.cities.push(record.clone());
        self.notify(StateChange::CityAdded(record.clone()));
        AddOutcome::Added
    }

    pub fn set_current_station(&mut self, station: Option<StationInfo>) {
        if self.current_station == station {
            return;
        }
        self.current_station = station;
        self.notify(StateChange::CurrentStation(self.current_station.clone()));
    }

    pub fn set_station_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.station_name == name {
            return;
        }
        self.station_name = name;
        self.notify(StateChange::StationName(self.station_name.clone()));
    }

    pub fn has_city(&self, city: &str) -> bool {
        self.cities.iter().any(|existing| existing.city == city)
    }

    fn notify(&mut self, change: StateChange) {
        tracing::debug!(?change, listeners = self.listeners.len(), "state changed");
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::{cell::RefCell, rc::Rc};

    fn recorder(state: &mut AppState) -> (SubscriptionId, Rc<RefCell<Vec<StateChange>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = state.subscribe(move |change| sink.borrow_mut().push(change.clone()));
        (id, seen)
    }

    #[test]
    fn new_state_has_demo_station_and_no_cities() {
        let state = AppState::default();

        assert!(state.cities().is_empty());
        assert_eq!(state.temperature_unit(), TemperatureUnit::Celsius);
        assert_eq!(state.accent_color(), AccentColor::Blue);
        assert_eq!(state.station_or_placeholder().location, " Bünde");
    }

    #[test]
    fn missing_station_resolves_to_placeholder() {
        let mut state = AppState::default();
        state.set_current_station(None);

        assert!(state.current_station().is_none());
        assert_eq!(state.station_or_placeholder().location, "No station");
    }

    #[test]
    fn adding_same_city_twice_is_idempotent() {
        let catalog = Catalog::builtin();
        let mut state = AppState::default();
        let berlin = catalog.find("Berlin").expect("catalog has Berlin");

        assert_eq!(state.add_city(berlin), AddOutcome::Added);
        assert_eq!(state.add_city(berlin), AddOutcome::AlreadyPresent);
        assert_eq!(state.cities().len(), 1);
    }

    #[test]
    fn duplicate_detection_uses_city_name_not_id() {
        let mut state = AppState::default();
        let first = WeatherRecord::new("Köln", "6°C", "65%", "14 km/h", "0.1 mm");
        let second = WeatherRecord::new("Köln", "9°C", "40%", "3 km/h", "0 mm");

        state.add_city(&first);
        assert_eq!(state.add_city(&second), AddOutcome::AlreadyPresent);
        assert_eq!(state.cities()[0].temperature, "6°C");
    }

    #[test]
    fn added_city_keeps_catalog_id() {
        let catalog = Catalog::builtin();
        let mut state = AppState::default();
        let hamburg = catalog.find("Hamburg").expect("catalog has Hamburg");

        state.add_city(hamburg);
        assert_eq!(state.cities()[0].id, hamburg.id);
    }

    #[test]
    fn subscribers_see_each_effective_change_once() {
        let mut state = AppState::default();
        let (_, first) = recorder(&mut state);
        let (_, second) = recorder(&mut state);

        state.set_accent_color(AccentColor::Green);
        state.set_station_name("Garden");

        let expected = vec![
            StateChange::AccentColor(AccentColor::Green),
            StateChange::StationName("Garden".to_string()),
        ];
        assert_eq!(*first.borrow(), expected);
        assert_eq!(*second.borrow(), expected);
    }

    #[test]
    fn every_setter_announces_its_change() {
        let catalog = Catalog::builtin();
        let mut state = AppState::default();
        let (_, seen) = recorder(&mut state);
        let dresden = catalog.find("Dresden").expect("catalog has Dresden");

        assert_eq!(state.add_city(dresden), AddOutcome::Added);
        state.set_temperature_unit(TemperatureUnit::Fahrenheit).expect("supported");
        state.set_capital_city(Some("Dresden")).expect("Dresden was added");
        state.set_current_station(None);

        assert_eq!(
            *seen.borrow(),
            vec![
                StateChange::CityAdded(dresden.clone()),
                StateChange::TemperatureUnit(TemperatureUnit::Fahrenheit),
                StateChange::CapitalCity(Some("Dresden".to_string())),
                StateChange::CurrentStation(None),
            ]
        );
    }

    #[test]
    fn rejected_mutations_do_not_notify() {
        let mut state = AppState::new(TemperatureFormatter::new(false));
        let (_, seen) = recorder(&mut state);

        let err = state.set_temperature_unit(TemperatureUnit::Kelvin).unwrap_err();
        assert!(err.to_string().contains("kelvin_enabled = false"));
        assert!(state.set_capital_city(Some("Leipzig")).is_err());

        assert!(seen.borrow().is_empty());
        assert_eq!(state.capital_city(), None);
    }

    #[test]
    fn no_op_mutations_do_not_notify() {
        let catalog = Catalog::builtin();
        let mut state = AppState::default();
        let bunde = catalog.find("Bünde").expect("catalog has Bünde");
        state.add_city(bunde);

        let (_, seen) = recorder(&mut state);
        state.set_accent_color(AccentColor::Blue);
        state.set_temperature_unit(TemperatureUnit::Celsius).expect("celsius is supported");
        state.set_station_name("");
        state.add_city(bunde);
        state.set_capital_city(None).expect("clearing is allowed");

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn unsubscribed_listener_stops_receiving() {
        let mut state = AppState::default();
        let (id, seen) = recorder(&mut state);

        state.set_accent_color(AccentColor::Red);
        assert!(state.unsubscribe(id));
        assert!(!state.unsubscribe(id));
        state.set_accent_color(AccentColor::Pink);

        assert_eq!(*seen.borrow(), vec![StateChange::AccentColor(AccentColor::Red)]);
    }

    #[test]
    fn capital_must_be_an_added_city() {
        let catalog = Catalog::builtin();
        let mut state = AppState::default();

        let err = state.set_capital_city(Some("Berlin")).unwrap_err();
        assert_eq!(err, StateError::UnknownCity("Berlin".to_string()));

        state.add_city(catalog.find("Berlin").expect("catalog has Berlin"));
        state.set_capital_city(Some("Berlin")).expect("Berlin was added");
        assert_eq!(state.capital_city(), Some("Berlin"));

        state.set_capital_city(None).expect("clearing is allowed");
        assert_eq!(state.capital_city(), None);
    }

    #[test]
    fn kelvin_rejected_when_disabled() {
        let mut state = AppState::new(TemperatureFormatter::new(false));

        let err = state.set_temperature_unit(TemperatureUnit::Kelvin).unwrap_err();
        assert_eq!(err, StateError::UnitUnavailable(TemperatureUnit::Kelvin));
        assert_eq!(state.temperature_unit(), TemperatureUnit::Celsius);
    }

    #[test]
    fn format_follows_selected_unit() {
        let mut state = AppState::default();
        assert_eq!(state.format_temperature("100°C"), "100°C");

        state.set_temperature_unit(TemperatureUnit::Fahrenheit).expect("supported");
        assert_eq!(state.format_temperature("100°C"), "212°F");

        state.set_temperature_unit(TemperatureUnit::Kelvin).expect("supported");
        assert_eq!(state.format_temperature("0°C"), "273K");
    }

    #[test]
    fn accent_color_parses_case_insensitively() {
        assert_eq!(AccentColor::try_from("Purple"), Ok(AccentColor::Purple));
        assert_eq!(
            AccentColor::try_from("teal"),
            Err(StateError::UnknownColor("teal".to_string()))
        );
    }
}

//! Interactive menu loop.
//!
//! Pages are re-rendered only after a state change was announced to the
//! session's subscription.

use std::{cell::Cell, fmt, rc::Rc};

use anyhow::Result;
use inquire::{InquireError, Select, Text};
use station_core::{AccentColor, AddOutcome, AppState, Catalog, pages};

use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    AddCity,
    Unit,
    AccentColor,
    CapitalCity,
    StationName,
    Settings,
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::AddCity => "Add city",
            Action::Unit => "Temperature unit",
            Action::AccentColor => "Accent color",
            Action::CapitalCity => "Capital city",
            Action::StationName => "Station name",
            Action::Settings => "Show settings",
            Action::Quit => "Quit",
        })
    }
}

/// Menu entries available for `state`. Capital selection needs at least one city.
fn actions(state: &AppState) -> Vec<Action> {
    let mut actions = vec![Action::AddCity, Action::Unit, Action::AccentColor];
    if !state.cities().is_empty() {
        actions.push(Action::CapitalCity);
    }
    actions.extend([Action::StationName, Action::Settings, Action::Quit]);
    actions
}

const NO_CAPITAL: &str = "(none)";

pub fn run(state: &mut AppState, catalog: &Catalog) -> Result<()> {
    let dirty = Rc::new(Cell::new(true));
    let flag = Rc::clone(&dirty);
    let subscription = state.subscribe(move |_| flag.set(true));

    let result = menu_loop(state, catalog, &dirty);
    state.unsubscribe(subscription);

    match result {
        Err(err) if is_interrupt(&err) => Ok(()),
        other => other,
    }
}

fn menu_loop(state: &mut AppState, catalog: &Catalog, dirty: &Cell<bool>) -> Result<()> {
    loop {
        if dirty.replace(false) {
            println!("{}", render::pages(&pages(state)));
        }

        let Some(action) = Select::new("What next?", actions(state)).prompt_skippable()? else {
            return Ok(());
        };

        match action {
            Action::AddCity => add_city(state, catalog)?,
            Action::Unit => {
                let units = state.formatter().available_units();
                let cursor = units
                    .iter()
                    .position(|unit| *unit == state.temperature_unit())
                    .unwrap_or(0);
                if let Some(unit) = Select::new("Unit", units)
                    .with_starting_cursor(cursor)
                    .prompt_skippable()?
                {
                    state.set_temperature_unit(unit)?;
                }
            }
            Action::AccentColor => {
                let colors = AccentColor::all().to_vec();
                let cursor = colors
                    .iter()
                    .position(|color| *color == state.accent_color())
                    .unwrap_or(0);
                if let Some(color) = Select::new("Accent color", colors)
                    .with_starting_cursor(cursor)
                    .prompt_skippable()?
                {
                    state.set_accent_color(color);
                }
            }
            Action::CapitalCity => {
                let mut options = vec![NO_CAPITAL.to_string()];
                options.extend(state.cities().iter().map(|record| record.city.clone()));
                if let Some(choice) = Select::new("Capital city", options).prompt_skippable()? {
                    let city = (choice != NO_CAPITAL).then_some(choice.as_str());
                    state.set_capital_city(city)?;
                }
            }
            Action::StationName => {
                if let Some(name) = Text::new("Station name")
                    .with_initial_value(state.station_name())
                    .prompt_skippable()?
                {
                    state.set_station_name(name.trim());
                }
            }
            Action::Settings => {
                println!("{}", render::settings(&station_core::settings_summary(state)));
            }
            Action::Quit => return Ok(()),
        }
    }
}

fn add_city(state: &mut AppState, catalog: &Catalog) -> Result<()> {
    let Some(query) = Text::new("Search city").prompt_skippable()? else {
        return Ok(());
    };

    let hits = catalog.search(query.trim());
    if hits.is_empty() {
        println!("No city matches '{}'.", query.trim());
        return Ok(());
    }

    let names: Vec<String> = hits.iter().map(|record| record.city.clone()).collect();
    let Some(choice) = Select::new("Add city", names).prompt_skippable()? else {
        return Ok(());
    };

    let Some(record) = catalog.find(&choice) else {
        return Ok(());
    };
    if state.add_city(record) == AddOutcome::AlreadyPresent {
        println!("{} is already in your list.", record.city);
    }
    Ok(())
}

fn is_interrupt(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<InquireError>(),
        Some(InquireError::OperationInterrupted)
    )
}

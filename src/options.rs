//! Static option tables for dashboard forms.
//!
//! These are the enumerated lookup values the prediction form and the
//! management forms are built from. The numeric codes match the feature
//! encoding the prediction model was trained on, so they are part of the
//! wire contract with the upstream service and must not be renumbered.

use serde::Serialize;

/// One selectable value/label pair.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Choice {
    pub value: u8,
    pub label: &'static str,
}

const fn choice(value: u8, label: &'static str) -> Choice {
    Choice { value, label }
}

pub const SEASONS: [Choice; 4] = [
    choice(1, "Spring"),
    choice(2, "Summer"),
    choice(3, "Fall"),
    choice(4, "Winter"),
];

pub const HOLIDAY: [Choice; 2] = [choice(0, "No"), choice(1, "Yes")];

pub const WORKINGDAY: [Choice; 2] = [choice(0, "No"), choice(1, "Yes")];

/// Weekday codes: 0 is Sunday, 6 is Saturday.
pub const WEEKDAYS: [Choice; 7] = [
    choice(0, "Sunday"),
    choice(1, "Monday"),
    choice(2, "Tuesday"),
    choice(3, "Wednesday"),
    choice(4, "Thursday"),
    choice(5, "Friday"),
    choice(6, "Saturday"),
];

/// Short weekday labels used by the 7-day projection, indexed by weekday code.
pub const WEEKDAY_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const WEATHER: [Choice; 4] = [
    choice(1, "Clear"),
    choice(2, "Mist/Cloudy"),
    choice(3, "Light Rain/Snow"),
    choice(4, "Heavy Rain/Snow/Fog"),
];

/// Pick-up/drop-off stations. Order matters: the per-station distribution
/// weights in the forecast service are positional.
pub const STATIONS: [&str; 5] = ["Central Park", "Downtown", "Riverside", "City Center", "University"];

pub const SHIFTS: [&str; 4] = ["Morning", "Afternoon", "Evening", "Night"];

pub const WORKER_STATUSES: [&str; 4] = ["Active", "On Leave", "Training", "Terminated"];

pub const BIKE_TYPES: [&str; 2] = ["Regular", "Electric"];

pub const BIKE_STATUSES: [&str; 3] = ["Available", "In Use", "Maintenance"];

#[cfg(test)]
#[path = "options_test.rs"]
mod tests;

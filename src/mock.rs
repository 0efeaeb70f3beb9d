//! Canned fallback data.
//!
//! DESIGN
//! ======
//! Fallback is a first-class, permanent feature: every upstream call
//! degrades to the data below, and the dashboard is expected to function
//! fully with the prediction backend unreachable. The historical generator
//! takes an explicit base date and seed so fallback output is reproducible
//! in tests and stable across a single process lifetime.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use time::{Date, Duration, Weekday};

use crate::model::{Bike, BikeStatus, BikeType, HistoricalRecord, Shift, Worker, WorkerStatus};
use crate::upstream::{PredictionResponse, ResourceEstimate};

// =============================================================================
// ROSTER / FLEET
// =============================================================================

fn worker(id: &str, name: &str, station: &str, shift: Shift, status: WorkerStatus) -> Worker {
    Worker { id: id.into(), name: name.into(), station: station.into(), shift, status }
}

/// Seed roster used when neither the local mirror nor upstream has workers.
#[must_use]
pub fn workers() -> Vec<Worker> {
    vec![
        worker("1", "John Doe", "Central Park", Shift::Morning, WorkerStatus::Active),
        worker("2", "Jane Smith", "Downtown", Shift::Afternoon, WorkerStatus::Active),
        worker("3", "Mike Johnson", "Riverside", Shift::Evening, WorkerStatus::OnLeave),
        worker("4", "Sarah Williams", "City Center", Shift::Morning, WorkerStatus::Active),
        worker("5", "Robert Brown", "University", Shift::Afternoon, WorkerStatus::Active),
    ]
}

fn bike(id: &str, kind: BikeType, station: &str, status: BikeStatus, last_maintenance: Date) -> Bike {
    Bike { id: id.into(), kind, station: station.into(), status, last_maintenance }
}

/// Seed fleet used when neither the local mirror nor upstream has bikes.
#[must_use]
pub fn bikes() -> Vec<Bike> {
    use time::macros::date;
    vec![
        bike("101", BikeType::Electric, "Central Park", BikeStatus::Available, date!(2025 - 03 - 15)),
        bike("102", BikeType::Regular, "Downtown", BikeStatus::InUse, date!(2025 - 03 - 10)),
        bike("103", BikeType::Electric, "Riverside", BikeStatus::Maintenance, date!(2025 - 04 - 01)),
        bike("104", BikeType::Regular, "Central Park", BikeStatus::Available, date!(2025 - 03 - 20)),
        bike("105", BikeType::Electric, "City Center", BikeStatus::Available, date!(2025 - 03 - 25)),
        bike("106", BikeType::Regular, "University", BikeStatus::InUse, date!(2025 - 03 - 18)),
        bike("107", BikeType::Electric, "Downtown", BikeStatus::Available, date!(2025 - 03 - 22)),
        bike("108", BikeType::Regular, "Riverside", BikeStatus::Maintenance, date!(2025 - 04 - 05)),
    ]
}

// =============================================================================
// PREDICTION
// =============================================================================

/// Simulated prediction substituted when the model endpoint is unreachable.
#[must_use]
pub fn prediction() -> PredictionResponse {
    let mut distribution = BTreeMap::new();
    distribution.insert("Central Park".to_string(), 86);
    distribution.insert("Downtown".to_string(), 71);
    distribution.insert("Riverside".to_string(), 43);
    distribution.insert("City Center".to_string(), 57);
    distribution.insert("University".to_string(), 28);

    PredictionResponse {
        prediction: 285.0,
        resources: Some(ResourceEstimate { workers_needed: 6, maintenance_staff: 2, distribution }),
        event_message: None,
    }
}

// =============================================================================
// HISTORICAL FEED
// =============================================================================

/// One week of hourly rentals ending the day before `base`, with commuter
/// peaks on weekdays, a midday plateau on weekends, and seeded variation.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn historical(base: Date, seed: u64) -> Vec<HistoricalRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::with_capacity(7 * 24);

    for day_offset in 0..7_i64 {
        let date = base - Duration::days(7 - day_offset);
        let weekend = matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday);

        for hour in 0..24_u8 {
            let business = (8..=18).contains(&hour);
            let peak = (7..=9).contains(&hour) || (16..=18).contains(&hour);

            let base_rentals: f64 = if weekend {
                if business { 200.0 } else { 80.0 }
            } else if peak {
                350.0
            } else if business {
                180.0
            } else {
                50.0
            };

            let variation = rng.random_range(0.8..1.2);
            let rentals = (base_rentals * variation).floor() as i64;

            records.push(HistoricalRecord {
                date,
                hour,
                rentals,
                timestamp: Some(format!("{date}T{hour:02}:00:00")),
            });
        }
    }

    records
}

// =============================================================================
// STATIC DISPLAY DATA
// =============================================================================

/// Average daily rentals by weather bucket. Display-only.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WeatherImpact {
    pub name: &'static str,
    pub value: i64,
}

#[must_use]
pub fn weather_impact() -> Vec<WeatherImpact> {
    vec![
        WeatherImpact { name: "Sunny", value: 120 },
        WeatherImpact { name: "Cloudy", value: 85 },
        WeatherImpact { name: "Rainy", value: 40 },
        WeatherImpact { name: "Snowy", value: 20 },
    ]
}

/// Rental/return traffic per station. Display-only.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StationTraffic {
    pub name: &'static str,
    pub rentals: i64,
    pub returns: i64,
}

#[must_use]
pub fn top_stations() -> Vec<StationTraffic> {
    vec![
        StationTraffic { name: "Central Park", rentals: 342, returns: 315 },
        StationTraffic { name: "Downtown", rentals: 289, returns: 305 },
        StationTraffic { name: "University", rentals: 252, returns: 241 },
        StationTraffic { name: "Harbor View", rentals: 204, returns: 197 },
        StationTraffic { name: "Tech District", rentals: 187, returns: 201 },
    ]
}

#[cfg(test)]
#[path = "mock_test.rs"]
mod tests;

//! Derived-metrics calculator.
//!
//! DESIGN
//! ======
//! Pure arithmetic from operational inputs to staffing and maintenance
//! recommendations. No I/O, no side effects. Inputs arrive straight from
//! form widgets with only min/max attributes above them, so every function
//! here must accept any finite value — negative or out-of-range inputs
//! propagate through the arithmetic instead of erroring.

use serde::Serialize;

/// Maintenance workload derived from fleet size, usage intensity and a
/// weather factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceLoad {
    pub daily_inspections: i64,
    pub weekly_maintenance: i64,
    pub monthly_overhaul: i64,
    pub staff_needed: i64,
}

/// Inspection/repair workload implied by a predicted rental count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionWorkload {
    pub daily_inspections: i64,
    pub repairs: i64,
}

/// Combined load index: fleet size scaled by usage intensity and weather,
/// normalized so typical slider values land in single digits to low hundreds.
#[must_use]
pub fn base_load(bike_count: f64, usage_intensity: f64, weather_factor: f64) -> f64 {
    bike_count * usage_intensity * weather_factor / 10_000.0
}

/// Staffing and maintenance counts for the given operational inputs.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn maintenance_load(bike_count: f64, usage_intensity: f64, weather_factor: f64) -> MaintenanceLoad {
    let load = base_load(bike_count, usage_intensity, weather_factor);
    MaintenanceLoad {
        daily_inspections: (load * 20.0).round() as i64,
        weekly_maintenance: (load * 5.0).round() as i64,
        monthly_overhaul: (load * 1.2).round() as i64,
        staff_needed: (load * 3.0).ceil() as i64,
    }
}

/// Trucks required to move the given staff: one truck per five workers.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn trucks_for_staff(staff_needed: i64) -> i64 {
    (staff_needed as f64 / 5.0).ceil() as i64
}

/// Inspection/repair counts implied by a predicted rental volume.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn prediction_workload(predicted_rentals: f64) -> PredictionWorkload {
    let factor = predicted_rentals / 1000.0;
    PredictionWorkload {
        daily_inspections: (factor * 15.0).round() as i64,
        repairs: (factor * 3.0).round() as i64,
    }
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod tests;

//! Dashboard view payloads.
//!
//! Shapes current state into the summary cards, chart series, and tables
//! the dashboard renders. Read-only: whatever data is present gets shaped,
//! so the page renders even when fetches degraded to fallback data or no
//! prediction has been made yet.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::metrics::{self, MaintenanceLoad, PredictionWorkload};
use crate::mock::{self, StationTraffic, WeatherImpact};
use crate::model::{BikeStatus, WorkerStatus};
use crate::services::forecast::ForecastResult;
use crate::services::history::{self, DailyRentals, HourlyRentals, Trend, WeekdayAverage};
use crate::state::AppState;

// =============================================================================
// OVERVIEW
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub rentals_today: i64,
    pub trend: Trend,
    pub total_workers: usize,
    pub active_workers: usize,
    pub inactive_workers: usize,
    pub total_bikes: usize,
    pub available_bikes: usize,
    pub in_use_bikes: usize,
    pub maintenance_bikes: usize,
    /// Percentage of the fleet currently in use.
    pub utilization_rate: i64,
}

/// One slice of a status breakdown chart, in first-seen order.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Charts {
    pub daily: Vec<DailyRentals>,
    pub hourly_today: Vec<HourlyRentals>,
    pub weekday_averages: Vec<WeekdayAverage>,
    pub bike_status: Vec<StatusCount>,
    pub worker_status: Vec<StatusCount>,
    pub weather_impact: Vec<WeatherImpact>,
    pub top_stations: Vec<StationTraffic>,
}

#[derive(Debug, Serialize)]
pub struct Overview {
    pub summary: Summary,
    pub charts: Charts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast: Option<ForecastResult>,
}

#[derive(Debug, Serialize)]
pub struct DashboardError {
    pub error: String,
}

/// `GET /api/dashboard` — the whole dashboard payload.
pub async fn overview(
    State(state): State<AppState>,
) -> Result<Json<Overview>, (StatusCode, Json<DashboardError>)> {
    if let Some(message) = state.fatal.read().await.clone() {
        return Err((StatusCode::INTERNAL_SERVER_ERROR, Json(DashboardError { error: message })));
    }

    let records = state.history.read().await.clone();
    let summary = history::summarize(&records);
    let workers = state.workers.list().await;
    let bikes = state.bikes.list().await;
    let forecast = state.forecast.read().await.clone();

    let active_workers = workers.iter().filter(|w| w.status == WorkerStatus::Active).count();
    let in_use = bikes.iter().filter(|b| b.status == BikeStatus::InUse).count();
    let available = bikes.iter().filter(|b| b.status == BikeStatus::Available).count();
    let maintenance = bikes.iter().filter(|b| b.status == BikeStatus::Maintenance).count();

    Ok(Json(Overview {
        summary: Summary {
            rentals_today: summary.rentals_today,
            trend: summary.trend,
            total_workers: workers.len(),
            active_workers,
            inactive_workers: workers.len() - active_workers,
            total_bikes: bikes.len(),
            available_bikes: available,
            in_use_bikes: in_use,
            maintenance_bikes: maintenance,
            utilization_rate: percentage(in_use, bikes.len()),
        },
        charts: Charts {
            daily: summary.daily,
            hourly_today: summary.hourly_today,
            weekday_averages: summary.weekday_averages,
            bike_status: status_counts(bikes.iter().map(|b| b.status.as_str())),
            worker_status: status_counts(workers.iter().map(|w| w.status.as_str())),
            weather_impact: mock::weather_impact(),
            top_stations: mock::top_stations(),
        },
        forecast,
    }))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn percentage(part: usize, whole: usize) -> i64 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as i64
}

fn status_counts<'a>(statuses: impl Iterator<Item = &'a str>) -> Vec<StatusCount> {
    let mut counts: Vec<StatusCount> = Vec::new();
    for status in statuses {
        match counts.iter_mut().find(|count| count.name == status) {
            Some(count) => count.value += 1,
            None => counts.push(StatusCount { name: status.to_string(), value: 1 }),
        }
    }
    counts
}

// =============================================================================
// MAINTENANCE METRICS
// =============================================================================

fn default_bike_count() -> f64 {
    500.0
}
fn default_usage_intensity() -> f64 {
    70.0
}
fn default_weather_factor() -> f64 {
    50.0
}

/// Slider inputs, defaulting to the dashboard's initial positions.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceQuery {
    #[serde(default = "default_bike_count")]
    pub bike_count: f64,
    #[serde(default = "default_usage_intensity")]
    pub usage_intensity: f64,
    #[serde(default = "default_weather_factor")]
    pub weather_factor: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceResponse {
    #[serde(flatten)]
    pub load: MaintenanceLoad,
    pub total_trucks: i64,
    /// Present once a prediction exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_workload: Option<PredictionWorkload>,
}

/// `GET /api/maintenance` — derived staffing/maintenance recommendation.
#[allow(clippy::cast_precision_loss)]
pub async fn maintenance(
    State(state): State<AppState>,
    Query(query): Query<MaintenanceQuery>,
) -> Json<MaintenanceResponse> {
    let load = metrics::maintenance_load(query.bike_count, query.usage_intensity, query.weather_factor);
    let prediction_workload = state
        .forecast
        .read()
        .await
        .as_ref()
        .map(|forecast| metrics::prediction_workload(forecast.prediction as f64));

    Json(MaintenanceResponse {
        load,
        total_trucks: metrics::trucks_for_staff(load.staff_needed),
        prediction_workload,
    })
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;

//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the dashboard JSON API under `/api` and serves the static UI as
//! the router fallback. Handlers translate between HTTP and the service
//! layer; none of them own business logic.

pub mod dashboard;
pub mod fleet;
pub mod forecast;
pub mod roster;

use std::path::PathBuf;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, put};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::options;
use crate::state::{AppState, Dataset};

/// Dashboard API + static UI fallback.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let ui = ServeDir::new(ui_dir()).append_index_html_on_directories(true);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/status", get(status))
        .route("/api/options", get(option_tables))
        .route("/api/dashboard", get(dashboard::overview))
        .route("/api/maintenance", get(dashboard::maintenance))
        .route(
            "/api/forecast",
            get(forecast::latest).post(forecast::submit).delete(forecast::clear),
        )
        .route(
            "/api/workers",
            get(roster::list).post(roster::create).delete(roster::clear_all),
        )
        .route("/api/workers/{id}", put(roster::update).delete(roster::remove))
        .route(
            "/api/bikes",
            get(fleet::list).post(fleet::create).delete(fleet::clear_all),
        )
        .route("/api/bikes/{id}", put(fleet::update).delete(fleet::remove))
        .fallback_service(ui)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Resolve the static UI directory.
fn ui_dir() -> PathBuf {
    std::env::var("UI_DIR").map(PathBuf::from).unwrap_or_else(|_| PathBuf::from("ui"))
}

/// Destructive-action guard: deletes must carry `?confirm=true`.
#[derive(Debug, Deserialize)]
pub struct ConfirmQuery {
    #[serde(default)]
    pub confirm: bool,
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Per-dataset loading flags, `true` while a dataset is still loading.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingStatus {
    pub historical_data: bool,
    pub workers: bool,
    pub bikes: bool,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub ready: bool,
    pub loading: LoadingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// `GET /api/status` — readiness and the top-level error state.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let error = state.fatal.read().await.clone();
    Json(StatusResponse {
        ready: state.loading.ready(),
        loading: LoadingStatus {
            historical_data: !state.loading.settled(Dataset::History),
            workers: !state.loading.settled(Dataset::Workers),
            bikes: !state.loading.settled(Dataset::Bikes),
        },
        error,
    })
}

/// `GET /api/options` — the static option tables the forms are built from.
pub async fn option_tables() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "season": options::SEASONS,
        "holiday": options::HOLIDAY,
        "weekday": options::WEEKDAYS,
        "workingday": options::WORKINGDAY,
        "weather": options::WEATHER,
        "stations": options::STATIONS,
        "shifts": options::SHIFTS,
        "workerStatuses": options::WORKER_STATUSES,
        "bikeTypes": options::BIKE_TYPES,
        "bikeStatuses": options::BIKE_STATUSES,
    }))
}

//! Prediction form endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;

use crate::services::forecast::{self, ForecastForm, ForecastResult};
use crate::state::AppState;
use crate::upstream::UpstreamError;

/// Error payload for a surfaced prediction failure. `retryable` tells the
/// UI whether resubmitting the form has a chance of succeeding.
#[derive(Debug, Serialize)]
pub struct ForecastError {
    pub error: String,
    pub retryable: bool,
}

/// `POST /api/forecast` — shape the form into the model's feature vector,
/// submit it, and retain the normalized result as the latest prediction.
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<ForecastForm>,
) -> Result<Json<ForecastResult>, (StatusCode, Json<ForecastError>)> {
    match forecast::run(state.upstream.as_ref(), &state.config, &form).await {
        Ok(result) => {
            *state.forecast.write().await = Some(result.clone());
            Ok(Json(result))
        }
        Err(err) => Err(upstream_error_response(&err)),
    }
}

/// `GET /api/forecast` — the latest prediction, if any.
pub async fn latest(State(state): State<AppState>) -> Json<Option<ForecastResult>> {
    Json(state.forecast.read().await.clone())
}

/// `DELETE /api/forecast` — drop the current prediction.
pub async fn clear(State(state): State<AppState>) -> Json<serde_json::Value> {
    *state.forecast.write().await = None;
    Json(serde_json::json!({ "ok": true }))
}

fn upstream_error_response(err: &UpstreamError) -> (StatusCode, Json<ForecastError>) {
    let status = match err {
        UpstreamError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_GATEWAY,
    };
    (status, Json(ForecastError { error: err.to_string(), retryable: err.retryable() }))
}

#[cfg(test)]
#[path = "forecast_test.rs"]
mod tests;

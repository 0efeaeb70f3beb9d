//! Bike fleet endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;

use super::ConfirmQuery;
use super::roster::store_error_to_status;
use crate::model::{Bike, BikeDraft};
use crate::state::AppState;

/// `GET /api/bikes` — the fleet in insertion order.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Bike>> {
    Json(state.bikes.list().await)
}

/// `POST /api/bikes` — add a bike from a form submission.
pub async fn create(State(state): State<AppState>, Json(draft): Json<BikeDraft>) -> (StatusCode, Json<Bike>) {
    let bike = state.bikes.add(draft.into_bike()).await;
    (StatusCode::CREATED, Json(bike))
}

/// `PUT /api/bikes/{id}` — full replacement of one bike.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<BikeDraft>,
) -> Result<Json<Bike>, StatusCode> {
    state
        .bikes
        .update(draft.with_id(id))
        .await
        .map(Json)
        .map_err(store_error_to_status)
}

/// `DELETE /api/bikes/{id}` — remove one bike. Requires `confirm=true`.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ConfirmQuery>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    if !query.confirm {
        return Err(StatusCode::BAD_REQUEST);
    }
    state.bikes.remove(&id).await.map_err(store_error_to_status)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `DELETE /api/bikes` — intentionally clear the whole fleet.
pub async fn clear_all(
    State(state): State<AppState>,
    Query(query): Query<ConfirmQuery>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    if !query.confirm {
        return Err(StatusCode::BAD_REQUEST);
    }
    state.bikes.clear().await;
    Ok(Json(serde_json::json!({ "ok": true })))
}

#[cfg(test)]
#[path = "fleet_test.rs"]
mod tests;

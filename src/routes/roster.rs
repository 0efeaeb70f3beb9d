//! Worker roster endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;

use super::ConfirmQuery;
use crate::model::{Worker, WorkerDraft};
use crate::services::store::StoreError;
use crate::state::AppState;

/// `GET /api/workers` — the roster in insertion order.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Worker>> {
    Json(state.workers.list().await)
}

/// `POST /api/workers` — add a worker from a form submission.
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<WorkerDraft>,
) -> (StatusCode, Json<Worker>) {
    let worker = state.workers.add(draft.into_worker()).await;
    (StatusCode::CREATED, Json(worker))
}

/// `PUT /api/workers/{id}` — full replacement of one worker.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<WorkerDraft>,
) -> Result<Json<Worker>, StatusCode> {
    state
        .workers
        .update(draft.with_id(id))
        .await
        .map(Json)
        .map_err(store_error_to_status)
}

/// `DELETE /api/workers/{id}` — remove one worker. Requires `confirm=true`;
/// the store operation itself is unconditional once confirmed.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ConfirmQuery>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    if !query.confirm {
        return Err(StatusCode::BAD_REQUEST);
    }
    state.workers.remove(&id).await.map_err(store_error_to_status)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `DELETE /api/workers` — intentionally clear the whole roster. This is
/// the one path that durably records an empty collection.
pub async fn clear_all(
    State(state): State<AppState>,
    Query(query): Query<ConfirmQuery>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    if !query.confirm {
        return Err(StatusCode::BAD_REQUEST);
    }
    state.workers.clear().await;
    Ok(Json(serde_json::json!({ "ok": true })))
}

pub(crate) fn store_error_to_status(err: StoreError) -> StatusCode {
    match err {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
    }
}

#[cfg(test)]
#[path = "roster_test.rs"]
mod tests;

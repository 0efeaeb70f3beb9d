//! Startup hydration.
//!
//! DESIGN
//! ======
//! The three datasets load concurrently with no ordering dependency. Each
//! fetch independently resolves to live data or its canned fallback and
//! settles its own loading flag; a dataset already seeded from the local
//! mirror settles without touching upstream at all. Fetch failures are
//! never user-facing — the warning log is the only trace.
//!
//! ERROR HANDLING
//! ==============
//! A panic of the hydration task is the one unrecoverable case: it is
//! recorded as the top-level error and the dashboard shows a full-page
//! failure until the process is restarted.

use time::OffsetDateTime;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::mock;
use crate::state::{AppState, Dataset};

/// Full-page error shown when hydration itself dies.
pub const TOP_LEVEL_ERROR: &str = "An error occurred while fetching data. Please try again later.";

/// Spawn hydration in the background. The returned handle resolves once all
/// datasets have settled (or the task has died and been recorded).
pub fn spawn_hydration(state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        let hydration_state = state.clone();
        let task = tokio::spawn(async move { hydrate(&hydration_state).await });
        if let Err(err) = task.await {
            if err.is_panic() {
                error!("data hydration panicked; dashboard enters its top-level error state");
                *state.fatal.write().await = Some(TOP_LEVEL_ERROR.to_string());
            }
        }
    })
}

/// Run the three dataset loads concurrently to completion.
pub async fn hydrate(state: &AppState) {
    tokio::join!(hydrate_history(state), hydrate_workers(state), hydrate_bikes(state));
    info!(ready = state.loading.ready(), "hydration finished");
}

async fn hydrate_history(state: &AppState) {
    if state.loading.settled(Dataset::History) {
        return;
    }

    match state.upstream.historical().await {
        Ok(records) => {
            info!(count = records.len(), "historical data loaded from upstream");
            *state.history.write().await = records;
        }
        Err(err) => {
            warn!(error = %err, "historical fetch failed; using fallback data");
            let today = OffsetDateTime::now_utc().date();
            *state.history.write().await = mock::historical(today, state.config.jitter_seed);
        }
    }
    state.loading.settle(Dataset::History);
}

async fn hydrate_workers(state: &AppState) {
    if state.loading.settled(Dataset::Workers) {
        info!("worker roster restored from local mirror; skipping upstream fetch");
        return;
    }

    match state.upstream.workers().await {
        Ok(workers) => {
            info!(count = workers.len(), "worker roster loaded from upstream");
            state.workers.replace_all(workers).await;
        }
        Err(err) => {
            warn!(error = %err, "workers fetch failed; using fallback data");
            state.workers.replace_all(mock::workers()).await;
        }
    }
    state.loading.settle(Dataset::Workers);
}

async fn hydrate_bikes(state: &AppState) {
    if state.loading.settled(Dataset::Bikes) {
        info!("bike fleet restored from local mirror; skipping upstream fetch");
        return;
    }

    match state.upstream.bikes().await {
        Ok(bikes) => {
            info!(count = bikes.len(), "bike fleet loaded from upstream");
            state.bikes.replace_all(bikes).await;
        }
        Err(err) => {
            warn!(error = %err, "bikes fetch failed; using fallback data");
            state.bikes.replace_all(mock::bikes()).await;
        }
    }
    state.loading.settle(Dataset::Bikes);
}

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod tests;

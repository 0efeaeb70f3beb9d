//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into axum handlers via the `State` extractor. It
//! owns the two entity stores, the historical feed, the latest forecast
//! slot, and the per-dataset loading flags. All mutation goes through
//! `RwLock`s owned here; there is no other writer.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use crate::model::{Bike, HistoricalRecord, Worker};
use crate::services::forecast::{ForecastConfig, ForecastResult};
use crate::services::store::EntityStore;
use crate::storage::{BIKES_KEY, LocalStore, WORKERS_KEY};
use crate::upstream::DataApi;

// =============================================================================
// LOADING FLAGS
// =============================================================================

/// The three datasets hydrated at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    History,
    Workers,
    Bikes,
}

/// Per-dataset "settled" flags. A dataset settles exactly once — when its
/// fetch resolved (to live data or fallback) or when a local mirror made
/// the fetch unnecessary. Overall readiness is the AND of all three.
#[derive(Debug, Default)]
pub struct LoadingFlags {
    history: AtomicBool,
    workers: AtomicBool,
    bikes: AtomicBool,
}

impl LoadingFlags {
    fn flag(&self, dataset: Dataset) -> &AtomicBool {
        match dataset {
            Dataset::History => &self.history,
            Dataset::Workers => &self.workers,
            Dataset::Bikes => &self.bikes,
        }
    }

    pub fn settle(&self, dataset: Dataset) {
        self.flag(dataset).store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn settled(&self, dataset: Dataset) -> bool {
        self.flag(dataset).load(Ordering::SeqCst)
    }

    /// Finished loading only once every dataset has settled, regardless of
    /// whether each resolved to live or fallback data.
    #[must_use]
    pub fn ready(&self) -> bool {
        self.settled(Dataset::History) && self.settled(Dataset::Workers) && self.settled(Dataset::Bikes)
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state. Clone is required by axum — all inner fields
/// are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub workers: EntityStore<Worker>,
    pub bikes: EntityStore<Bike>,
    pub history: Arc<RwLock<Vec<HistoricalRecord>>>,
    /// Latest prediction; overwritten by each submission.
    pub forecast: Arc<RwLock<Option<ForecastResult>>>,
    pub loading: Arc<LoadingFlags>,
    /// Top-level hydration failure. When set, the dashboard shows a
    /// full-page error whose only recovery is a reload/restart.
    pub fatal: Arc<RwLock<Option<String>>>,
    pub upstream: Arc<dyn DataApi>,
    pub config: ForecastConfig,
}

impl AppState {
    /// Assemble state from its collaborators. Collections loaded from the
    /// local mirror arrive pre-seeded and settle their dataset immediately;
    /// everything else waits for hydration.
    #[must_use]
    pub fn new(
        upstream: Arc<dyn DataApi>,
        local: Arc<LocalStore>,
        config: ForecastConfig,
        mirrored_workers: Option<Vec<Worker>>,
        mirrored_bikes: Option<Vec<Bike>>,
    ) -> Self {
        let loading = Arc::new(LoadingFlags::default());
        if mirrored_workers.is_some() {
            loading.settle(Dataset::Workers);
        }
        if mirrored_bikes.is_some() {
            loading.settle(Dataset::Bikes);
        }

        Self {
            workers: EntityStore::new("workers", WORKERS_KEY, local.clone(), mirrored_workers.unwrap_or_default()),
            bikes: EntityStore::new("bikes", BIKES_KEY, local, mirrored_bikes.unwrap_or_default()),
            history: Arc::new(RwLock::new(Vec::new())),
            forecast: Arc::new(RwLock::new(None)),
            loading,
            fatal: Arc::new(RwLock::new(None)),
            upstream,
            config,
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

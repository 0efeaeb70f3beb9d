//! Entity store — client-local CRUD with a durable mirror.
//!
//! DESIGN
//! ======
//! Workers and bikes share one lifecycle: an order-preserving in-memory
//! collection with add/update/delete by id, mirrored wholesale to the local
//! key-value store after every mutation. One generic store serves both so
//! the two cannot drift apart.
//!
//! ERROR HANDLING
//! ==============
//! Mirror writes are best-effort: a failed write is logged and the in-memory
//! mutation stands. An empty collection is never mirrored implicitly —
//! only the explicit [`EntityStore::clear`] records emptiness durably.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::model::Entity;
use crate::storage::LocalStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no entry with id {0}")]
    NotFound(String),
}

/// Order-preserving in-memory collection mirrored to one storage key.
#[derive(Clone)]
pub struct EntityStore<T> {
    label: &'static str,
    key: &'static str,
    items: Arc<RwLock<Vec<T>>>,
    local: Arc<LocalStore>,
}

impl<T: Entity> EntityStore<T> {
    #[must_use]
    pub fn new(label: &'static str, key: &'static str, local: Arc<LocalStore>, initial: Vec<T>) -> Self {
        Self { label, key, items: Arc::new(RwLock::new(initial)), local }
    }

    /// Snapshot of the current collection in insertion order.
    pub async fn list(&self) -> Vec<T> {
        self.items.read().await.clone()
    }

    /// Append a new entry. No de-duplication: the caller owns id uniqueness
    /// (ids are UUIDs, assigned at draft materialization).
    pub async fn add(&self, item: T) -> T {
        let snapshot = {
            let mut items = self.items.write().await;
            items.push(item.clone());
            items.clone()
        };
        self.mirror(&snapshot);
        info!(label = self.label, id = item.id(), count = snapshot.len(), "entry added");
        item
    }

    /// Replace the entry whose id matches, wholesale. No partial-patch
    /// semantics.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no entry has the given id.
    pub async fn update(&self, item: T) -> Result<T, StoreError> {
        let snapshot = {
            let mut items = self.items.write().await;
            let slot = items
                .iter_mut()
                .find(|existing| existing.id() == item.id())
                .ok_or_else(|| StoreError::NotFound(item.id().to_string()))?;
            *slot = item.clone();
            items.clone()
        };
        self.mirror(&snapshot);
        info!(label = self.label, id = item.id(), "entry replaced");
        Ok(item)
    }

    /// Remove the entry with the given id, leaving all others in order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no entry has the given id.
    pub async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let snapshot = {
            let mut items = self.items.write().await;
            let position = items
                .iter()
                .position(|existing| existing.id() == id)
                .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
            items.remove(position);
            items.clone()
        };
        self.mirror(&snapshot);
        info!(label = self.label, id, count = snapshot.len(), "entry removed");
        Ok(())
    }

    /// Swap in a whole new collection (startup hydration).
    pub async fn replace_all(&self, replacement: Vec<T>) {
        let snapshot = {
            let mut items = self.items.write().await;
            *items = replacement;
            items.clone()
        };
        self.mirror(&snapshot);
        info!(label = self.label, count = snapshot.len(), "collection replaced");
    }

    /// Intentionally empty the collection. Unlike the implicit mirror, this
    /// DOES write the empty collection durably.
    pub async fn clear(&self) {
        {
            let mut items = self.items.write().await;
            items.clear();
        }
        if let Err(err) = self.local.put::<Vec<T>>(self.key, &Vec::new()) {
            warn!(error = %err, key = self.key, "failed to persist cleared collection");
        }
        info!(label = self.label, "collection cleared");
    }

    fn mirror(&self, items: &[T]) {
        if items.is_empty() {
            return;
        }
        if let Err(err) = self.local.put(self.key, &items) {
            warn!(error = %err, key = self.key, "mirror write failed; in-memory state retained");
        }
    }
}

/// Load a previously mirrored collection, treating any storage problem as
/// "no mirror": the caller falls through to upstream or canned data.
#[must_use]
pub fn load_mirror<T: DeserializeOwned>(local: &LocalStore, key: &str) -> Option<Vec<T>> {
    match local.get::<Vec<T>>(key) {
        Ok(found) => found,
        Err(err) => {
            warn!(error = %err, key, "failed to load mirrored collection; ignoring it");
            None
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

//! Domain model for the operations dashboard.
//!
//! DESIGN
//! ======
//! Wire JSON keeps the field names and enum spellings the dashboard UI and
//! the upstream service already speak ("On Leave", "In Use", "type",
//! "lastMaintenance"), so serde renames carry the translation. Stations stay
//! free strings: there is no validation layer above the entity stores, and
//! the option tables only constrain form input.

use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

// =============================================================================
// ENUMS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shift {
    Morning,
    Afternoon,
    Evening,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerStatus {
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
    Training,
    Terminated,
}

impl WorkerStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnLeave => "On Leave",
            Self::Training => "Training",
            Self::Terminated => "Terminated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BikeType {
    Regular,
    Electric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BikeStatus {
    Available,
    #[serde(rename = "In Use")]
    InUse,
    Maintenance,
}

impl BikeStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::InUse => "In Use",
            Self::Maintenance => "Maintenance",
        }
    }
}

// =============================================================================
// ENTITIES
// =============================================================================

/// Anything the entity store can hold: identified by a unique string id.
pub trait Entity: Clone + Send + Sync + Serialize + 'static {
    fn id(&self) -> &str;
}

/// A staff member on the operations roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: String,
    pub name: String,
    pub station: String,
    pub shift: Shift,
    pub status: WorkerStatus,
}

impl Entity for Worker {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A bike in the rental fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bike {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: BikeType,
    pub station: String,
    pub status: BikeStatus,
    #[serde(rename = "lastMaintenance")]
    pub last_maintenance: Date,
}

impl Entity for Bike {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One hour of observed rentals from the historical feed. Read-only from the
/// dashboard's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub date: Date,
    pub hour: u8,
    pub rentals: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

// =============================================================================
// DRAFTS
// =============================================================================

/// Worker form submission: everything but the server-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerDraft {
    pub name: String,
    pub station: String,
    pub shift: Shift,
    pub status: WorkerStatus,
}

impl WorkerDraft {
    /// Materialize the draft with a fresh collision-resistant id.
    #[must_use]
    pub fn into_worker(self) -> Worker {
        self.with_id(Uuid::new_v4().to_string())
    }

    /// Materialize the draft under an existing id (full-replacement update).
    #[must_use]
    pub fn with_id(self, id: String) -> Worker {
        Worker { id, name: self.name, station: self.station, shift: self.shift, status: self.status }
    }
}

/// Bike form submission: everything but the server-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BikeDraft {
    #[serde(rename = "type")]
    pub kind: BikeType,
    pub station: String,
    pub status: BikeStatus,
    #[serde(rename = "lastMaintenance")]
    pub last_maintenance: Date,
}

impl BikeDraft {
    /// Materialize the draft with a fresh collision-resistant id.
    #[must_use]
    pub fn into_bike(self) -> Bike {
        self.with_id(Uuid::new_v4().to_string())
    }

    /// Materialize the draft under an existing id (full-replacement update).
    #[must_use]
    pub fn with_id(self, id: String) -> Bike {
        Bike {
            id,
            kind: self.kind,
            station: self.station,
            status: self.status,
            last_maintenance: self.last_maintenance,
        }
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;

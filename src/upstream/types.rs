//! Wire types and errors for the prediction/data service.
//!
//! Provider-neutral surface: services and routes talk to the [`DataApi`]
//! trait so tests can script responses without a live endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Bike, HistoricalRecord, Worker};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by upstream service calls.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The HTTP request could not be sent or the connection failed.
    #[error("API request failed: {0}")]
    Request(String),

    /// The service returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    Status { status: u16, body: String },

    /// The response body did not contain a numeric `prediction` (or could
    /// not be deserialized at all).
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl UpstreamError {
    /// Whether a caller-driven resubmission has a chance of succeeding.
    /// There is no automatic retry anywhere; this only informs the display.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Status { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// PREDICTION WIRE TYPES
// =============================================================================

/// Feature vector sent to `POST /api/predict`. Field names and codes follow
/// the model's training encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub season: u8,
    pub month: u8,
    pub hour: u8,
    pub holiday: u8,
    pub weekday: u8,
    pub workingday: u8,
    pub weather: u8,
    pub temp: f64,
    /// Apparent temperature. Omitted entirely when the deployment does not
    /// derive it; the service falls back to its own approximation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atemp: Option<f64>,
    pub humidity: f64,
    pub windspeed: f64,
    pub year: u8,
}

/// Staffing recommendation attached to a prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEstimate {
    pub workers_needed: i64,
    pub maintenance_staff: i64,
    /// Bikes to pre-position per station.
    pub distribution: BTreeMap<String, i64>,
}

/// Normalized prediction response. Only `prediction` is required on the
/// wire; everything else is passed through when present.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResponse {
    pub prediction: f64,
    pub resources: Option<ResourceEstimate>,
    pub event_message: Option<String>,
}

// =============================================================================
// DATA API TRAIT
// =============================================================================

/// Async trait over the four upstream endpoints. Enables scripted fakes in
/// tests and alternative transports in deployments.
#[async_trait::async_trait]
pub trait DataApi: Send + Sync {
    /// Submit a feature vector and return the normalized prediction.
    ///
    /// # Errors
    ///
    /// Returns an [`UpstreamError`] on network failure, non-2xx status, or a
    /// response without a numeric `prediction`.
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, UpstreamError>;

    /// Fetch the historical rentals feed.
    ///
    /// # Errors
    ///
    /// Returns an [`UpstreamError`] on network, status, or parse failure.
    async fn historical(&self) -> Result<Vec<HistoricalRecord>, UpstreamError>;

    /// Fetch the seed worker roster.
    ///
    /// # Errors
    ///
    /// Returns an [`UpstreamError`] on network, status, or parse failure.
    async fn workers(&self) -> Result<Vec<Worker>, UpstreamError>;

    /// Fetch the seed bike fleet.
    ///
    /// # Errors
    ///
    /// Returns an [`UpstreamError`] on network, status, or parse failure.
    async fn bikes(&self) -> Result<Vec<Bike>, UpstreamError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
